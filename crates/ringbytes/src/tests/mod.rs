mod property_fifo;
