//! `std::io` adapters for [`RingBuffer`].
//!
//! Writing accepts as many bytes as there is room for and reports a short
//! write (eventually `Ok(0)`) once the buffer fills up; reading drains from
//! the front and reports `Ok(0)` when the buffer is empty. This lets a buffer
//! sit between a socket and a framing layer via `io::copy`-style loops.
use std::io;

use crate::RingBuffer;

impl io::Write for RingBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = buf.len().min(self.free());
        self.push_range(buf, 0, n).map_err(io::Error::other)?;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl io::Read for RingBuffer {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = buf.len().min(self.len());
        self.copy_to(0, n, buf, 0).map_err(io::Error::other)?;
        self.discard(n).map_err(io::Error::other)?;
        Ok(n)
    }
}
