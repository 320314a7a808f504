#![allow(missing_docs)]
#![allow(dead_code)]

use ringbytes::RingBuffer;

pub const HELLO: &[u8] = b"HELLO WORLD";

/// Returns an empty buffer whose cursors have been driven around the storage
/// `cycles` times by filling to `capacity - 1` and draining.
pub fn circled(capacity: usize, cycles: usize) -> RingBuffer {
    let mut buf = RingBuffer::with_capacity(capacity).expect("capacity");
    let fill: Vec<u8> = (0..capacity - 1).map(|i| (i % 251) as u8).collect();
    for _ in 0..cycles {
        buf.push_slice(&fill).expect("fill");
        buf.discard(fill.len()).expect("drain");
    }
    buf
}

/// `circled`, then loaded with `bytes`.
pub fn circled_with(capacity: usize, cycles: usize, bytes: &[u8]) -> RingBuffer {
    let mut buf = circled(capacity, cycles);
    buf.push_slice(bytes).expect("payload fits");
    buf
}
