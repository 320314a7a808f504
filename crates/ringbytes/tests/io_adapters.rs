#![expect(missing_docs)]

use std::io::{Cursor, Read, Write};

use ringbytes::RingBuffer;

/// Pumps `source` through a small ring buffer in uneven steps, the way bytes
/// arriving from a socket would be staged before a consumer drains them.
#[test]
fn pumps_stream_through_small_buffer() {
    let payload: Vec<u8> = (0..1_000u32).map(|i| (i * 7 % 256) as u8).collect();
    let mut source = Cursor::new(payload.clone());
    let mut ring = RingBuffer::with_capacity(13).unwrap();
    let mut sink = Vec::new();
    let mut chunk = [0u8; 9];
    let mut out = [0u8; 5];

    loop {
        let want = ring.free().min(chunk.len());
        let n = source.read(&mut chunk[..want]).unwrap();
        let written = ring.write(&chunk[..n]).unwrap();
        assert_eq!(written, n);

        let m = ring.read(&mut out).unwrap();
        sink.extend_from_slice(&out[..m]);
        if n == 0 && ring.is_empty() {
            break;
        }
    }
    assert_eq!(sink, payload);
}

#[test]
fn write_all_fails_once_full() {
    let mut ring = RingBuffer::with_capacity(3).unwrap();
    assert!(ring.write_all(b"abcd").is_err());
    assert_eq!(ring.to_vec(), b"abc");
    ring.flush().unwrap();
}
