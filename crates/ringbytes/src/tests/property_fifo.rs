use alloc::vec::Vec;

use quickcheck::QuickCheck;

use super::arbitrary::{SmallCapacity, test_count};
use crate::RingBuffer;

/// Property: bytes come back out of `pop` in the order they were pushed, no
/// matter where earlier fill/drain cycles left the cursors.
#[test]
fn fifo_roundtrip_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(capacity: SmallCapacity, warmup: Vec<u8>, payload: Vec<u8>) -> bool {
        let SmallCapacity(capacity) = capacity;
        let mut buf = RingBuffer::with_capacity(capacity).unwrap();

        // Move the cursors to an arbitrary position first.
        for chunk in warmup.chunks(capacity) {
            buf.push_slice(chunk).unwrap();
            buf.discard(chunk.len()).unwrap();
        }

        let mut out = Vec::with_capacity(payload.len());
        for chunk in payload.chunks(capacity) {
            for &byte in chunk {
                buf.push(byte).unwrap();
            }
            while let Ok(byte) = buf.pop() {
                out.push(byte);
            }
        }
        out == payload && buf.is_empty()
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(SmallCapacity, Vec<u8>, Vec<u8>) -> bool);
}

/// Property: `copy_to` yields the same bytes as a byte-by-byte `get` walk,
/// whether or not the requested range wraps.
#[test]
fn copy_to_agrees_with_get_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(capacity: SmallCapacity, shift: usize, payload: Vec<u8>, offset: usize) -> bool {
        let SmallCapacity(capacity) = capacity;
        let mut buf = RingBuffer::with_capacity(capacity).unwrap();
        for _ in 0..shift % (capacity + 1) {
            buf.push(0).unwrap();
            buf.pop().unwrap();
        }

        let payload = &payload[..payload.len().min(capacity)];
        buf.push_slice(payload).unwrap();
        if payload.is_empty() {
            return buf.to_vec().is_empty();
        }

        let offset = offset % payload.len();
        let length = payload.len() - offset;
        let mut target = alloc::vec![0u8; length];
        buf.copy_to(offset, length, &mut target, 0).unwrap();
        let walked: Vec<u8> = (offset..payload.len()).map(|i| buf.get(i).unwrap()).collect();
        target == walked && target == payload[offset..]
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(SmallCapacity, usize, Vec<u8>, usize) -> bool);
}

/// Three full wrap cycles followed by a known sequence.
#[test]
fn survives_repeated_wraparound() {
    const CAPACITY: usize = 10;
    let mut buf = RingBuffer::with_capacity(CAPACITY).unwrap();
    for cycle in 0..3u8 {
        for i in 0..CAPACITY - 1 {
            buf.push(cycle.wrapping_mul(31).wrapping_add(u8::try_from(i).unwrap())).unwrap();
        }
        while buf.pop().is_ok() {}
    }

    let known = b"0123456789";
    buf.push_slice(known).unwrap();
    assert!(buf.is_full());
    let drained: Vec<u8> = core::iter::from_fn(|| buf.pop().ok()).collect();
    assert_eq!(drained, known);
}
