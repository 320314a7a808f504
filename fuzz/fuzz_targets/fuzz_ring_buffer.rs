#![no_main]
use std::collections::VecDeque;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use ringbytes::{RingBuffer, RingBufferError};

#[derive(Arbitrary, Debug)]
enum Op {
    Push(u8),
    PushRange { bytes: Vec<u8>, offset: u8, length: u8 },
    Pop,
    Take(u8),
    Discard(u8),
    Get(u8),
    Find { needle: Vec<u8>, from: u8 },
    Occurrences(Vec<u8>),
    StartsWith(Vec<u8>),
    EndsWith(Vec<u8>),
    CopyTo { offset: u8, length: u8, target_len: u8, target_offset: u8 },
    CopyRange { offset: u8, length: u8, extra: u8 },
    Clear,
}

#[derive(Arbitrary, Debug)]
struct Input {
    capacity: u8,
    ops: Vec<Op>,
}

/// Reference answer for a naive, non-overlapping search over the model.
fn model_find(model: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    if needle.is_empty() || needle.len() > model.len() {
        return None;
    }
    (from..=model.len() - needle.len()).find(|&i| &model[i..i + needle.len()] == needle)
}

fn run(input: Input) {
    let capacity = usize::from(input.capacity);
    let Ok(mut buf) = RingBuffer::with_capacity(capacity) else {
        assert_eq!(capacity, 0);
        return;
    };
    let mut model = VecDeque::<u8>::new();

    for op in input.ops {
        match op {
            Op::Push(b) => match buf.push(b) {
                Ok(()) => model.push_back(b),
                Err(e) => {
                    assert_eq!(e, RingBufferError::BufferFull);
                    assert_eq!(model.len(), capacity);
                }
            },
            Op::PushRange { bytes, offset, length } => {
                let (offset, length) = (usize::from(offset), usize::from(length));
                match buf.push_range(&bytes, offset, length) {
                    Ok(()) => model.extend(&bytes[offset..offset + length]),
                    Err(RingBufferError::InvalidArgument(_)) => {
                        assert!(
                            (offset != 0 && offset >= bytes.len()) || offset + length > bytes.len()
                        );
                    }
                    Err(RingBufferError::BufferTooSmall { requested, available }) => {
                        assert_eq!(requested, length);
                        assert_eq!(available, capacity - model.len());
                        assert!(length > available);
                    }
                    Err(e) => panic!("unexpected {e:?}"),
                }
            }
            Op::Pop => assert_eq!(buf.pop().ok(), model.pop_front()),
            Op::Take(n) => {
                let n = usize::from(n);
                match buf.take(n) {
                    Ok(bytes) => assert_eq!(bytes, model.drain(..n).collect::<Vec<_>>()),
                    Err(_) => assert!(n > model.len()),
                }
            }
            Op::Discard(n) => {
                let n = usize::from(n);
                match buf.discard(n) {
                    Ok(()) => drop(model.drain(..n)),
                    Err(_) => assert!(n > model.len()),
                }
            }
            Op::Get(i) => {
                let i = usize::from(i);
                assert_eq!(buf.get(i).ok(), model.get(i).copied());
            }
            Op::Find { needle, from } => {
                let flat: Vec<u8> = model.iter().copied().collect();
                let from = usize::from(from);
                match buf.find_from(&needle, from) {
                    Ok(found) => assert_eq!(found, model_find(&flat, &needle, from)),
                    Err(_) => assert!(from >= flat.len()),
                }
                assert_eq!(buf.find(&needle), model_find(&flat, &needle, 0));
            }
            Op::Occurrences(needle) => {
                let flat: Vec<u8> = model.iter().copied().collect();
                let expected = (!needle.is_empty()).then(|| {
                    let mut count = 0;
                    let mut from = 0;
                    while let Some(i) = model_find(&flat, &needle, from) {
                        count += 1;
                        from = i + needle.len();
                    }
                    count
                });
                assert_eq!(buf.occurrences(&needle), expected);
            }
            Op::StartsWith(prefix) => {
                let flat: Vec<u8> = model.iter().copied().collect();
                assert_eq!(buf.starts_with(&prefix), !prefix.is_empty() && flat.starts_with(&prefix));
            }
            Op::EndsWith(suffix) => {
                let flat: Vec<u8> = model.iter().copied().collect();
                assert_eq!(buf.ends_with(&suffix), !suffix.is_empty() && flat.ends_with(&suffix));
            }
            Op::CopyTo { offset, length, target_len, target_offset } => {
                let (offset, length) = (usize::from(offset), usize::from(length));
                let target_offset = usize::from(target_offset);
                let mut target = vec![0u8; usize::from(target_len)];
                if buf.copy_to(offset, length, &mut target, target_offset).is_ok() {
                    let flat: Vec<u8> = model.iter().copied().collect();
                    assert_eq!(
                        &target[target_offset..target_offset + length],
                        &flat[offset..offset + length]
                    );
                }
            }
            Op::CopyRange { offset, length, extra } => {
                let (offset, length) = (usize::from(offset), usize::from(length));
                let capacity = length.max(1) + usize::from(extra);
                if let Ok(copy) = buf.copy_range_with_capacity(offset, length, capacity) {
                    let flat: Vec<u8> = model.iter().copied().collect();
                    assert_eq!(copy.to_vec(), &flat[offset..offset + length]);
                    assert_eq!(copy.capacity(), capacity);
                }
            }
            Op::Clear => {
                buf.clear();
                model.clear();
            }
        }

        buf.assert_consistent();
        assert_eq!(buf.len(), model.len());
        assert_eq!(buf.free(), capacity - model.len());
        assert!(buf.iter().eq(model.iter().copied()));
    }
}

fuzz_target!(|input: Input| run(input));
