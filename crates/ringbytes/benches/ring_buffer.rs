//! Benchmark – `ringbytes::RingBuffer`
#![allow(missing_docs)]

use std::time::Duration;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use ringbytes::RingBuffer;

/// A buffer of `capacity` whose contents start `offset` bytes before the
/// physical end of the storage (`offset` in `1..=capacity + 1`), so that any
/// read longer than `offset` wraps.
fn positioned(capacity: usize, offset: usize, fill: usize) -> RingBuffer {
    let mut buf = RingBuffer::with_capacity(capacity).expect("capacity");
    let junk = vec![0u8; capacity + 1 - offset];
    buf.push_slice(&junk).expect("junk");
    buf.discard(junk.len()).expect("discard");
    let payload: Vec<u8> = (0..fill).map(|i| (i % 251) as u8).collect();
    buf.push_slice(&payload).expect("payload");
    buf
}

fn bench_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_pop");
    for &chunk in &[1usize, 64, 1024] {
        group.throughput(Throughput::Bytes(chunk as u64));
        let data = vec![0xA5u8; chunk];
        group.bench_with_input(BenchmarkId::new("slice", chunk), &chunk, |b, &chunk| {
            let mut buf = RingBuffer::with_capacity(4096).expect("capacity");
            b.iter(|| {
                buf.push_slice(black_box(&data)).expect("push");
                black_box(buf.take(chunk).expect("take"));
            });
        });
        group.bench_with_input(BenchmarkId::new("bytewise", chunk), &chunk, |b, _| {
            let mut buf = RingBuffer::with_capacity(4096).expect("capacity");
            b.iter(|| {
                for &byte in &data {
                    buf.push(black_box(byte)).expect("push");
                }
                while let Ok(byte) = buf.pop() {
                    black_box(byte);
                }
            });
        });
    }
    group.finish();
}

fn bench_copy_to(c: &mut Criterion) {
    let mut group = c.benchmark_group("copy_to");
    let len = 16 * 1024;
    group.throughput(Throughput::Bytes(len as u64));
    for (name, offset) in [("contiguous", len + 1), ("wrapped", len / 2)] {
        let buf = positioned(len, offset, len);
        let mut target = vec![0u8; len];
        group.bench_function(name, |b| {
            b.iter(|| {
                buf.copy_to(0, len, black_box(&mut target), 0).expect("copy");
            });
        });
    }
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    let len = 4096;
    let buf = positioned(len, len / 3, len);
    let needle = [250u8, 0, 1, 2];
    group.bench_function("find", |b| b.iter(|| black_box(buf.find(black_box(&needle)))));
    group.bench_function("occurrences", |b| {
        b.iter(|| black_box(buf.occurrences(black_box(&needle[..2]))));
    });
    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default().measurement_time(Duration::from_secs(3));
    targets = bench_push_pop, bench_copy_to, bench_search
}
criterion_main!(benches);
