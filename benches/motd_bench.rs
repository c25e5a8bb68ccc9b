//! Benchmarks for motdrs.
//!
//! Run with:
//!     cargo bench

use std::sync::Arc;

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use motdrs::MotdDevice;

fn bench_write(c: &mut Criterion) {
    let mut group = c.benchmark_group("write");

    for size in [64usize, 4 * 1024, 64 * 1024] {
        let data: Vec<u8> = (0..size).map(|i| (i * 7 + 13) as u8).collect();

        group.throughput(Throughput::Bytes(size as u64));

        // Append from empty: every write grows the buffer.
        group.bench_with_input(format!("append_{}b", size), &data, |b, data| {
            b.iter(|| {
                let dev = MotdDevice::new();
                dev.write(0, black_box(data)).unwrap();
                black_box(dev.len())
            });
        });

        // Overwrite in place: no growth on the hot path.
        group.bench_with_input(format!("overwrite_{}b", size), &data, |b, data| {
            let dev = MotdDevice::new();
            dev.write(0, data).unwrap();
            b.iter(|| {
                dev.write(0, black_box(data)).unwrap();
                black_box(dev.len())
            });
        });
    }

    group.finish();
}

fn bench_read(c: &mut Criterion) {
    let mut group = c.benchmark_group("read");
    let size = 64 * 1024;
    let data: Vec<u8> = (0..size).map(|i| (i * 7 + 13) as u8).collect();

    let dev = Arc::new(MotdDevice::new());
    dev.write(0, &data).unwrap();

    group.throughput(Throughput::Bytes(size as u64));
    group.bench_function("read_bytes_64kb", |b| {
        b.iter(|| black_box(dev.read_bytes(0, size).len()));
    });

    group.bench_function("read_into_vec_64kb", |b| {
        let mut sink = Vec::with_capacity(size);
        b.iter(|| {
            sink.clear();
            black_box(dev.read(0, size, &mut sink).unwrap())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_write, bench_read);
criterion_main!(benches);
