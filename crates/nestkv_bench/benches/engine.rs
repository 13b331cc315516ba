//! Transaction engine benchmarks.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use nestkv_bench::{generate_keys, stacked_store};
use nestkv_core::Store;

/// Benchmark writes with no transaction open.
fn bench_write_base(c: &mut Criterion) {
    let keys = generate_keys(1024);
    c.bench_function("write_base", |b| {
        let mut store = Store::new();
        let mut i = 0usize;
        b.iter(|| {
            store.write(keys[i % keys.len()].as_str(), "value");
            i += 1;
        });
    });
}

/// Benchmark reads that miss every frame and fall through to the map.
fn bench_read_through_frames(c: &mut Criterion) {
    let mut group = c.benchmark_group("read_through_frames");

    for depth in [1usize, 4, 16, 64].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(depth), depth, |b, &depth| {
            let keys = generate_keys(16);
            let mut store = Store::new();
            store.write("committed", "value");
            for _ in 0..depth {
                store.begin();
                for key in &keys {
                    store.write(key.as_str(), "pending");
                }
            }

            b.iter(|| {
                let value = store.read(black_box("committed")).unwrap();
                black_box(value);
            });
        });
    }

    group.finish();
}

/// Benchmark unwinding a full stack and flushing it.
fn bench_commit_flush(c: &mut Criterion) {
    let mut group = c.benchmark_group("commit_flush");

    for count in [16usize, 256, 4096].iter() {
        group.throughput(Throughput::Elements(*count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, &count| {
            let keys = generate_keys(count);
            b.iter_with_setup(
                || stacked_store(4, &keys),
                |mut store| {
                    while store.commit().is_ok() {}
                    black_box(store);
                },
            );
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_write_base,
    bench_read_through_frames,
    bench_commit_flush
);
criterion_main!(benches);
