use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use divsubset::best_mask;
use std::hint::black_box;

fn values(len: usize) -> Vec<i64> {
    (0..len as i64).map(|i| i * 7919 % 1000 - 500).collect()
}

fn search_varying_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_varying_length");

    for len in [8, 12, 16, 18] {
        let numbers = values(len);
        group.throughput(Throughput::Elements(1u64 << len));
        group.bench_with_input(BenchmarkId::from_parameter(len), &numbers, |b, numbers| {
            b.iter(|| best_mask(black_box(numbers)));
        });
    }

    group.finish();
}

criterion_group!(benches, search_varying_length);
criterion_main!(benches);
