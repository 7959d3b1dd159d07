use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use seqkit::{chunk, filter, group_by, min_max, partition, reduce, unique, unique_by};
use std::hint::black_box;

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];

/// Random input with a bounded value range so dedup and grouping see repeats
fn random_input(len: usize, seed: u64) -> Vec<u32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(0..1_000)).collect()
}

fn bench_linear_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("linear");

    for &size in &SIZES {
        let input = random_input(size, 7);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("filter", size), &input, |b, input| {
            b.iter(|| filter(black_box(input), |v| v % 2 == 0))
        });
        group.bench_with_input(BenchmarkId::new("partition", size), &input, |b, input| {
            b.iter(|| partition(black_box(input), |v| *v < 500))
        });
        group.bench_with_input(BenchmarkId::new("reduce", size), &input, |b, input| {
            b.iter(|| reduce(black_box(input), 0u64, |acc, v| acc + u64::from(*v)))
        });
        group.bench_with_input(BenchmarkId::new("chunk_64", size), &input, |b, input| {
            b.iter(|| chunk(black_box(input), 64))
        });
        group.bench_with_input(BenchmarkId::new("min_max", size), &input, |b, input| {
            b.iter(|| *min_max(black_box(input)).0)
        });
    }

    group.finish();
}

fn bench_hashed_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("hashed");

    for &size in &SIZES {
        let input = random_input(size, 11);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("unique", size), &input, |b, input| {
            b.iter(|| unique(black_box(input)))
        });
        group.bench_with_input(BenchmarkId::new("unique_by", size), &input, |b, input| {
            b.iter(|| unique_by(black_box(input), |v| v / 10))
        });
        group.bench_with_input(BenchmarkId::new("group_by", size), &input, |b, input| {
            b.iter(|| group_by(black_box(input), |v| v % 16))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_linear_ops, bench_hashed_ops);
criterion_main!(benches);
