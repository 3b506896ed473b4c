use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use kitbag::combine::{intersection, sort_by, ByKey};
use kitbag::select::uniq;

pub fn criterion_benchmark(c: &mut Criterion) {
    // Sequences with plenty of duplicates so deduplication has work to do.
    let mut numbers: Vec<u64> = Vec::new();
    for n in 0..1_000 {
        numbers.push(n % 100);
    }
    c.bench_function("uniq 1k", |b| b.iter(|| uniq(black_box(&numbers))));
    for n in 1_000..100_000 {
        numbers.push(n % 1_000);
    }
    c.bench_function("uniq 100k", |b| b.iter(|| uniq(black_box(&numbers))));
    for n in 100_000..1_000_000 {
        numbers.push(n % 10_000);
    }
    c.bench_function("uniq 1M", |b| b.iter(|| uniq(black_box(&numbers))));

    // Two half-overlapping ranges.
    let mut left: Vec<u64> = (0..10_000).collect();
    let mut right: Vec<u64> = (5_000..15_000).collect();
    c.bench_function("intersection 10k", |b| {
        b.iter(|| intersection(black_box(&[&left[..], &right[..]])))
    });
    left.extend(10_000..1_000_000);
    right.extend(1_005_000..2_000_000);
    c.bench_function("intersection 1M", |b| {
        b.iter(|| intersection(black_box(&[&left[..], &right[..]])))
    });

    let mixed: Vec<u64> = (0..100_000)
        .map(|n: u64| n.wrapping_mul(2_654_435_761) % 1_000_003)
        .collect();
    c.bench_function("sort_by 100k", |b| {
        b.iter(|| sort_by(black_box(&mixed), ByKey(|n: &u64| *n)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
