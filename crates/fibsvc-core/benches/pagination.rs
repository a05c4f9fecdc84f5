//! Criterion benchmarks for pagination and page resolution.

use std::collections::BTreeSet;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use fibsvc_core::generator::compute_unchecked;
use fibsvc_core::paginator::paginate;
use fibsvc_core::resolve::resolve_many;
use fibsvc_core::NoCache;

fn bench_paginate(c: &mut Criterion) {
    let exclusions: BTreeSet<u64> = (1..=10_000u64).filter(|i| i % 7 == 0).collect();
    let totals: Vec<i64> = vec![1_000, 100_000, 10_000_000];

    let mut group = c.benchmark_group("paginate");
    for &total in &totals {
        group.bench_with_input(BenchmarkId::from_parameter(total), &total, |b, &total| {
            b.iter(|| paginate(total, 3, 100, &exclusions).unwrap());
        });
    }
    group.finish();
}

fn bench_generator(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute");
    for &n in &[100u64, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| compute_unchecked(n));
        });
    }
    group.finish();
}

fn bench_resolve_page(c: &mut Criterion) {
    let indices: Vec<u64> = (9_901..=10_000).collect();
    let cache = NoCache::new();
    c.bench_function("resolve_many/100@10k", |b| {
        b.iter(|| resolve_many(&indices, &cache));
    });
}

criterion_group!(benches, bench_paginate, bench_generator, bench_resolve_page);
criterion_main!(benches);
