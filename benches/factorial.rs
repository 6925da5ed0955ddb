use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use bigfact::product::sequential_product;
use bigfact::{digits_of, factorial_with, lgamma, ProductSettings};

// ---------------------------------------------------------------------------
// Exact product: fork-join tree vs. left-to-right reference
// ---------------------------------------------------------------------------

fn product(c: &mut Criterion) {
    let mut g = c.benchmark_group("factorial");
    g.sample_size(10);

    for &n in &[1_000i64, 10_000, 50_000] {
        g.bench_with_input(BenchmarkId::new("tree", n), &n, |b, &n| {
            let settings = ProductSettings::default();
            b.iter(|| factorial_with(std::hint::black_box(n), &settings))
        });

        g.bench_with_input(BenchmarkId::new("tree_serial", n), &n, |b, &n| {
            let settings = ProductSettings {
                parallel_threshold: u64::MAX,
                ..ProductSettings::default()
            };
            b.iter(|| factorial_with(std::hint::black_box(n), &settings))
        });

        g.bench_with_input(BenchmarkId::new("sequential", n), &n, |b, &n| {
            b.iter(|| sequential_product(1, std::hint::black_box(n as u64)))
        });
    }

    g.finish();
}

fn threshold(c: &mut Criterion) {
    let mut g = c.benchmark_group("parallel_threshold");
    g.sample_size(10);

    for &t in &[16u64, 128, 512, 4096] {
        g.bench_with_input(BenchmarkId::from_parameter(t), &t, |b, &t| {
            let settings = ProductSettings {
                parallel_threshold: t,
                ..ProductSettings::default()
            };
            b.iter(|| factorial_with(100_000, &settings))
        });
    }

    g.finish();
}

// ---------------------------------------------------------------------------
// Estimator
// ---------------------------------------------------------------------------

fn estimate(c: &mut Criterion) {
    c.bench_function("lgamma", |b| b.iter(|| lgamma(std::hint::black_box(3e12_f64))));
    c.bench_function("digits_of", |b| {
        b.iter(|| digits_of(std::hint::black_box(3_000_000_000_000)))
    });
}

criterion_group!(benches, product, threshold, estimate);
criterion_main!(benches);
