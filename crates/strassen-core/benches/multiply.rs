//! Criterion benchmarks for the multiplication strategies.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use strassen_core::registry::{DefaultFactory, MultiplierFactory};
use strassen_core::Matrix;

fn operand(n: usize, salt: usize) -> Matrix<f64> {
    Matrix::from_fn(n, n, |i, j| {
        let v = u32::try_from((i * 131 + j * 71 + salt) % 1000).unwrap_or(0);
        f64::from(v) / 500.0 - 1.0
    })
    .unwrap()
}

fn bench_strategies(c: &mut Criterion) {
    let factory = DefaultFactory::<f64>::new();
    // Includes non-powers of two to measure padding overhead.
    let sizes: Vec<usize> = vec![16, 63, 64, 128, 200];

    for name in factory.available() {
        let multiplier = factory.get(name).unwrap();
        let mut group = c.benchmark_group(multiplier.name().to_string());
        for &n in &sizes {
            let a = operand(n, 1);
            let b = operand(n, 2);
            group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, _| {
                bench.iter(|| multiplier.multiply(&a, &b).unwrap());
            });
        }
        group.finish();
    }
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
