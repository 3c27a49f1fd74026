use criterion::{criterion_group, criterion_main, Criterion};

use odelab::{Float, adams4, improved_euler};

// ---------------------------------------------------------------------------
// Helpers: the y' = xy growth problem over [-1, 1]
// ---------------------------------------------------------------------------

fn growth(x: Float, y: Float) -> Float {
    x * y
}

// ---------------------------------------------------------------------------
// Both methods on the same grid
// ---------------------------------------------------------------------------

fn growth_200_steps(c: &mut Criterion) {
    let mut g = c.benchmark_group("growth_200_steps");

    g.bench_function("improved_euler", |b| {
        b.iter(|| improved_euler(&growth, -1.0, 1.0, 1.0, std::hint::black_box(0.01)))
    });

    g.bench_function("adams4", |b| {
        b.iter(|| adams4(&growth, -1.0, 1.0, 1.0, std::hint::black_box(0.01), 1e-6, 50))
    });

    g.finish();
}

fn growth_400_steps(c: &mut Criterion) {
    let mut g = c.benchmark_group("growth_400_steps");

    g.bench_function("improved_euler", |b| {
        b.iter(|| improved_euler(&growth, -1.0, 1.0, 1.0, std::hint::black_box(0.005)))
    });

    g.bench_function("adams4", |b| {
        b.iter(|| adams4(&growth, -1.0, 1.0, 1.0, std::hint::black_box(0.005), 1e-6, 50))
    });

    g.finish();
}

// ---------------------------------------------------------------------------
// Tight corrector tolerances force extra sweeps per step
// ---------------------------------------------------------------------------

fn corrector_tolerance(c: &mut Criterion) {
    let mut g = c.benchmark_group("corrector_tolerance");

    g.bench_function("loose_1e-4", |b| {
        b.iter(|| adams4(&growth, -1.0, 1.0, 1.0, 0.01, std::hint::black_box(1e-4), 50))
    });

    g.bench_function("tight_1e-12", |b| {
        b.iter(|| adams4(&growth, -1.0, 1.0, 1.0, 0.01, std::hint::black_box(1e-12), 50))
    });

    g.finish();
}

// ---------------------------------------------------------------------------

criterion_group!(benches, growth_200_steps, growth_400_steps, corrector_tolerance);
criterion_main!(benches);
