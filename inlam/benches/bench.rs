use criterion::{Criterion, black_box, criterion_group, criterion_main};

use inlam::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

fn sample_points(n: usize) -> Vec<f64> {
    // Seeded for determinism across runs.
    let mut rng = ChaCha20Rng::seed_from_u64(0x42);
    (0..n).map(|_| rng.random_range(-1.0..1.0)).collect()
}

fn bench_polynomial(c: &mut Criterion) {
    let points = sample_points(4096);

    // x² + 3x + 1, once as a self-inlining expression and once through the
    // kinds of indirection the expression is meant to replace.
    let x = arg::<f64>();
    let poly = lambda(x, x * x + lit::<3>() * x + lit::<1>());
    let poly_ptr: fn(f64) -> f64 = |v| v * v + 3.0 * v + 1.0;
    let poly_boxed: Box<dyn Fn(f64) -> f64> = Box::new(|v| v * v + 3.0 * v + 1.0);

    c.bench_function("poly_self_inlined", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &p in &points {
                acc += poly.eval_at(black_box(p));
            }
            acc
        })
    });

    c.bench_function("poly_fn_pointer", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &p in &points {
                acc += poly_ptr(black_box(p));
            }
            acc
        })
    });

    c.bench_function("poly_boxed_closure", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &p in &points {
                acc += poly_boxed(black_box(p));
            }
            acc
        })
    });
}

fn bench_power_tower(c: &mut Criterion) {
    let points = sample_points(4096);

    // x¹⁶ as four stacked squarings, a deeper tree than the polynomial.
    let x = arg::<f64>();
    let x2 = x * x;
    let x4 = x2 * x2;
    let x8 = x4 * x4;
    let x16 = x8 * x8;

    c.bench_function("tower_self_inlined", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &p in &points {
                acc += x16.eval_at(black_box(p));
            }
            acc
        })
    });

    c.bench_function("tower_hand_written", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &p in &points {
                let p = black_box(p);
                let p2 = p * p;
                let p4 = p2 * p2;
                let p8 = p4 * p4;
                acc += p8 * p8;
            }
            acc
        })
    });
}

criterion_group!(benches, bench_polynomial, bench_power_tower);
criterion_main!(benches);
