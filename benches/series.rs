use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hodiff::{Real, Series};

fn kinematics<T: Real>(w: &T, x: &T, y: &T, z: &T) -> T {
    let inner = w.clone() * (x.clone() * y.ln() / z.clone()).sin()
        + (w.clone() * z.clone() / (x.clone() * y.clone())).sqrt();
    inner.exp() + w.clone() * w.clone() / z.tan()
}

fn bench_univariate(c: &mut Criterion) {
    let mut group = c.benchmark_group("univariate");
    for order in [2, 4, 8, 16] {
        group.bench_with_input(BenchmarkId::new("exp_sin", order), &order, |b, &order| {
            b.iter(|| {
                let x = Series::variable(order, black_box(0.7_f64));
                black_box((&x * &x).sin().exp())
            })
        });

        group.bench_with_input(BenchmarkId::new("division", order), &order, |b, &order| {
            b.iter(|| {
                let x = Series::variable(order, black_box(1.3_f64));
                black_box(Series::constant(1.0) / (&x * &x + Series::constant(1.0)))
            })
        });
    }
    group.finish();
}

fn bench_multivariate(c: &mut Criterion) {
    let mut group = c.benchmark_group("multivariate");

    group.bench_function("mixed_partials_3_2_4_3", |b| {
        b.iter(|| {
            let vars = Series::variables(&[3, 2, 4, 3], &[11.0_f64, 12.0, 13.0, 14.0]);
            black_box(kinematics(&vars[0], &vars[1], &vars[2], &vars[3]))
        })
    });

    for order in [2, 4, 8] {
        group.bench_with_input(
            BenchmarkId::new("two_var_product", order),
            &order,
            |b, &order| {
                b.iter(|| {
                    let vars = Series::variables(&[order, order], &[1.1_f64, 0.9]);
                    black_box((&vars[0] * &vars[1]).exp())
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_univariate, bench_multivariate);
criterion_main!(benches);
