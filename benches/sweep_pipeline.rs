use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use collatz_explorer::{
    Complex, CollatzRule, MandelbrotOracle, SweepPlan, measure_collatz_behavior, run_sweep,
    run_sweep_rayon,
};

fn bench_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweep");
    group.sample_size(20);

    for sample_size in [250u32, 1000] {
        let plan = SweepPlan {
            sample_size,
            ..SweepPlan::default()
        };

        group.bench_with_input(BenchmarkId::new("sequential", sample_size), &plan, |b, plan| {
            b.iter(|| black_box(run_sweep(black_box(plan))))
        });
        group.bench_with_input(BenchmarkId::new("rayon", sample_size), &plan, |b, plan| {
            b.iter(|| black_box(run_sweep_rayon(black_box(plan))))
        });
    }

    group.finish();
}

fn bench_oracle(c: &mut Criterion) {
    let oracle = MandelbrotOracle::default();
    let points: Vec<Complex> = (0..1000)
        .map(|i| Complex::new(-2.0 + f64::from(i) * 0.0025, 0.3))
        .collect();

    c.bench_function("mandelbrot_escape_time_row", |b| {
        b.iter(|| {
            points
                .iter()
                .map(|&point| oracle.escape_time(black_box(point)))
                .sum::<u32>()
        })
    });
}

fn bench_integer_metrics(c: &mut Criterion) {
    c.bench_function("collatz_metrics_standard_1_to_1000", |b| {
        b.iter(|| measure_collatz_behavior(CollatzRule::STANDARD, black_box(1..1000), 10_000))
    });
}

criterion_group!(benches, bench_sweep, bench_oracle, bench_integer_metrics);
criterion_main!(benches);
