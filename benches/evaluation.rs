use criterion::{black_box, criterion_group, criterion_main, Criterion};
use evalexpr::{build_operator_tree, DefaultNumericTypes};
use std::collections::HashMap;
use varcalc::{Evaluator, SourceError};

fn literal_evaluator() -> Evaluator {
    Evaluator::new(|name: &str| -> Result<f64, SourceError> {
        Err(SourceError::Missing(name.to_string()))
    })
}

/// Benchmark simple arithmetic expressions
fn benchmark_simple_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("Simple arithmetic Expression Evaluation");

    let mut evaluator = literal_evaluator();

    let expr = "2 + 3 * 4";
    let precompiled_evalexpr = build_operator_tree::<DefaultNumericTypes>(expr).unwrap();

    group.bench_function("varcalc_arithmetic", |b| {
        b.iter(|| evaluator.evaluate(black_box(expr)).unwrap())
    });

    group.bench_function("native_rust_arithmetic", |b| {
        b.iter(|| black_box(2.0 + 3.0 * 4.0))
    });

    group.bench_function("meval_arithmetic", |b| {
        b.iter(|| meval::eval_str(black_box(expr)).unwrap())
    });

    group.bench_function("evalexpr_arithmetic", |b| {
        b.iter(|| evalexpr::eval(black_box(expr)).unwrap())
    });

    group.bench_function("precompiled_evalexpr_arithmetic", |b| {
        b.iter(|| precompiled_evalexpr.eval().unwrap())
    });
}

/// Benchmark complex arithmetic expressions
fn benchmark_complex_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("Complex arithmetic Expression Evaluation");

    let mut evaluator = literal_evaluator();

    let expr = "(10 + 20) * 3 / (4 - 1) + 5 * (8 - 6)";
    let precompiled_evalexpr = build_operator_tree::<DefaultNumericTypes>(expr).unwrap();

    group.bench_function("varcalc_complex_arithmetic", |b| {
        b.iter(|| evaluator.evaluate(black_box(expr)).unwrap())
    });

    group.bench_function("native_rust_complex_arithmetic", |b| {
        b.iter(|| black_box((10.0 + 20.0) * 3.0 / (4.0 - 1.0) + 5.0 * (8.0 - 6.0)))
    });

    group.bench_function("meval_complex_arithmetic", |b| {
        b.iter(|| meval::eval_str(black_box(expr)).unwrap())
    });

    group.bench_function("evalexpr_complex_arithmetic", |b| {
        b.iter(|| evalexpr::eval(black_box(expr)).unwrap())
    });

    group.bench_function("precompiled_evalexpr_complex_arithmetic", |b| {
        b.iter(|| precompiled_evalexpr.eval().unwrap())
    });
}

/// Benchmark expressions with variables that are already resolved
fn benchmark_variables(c: &mut Criterion) {
    let mut group = c.benchmark_group("Variable Expression Evaluation");

    let mut evaluator = literal_evaluator();
    evaluator.define("price", 120.0);
    evaluator.define("volume", 3000.0);

    let expr = "(price + 10) * (volume - 5) / price";
    let context = HashMap::from([("price".to_string(), 120.0), ("volume".to_string(), 3000.0)]);

    group.bench_function("varcalc_cached_variables", |b| {
        b.iter(|| evaluator.evaluate(black_box(expr)).unwrap())
    });

    group.bench_function("varcalc_one_shot_context", |b| {
        b.iter(|| varcalc::evaluate_expression(black_box(expr), black_box(&context)).unwrap())
    });

    group.bench_function("native_rust_variables", |b| {
        b.iter(|| {
            let (price, volume) = black_box((120.0, 3000.0));
            black_box((price + 10.0) * (volume - 5.0) / price)
        })
    });
}

/// Grouping benchmarks
criterion_group!(
    benches,
    benchmark_simple_arithmetic,
    benchmark_complex_arithmetic,
    benchmark_variables,
);
criterion_main!(benches);
