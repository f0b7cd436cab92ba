//! Benchmarks for triangulation and full proofs.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use wuprover::prelude::*;
use wuprover::solve::conditions::{equal_distance, midpoint, perpendicular};

fn x(i: u32) -> XPolynomial {
    XPolynomial::dependent(i)
}

fn u(i: u32) -> XPolynomial {
    XPolynomial::parameter(i)
}

/// Parallelogram ABCD with diagonals meeting in O.
fn parallelogram() -> Theorem {
    let hypotheses = PolynomialSystem::from_polys(vec![
        &(&u(1) * &x(2)) - &(&u(1) * &u(3)),
        &(&(&u(2) * &x(2)) - &(&u(3) * &x(1))) + &(&u(1) * &u(3)),
        &(&x(3) * &x(2)) - &(&x(4) * &x(1)),
        &(&(&u(3) * &x(3)) - &(&(&u(2) - &u(1)) * &x(4))) - &(&u(1) * &u(3)),
    ]);
    let two = XPolynomial::constant(Fraction::constant(Q::from_integer(2)));
    let statement = &(&(&(&two * &(&x(1) * &x(3))) + &(&two * &(&x(2) * &x(4))))
        - &(&x(1) * &x(1)))
        - &(&x(2) * &x(2));
    Theorem::new(hypotheses, statement)
}

/// The circumcenter O of ABC lies on the perpendicular bisector of AC.
fn circumcenter() -> Theorem {
    let points = PointBindings::new()
        .with("A", Variable::parameter(0), Variable::parameter(0))
        .with("B", Variable::parameter(1), Variable::parameter(0))
        .with("C", Variable::parameter(2), Variable::parameter(3))
        .with("O", Variable::dependent(1), Variable::dependent(2))
        .with("M", Variable::dependent(3), Variable::dependent(4));

    let mut hypotheses = PolynomialSystem::new();
    for p in [equal_distance("O", "A", "O", "B"), equal_distance("O", "A", "O", "C")] {
        hypotheses.push(points.instantiate(&p).unwrap());
    }
    for p in midpoint("M", "A", "C") {
        hypotheses.push(points.instantiate(&p).unwrap());
    }
    let statement = points
        .instantiate(&perpendicular("O", "M", "A", "C"))
        .unwrap();
    Theorem::new(hypotheses, statement)
}

fn bench_triangulation(c: &mut Criterion) {
    let mut group = c.benchmark_group("triangulate");

    let theorem = parallelogram();
    group.bench_function("parallelogram", |b| {
        b.iter(|| {
            let mut system = theorem.hypotheses().clone();
            let mut ctx = ProverContext::default();
            black_box(system.triangulate(&mut ctx))
        });
    });

    let theorem = circumcenter();
    group.bench_function("circumcenter", |b| {
        b.iter(|| {
            let mut system = theorem.hypotheses().clone();
            let mut ctx = ProverContext::default();
            black_box(system.triangulate(&mut ctx))
        });
    });

    group.finish();
}

fn bench_prove(c: &mut Criterion) {
    let mut group = c.benchmark_group("prove");
    group.sample_size(50);

    let prover = WuProver::new();
    group.bench_function("parallelogram", |b| {
        b.iter(|| {
            let mut theorem = parallelogram();
            let mut ctx = ProverContext::default();
            black_box(prover.prove(&mut theorem, &mut ctx))
        });
    });

    group.finish();
}

criterion_group!(benches, bench_triangulation, bench_prove);

criterion_main!(benches);
