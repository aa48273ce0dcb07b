use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use qbases::{
    embed, ptrace, tensor, tensor_all, tensor_pow, Basis, BasisOperator, GenericBasis, Spin,
    SpinBasis,
};

fn generic(d: usize) -> Basis {
    GenericBasis::new(d).unwrap().into()
}

fn bench_tensor_pow(c: &mut Criterion) {
    let mut group = c.benchmark_group("tensor_pow");
    let b = generic(2);
    let spin: Basis = SpinBasis::new(Spin::half()).into();

    for &n in &[4usize, 8, 16, 32] {
        group.bench_with_input(BenchmarkId::new("squaring", n), &n, |bench, &n| {
            bench.iter(|| tensor_pow(black_box(&b), n).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("linear_fold", n), &n, |bench, &n| {
            bench.iter(|| tensor_all(std::iter::repeat(black_box(&b)).take(n)).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("merged_spins", n), &n, |bench, &n| {
            bench.iter(|| tensor_pow(black_box(&spin), n).unwrap());
        });
    }

    group.finish();
}

fn bench_ptrace(c: &mut Criterion) {
    let mut group = c.benchmark_group("ptrace");

    for &n in &[8usize, 16, 24] {
        let full = tensor_pow(&tensor(&generic(2), &generic(3)).unwrap(), n / 2).unwrap();
        let traced: Vec<usize> = (1..=n).step_by(2).collect();
        group.bench_with_input(BenchmarkId::new("every_other", n), &n, |bench, _| {
            bench.iter(|| ptrace(black_box(&full), &traced).unwrap());
        });
    }

    group.finish();
}

fn bench_embed(c: &mut Criterion) {
    let mut group = c.benchmark_group("embed");
    let pair = BasisOperator::<f64>::square(tensor(&generic(2), &generic(2)).unwrap());

    for &n in &[4usize, 16, 32] {
        let full = tensor_pow(&generic(2), n).unwrap();
        let contiguous = vec![(vec![1, 2], pair.clone())];
        let scattered = vec![(vec![n, 1], pair.clone())];

        group.bench_with_input(BenchmarkId::new("contiguous", n), &n, |bench, _| {
            bench.iter(|| embed(black_box(&full), &full, &contiguous).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("scattered", n), &n, |bench, _| {
            bench.iter(|| embed(black_box(&full), &full, &scattered).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_tensor_pow, bench_ptrace, bench_embed);
criterion_main!(benches);
