use secrand::{permutation, random_token, shuffle, uniform_int};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_uniform_int(c: &mut Criterion) {
    c.bench_function("uniform_int 10", |b| b.iter(|| uniform_int(black_box(10u32))));

    c.bench_function("uniform_int 2^63 + 1", |b| {
        b.iter(|| uniform_int(black_box((1u64 << 63) + 1)))
    });
}

pub fn bench_shuffle(c: &mut Criterion) {
    let mut deck: Vec<u16> = (0..52).collect();

    c.bench_function("shuffle 52", |b| b.iter(|| shuffle(black_box(&mut deck))));
    c.bench_function("permutation 1000", |b| b.iter(|| permutation(black_box(1000))));
}

pub fn bench_token(c: &mut Criterion) {
    c.bench_function("random_token 32", |b| b.iter(|| random_token(black_box(32))));
}

criterion_group!(benches, bench_uniform_int, bench_shuffle, bench_token);
criterion_main!(benches);
