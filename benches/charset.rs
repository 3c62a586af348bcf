use secrand::CharsetSampler;
use secrand::charset::{ALPHANUMERIC, HEX};
use secrand::random_string;

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_random_string(c: &mut Criterion) {
    c.bench_function("random_string 16 alphanumeric", |b| {
        b.iter(|| random_string(black_box(16), ALPHANUMERIC))
    });

    c.bench_function("random_string 64 hex", |b| {
        b.iter(|| random_string(black_box(64), HEX))
    });
}

pub fn bench_over_read(c: &mut Criterion) {
    let mut group = c.benchmark_group("over_read 256 alphanumeric");

    for factor in [1.0, 1.5, 2.0] {
        let sampler = CharsetSampler::new(ALPHANUMERIC)
            .map(|s| s.with_over_read(factor))
            .unwrap();

        group.bench_function(format!("{factor}x"), |b| {
            b.iter(|| sampler.sample(black_box(256)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_random_string, bench_over_read);
criterion_main!(benches);
