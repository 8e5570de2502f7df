use criterion::{black_box, criterion_group, criterion_main, Criterion};
use strata_utils::random::legacy_random::LegacyRandom;
use strata_utils::random::Random;

fn bench_next_i32(c: &mut Criterion) {
    let mut rng = LegacyRandom::from_seed(0xC0FFEE);
    c.bench_function("legacy next_i32", |b| {
        b.iter(|| black_box(rng.next_i32()));
    });
}

fn bench_consume_count(c: &mut Criterion) {
    let rng = LegacyRandom::from_seed(0xC0FFEE);
    c.bench_function("legacy consume_count(17292)", |b| {
        b.iter(|| {
            let mut r = rng;
            r.consume_count(17_292);
            black_box(r);
        });
    });
}

criterion_group!(benches, bench_next_i32, bench_consume_count);
criterion_main!(benches);
