use criterion::{black_box, criterion_group, criterion_main, Criterion};
use strata_utils::random::xoroshiro::Xoroshiro;
use strata_utils::random::Random;

fn bench_next_i64(c: &mut Criterion) {
    let mut rng = Xoroshiro::from_seed(0xC0FFEE);
    c.bench_function("xoroshiro next_i64", |b| {
        b.iter(|| black_box(rng.next_i64()));
    });
}

fn bench_next_f64(c: &mut Criterion) {
    let mut rng = Xoroshiro::from_seed(0xC0FFEE);
    c.bench_function("xoroshiro next_f64", |b| {
        b.iter(|| black_box(rng.next_f64()));
    });
}

criterion_group!(benches, bench_next_i64, bench_next_f64);
criterion_main!(benches);
