use criterion::{black_box, criterion_group, criterion_main, Criterion};
use strata_core::generator::{Generator, Range};
use strata_core::version::{Dimension, McVersion};

fn bench_overworld_scale4_single(c: &mut Criterion) {
    let gen = Generator::new(12345, McVersion::NEWEST, Dimension::Overworld).unwrap();
    c.bench_function("overworld get_biome_at scale=4", |b| {
        b.iter(|| black_box(gen.get_biome_at(4, 10, 16, -7).unwrap()));
    });
}

fn bench_overworld_scale1_single(c: &mut Criterion) {
    let gen = Generator::new(12345, McVersion::NEWEST, Dimension::Overworld).unwrap();
    c.bench_function("overworld get_biome_at scale=1", |b| {
        b.iter(|| black_box(gen.get_biome_at(1, 40, 64, -28).unwrap()));
    });
}

fn bench_overworld_tile(c: &mut Criterion) {
    let gen = Generator::new(999, McVersion::NEWEST, Dimension::Overworld).unwrap();
    let range = Range::new(4, -32, -32, 64, 64, 16, 1);
    c.bench_function("overworld gen_biomes 64x64 @ scale 4", |b| {
        b.iter(|| black_box(gen.gen_biomes(range).unwrap()));
    });
}

fn bench_nether_tile(c: &mut Criterion) {
    let gen = Generator::new(999, McVersion::NEWEST, Dimension::Nether).unwrap();
    let range = Range::new(4, -32, -32, 64, 64, 0, 1);
    c.bench_function("nether gen_biomes 64x64 @ scale 4", |b| {
        b.iter(|| black_box(gen.gen_biomes(range).unwrap()));
    });
}

criterion_group!(
    benches,
    bench_overworld_scale4_single,
    bench_overworld_scale1_single,
    bench_overworld_tile,
    bench_nether_tile
);
criterion_main!(benches);
