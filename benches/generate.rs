use criterion::{criterion_group, criterion_main, Criterion, black_box};

use glam::UVec2;

use tidemesh::generation::{GenerationConfig, GenerationPipeline};
use tidemesh::terrain::height_field::HeightFieldGenerator;

fn bench_height_field_64(c: &mut Criterion) {
    let generator = HeightFieldGenerator::new(12345.0, 0.1);

    c.bench_function("height_field_64", |b| {
        b.iter(|| generator.generate(black_box(UVec2::new(64, 64))).unwrap());
    });
}

fn bench_height_field_256(c: &mut Criterion) {
    let generator = HeightFieldGenerator::new(12345.0, 0.1);

    c.bench_function("height_field_256", |b| {
        b.iter(|| generator.generate(black_box(UVec2::new(256, 256))).unwrap());
    });
}

fn bench_generate_64(c: &mut Criterion) {
    let pipeline = GenerationPipeline::new(GenerationConfig {
        size: UVec2::new(64, 64),
        ..Default::default()
    })
    .unwrap();

    c.bench_function("generate_64", |b| {
        b.iter(|| black_box(&pipeline).generate().unwrap());
    });
}

fn bench_generate_256(c: &mut Criterion) {
    let pipeline = GenerationPipeline::new(GenerationConfig {
        size: UVec2::new(256, 256),
        ..Default::default()
    })
    .unwrap();

    c.bench_function("generate_256", |b| {
        b.iter(|| black_box(&pipeline).generate().unwrap());
    });
}

criterion_group!(
    benches,
    bench_height_field_64,
    bench_height_field_256,
    bench_generate_64,
    bench_generate_256
);
criterion_main!(benches);
