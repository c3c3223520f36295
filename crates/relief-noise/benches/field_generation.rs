use criterion::{Criterion, black_box, criterion_group, criterion_main};
use relief_noise::{KernelKind, LatticeNoise, NoiseParams, generate_height_field};

fn bench_perlin_field_128(c: &mut Criterion) {
    let params = NoiseParams {
        kernel: KernelKind::Perlin,
        ..NoiseParams::default()
    };
    c.bench_function("perlin_field_128", |b| {
        b.iter(|| generate_height_field(black_box(128), black_box(128), &params))
    });
}

fn bench_lattice_field_128(c: &mut Criterion) {
    let params = NoiseParams {
        kernel: KernelKind::Lattice,
        ..NoiseParams::default()
    };
    c.bench_function("lattice_field_128", |b| {
        b.iter(|| generate_height_field(black_box(128), black_box(128), &params))
    });
}

fn bench_lattice_sample(c: &mut Criterion) {
    let lattice = LatticeNoise::new();
    c.bench_function("lattice_sample", |b| {
        b.iter(|| lattice.sample(black_box(12.34), black_box(56.78)))
    });
}

criterion_group!(
    benches,
    bench_perlin_field_128,
    bench_lattice_field_128,
    bench_lattice_sample
);
criterion_main!(benches);
