use criterion::{black_box, criterion_group, criterion_main, Criterion};

use ledwall_curvature::{compute, Section};

fn bench_compute(c: &mut Criterion) {
    let default_layout = vec![Section::default()];
    let long_wall: Vec<Section> = (0..40)
        .map(|i| Section::new(10, if i % 2 == 0 { 2.5 } else { -5.0 }))
        .collect();

    c.bench_function("compute_default_layout", |b| {
        b.iter(|| compute(black_box(&default_layout)))
    });
    c.bench_function("compute_400_modules", |b| {
        b.iter(|| compute(black_box(&long_wall)))
    });
}

criterion_group!(benches, bench_compute);
criterion_main!(benches);
