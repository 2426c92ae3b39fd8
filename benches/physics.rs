//! Benchmarks for sproing simulation.

use criterion::{criterion_group, criterion_main, Criterion};
use sproing::*;

fn bench_square_update(c: &mut Criterion) {
    c.bench_function("square_1000_ticks", |b| {
        b.iter(|| {
            let bounds = Bounds::from_size(640.0f32, 480.0);
            let mut model = Model::new(ModelConfig::new());
            scene::square(&mut model, bounds.center(), 100.0, 5.0);
            for _ in 0..1000 {
                model.update(&bounds, &mut NoOpStepObserver);
            }
            model.positions()
        });
    });
}

fn bench_lattice_update(c: &mut Criterion) {
    c.bench_function("lattice_30x30_60_ticks", |b| {
        b.iter(|| {
            let bounds = Bounds::from_size(1200.0f32, 1200.0);
            let mut model = Model::new(ModelConfig::new());
            scene::lattice(&mut model, Vec2::new(50.0, 50.0), 30, 30, 20.0, 3.0);
            for _ in 0..60 {
                model.update(&bounds, &mut NoOpStepObserver);
            }
            model.positions()
        });
    });
}

fn bench_lattice_draw(c: &mut Criterion) {
    let mut model: Model<f32> = Model::default();
    scene::lattice(&mut model, Vec2::new(50.0, 50.0), 30, 30, 20.0, 3.0);
    let mut frame = CommandBuffer::new();
    c.bench_function("lattice_30x30_draw", |b| {
        b.iter(|| {
            frame.reset();
            model.draw(&mut frame);
            frame.len()
        });
    });
}

criterion_group!(benches, bench_square_update, bench_lattice_update, bench_lattice_draw);
criterion_main!(benches);
