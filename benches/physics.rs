//! Benchmarks for the blob simulation.

use criterion::{criterion_group, criterion_main, Criterion};
use squishy::*;

fn bench_build_sphere(c: &mut Criterion) {
    c.bench_function("build_sphere_30x30", |b| {
        b.iter(|| UvSphere::new(30, 30, 1.0f32).build(5.0, 1.0))
    });
}

fn bench_blob_steps(c: &mut Criterion) {
    c.bench_function("blob_30x30_60_steps", |b| {
        b.iter(|| {
            let mut sim = Simulation::<f32>::sphere(30, 30, 1.0, SimulationConfig::new())
                .expect("valid sphere");
            sim.start();
            for step in 0..60 {
                if step < 10 {
                    sim.push(480).expect("node in range");
                }
                sim.step(0.016, &mut NoOpStepObserver);
            }
            sim.positions().len()
        });
    });
}

fn bench_normals(c: &mut Criterion) {
    let mesh = UvSphere::new(30, 30, 1.0f32).build(5.0, 1.0).expect("valid sphere");
    let mut field = NormalField::new(mesh.node_count());
    c.bench_function("normals_30x30", |b| {
        b.iter(|| {
            field.recompute(mesh.nodes(), mesh.triangles());
            field.as_slice().len()
        })
    });
}

criterion_group!(benches, bench_build_sphere, bench_blob_steps, bench_normals);
criterion_main!(benches);
