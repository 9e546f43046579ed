//! Collision benchmarks (criterion - wall-clock time).
//!
//! Run all:    cargo bench --manifest-path benchmarks/Cargo.toml --bench physics
//! Filter:     cargo bench --manifest-path benchmarks/Cargo.toml --bench physics -- pass

use collide2d::physics::narrowphase::{
    box_box_overlap, plane_box_overlap, sphere_box_overlap, sphere_plane_overlap,
    sphere_sphere_overlap,
};
use collide2d::{
    collision_system, Body, BoxShape, CollisionManager, DispatchTable, Plane, ShapeKind, Sphere,
};
use collide2d_bench::*;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;

// ---------------------------------------------------------------------------
// Narrowphase kernels
// ---------------------------------------------------------------------------

fn bench_narrowphase(c: &mut Criterion) {
    let mut group = c.benchmark_group("narrowphase");
    let plane = Plane::new(Vec2::Y, 0.0);
    let sphere = Sphere::new(Vec2::new(0.0, 0.5), 1.0);
    let other = Sphere::new(Vec2::new(1.5, 0.5), 1.0);
    let bx = BoxShape::new(Vec2::new(1.0, 1.0), Vec2::ONE);
    let other_box = BoxShape::new(Vec2::new(2.5, 1.0), Vec2::ONE);

    group.bench_function("sphere_plane", |b| {
        b.iter(|| sphere_plane_overlap(&sphere, &plane));
    });
    group.bench_function("plane_box", |b| {
        b.iter(|| plane_box_overlap(&plane, &bx));
    });
    group.bench_function("sphere_sphere", |b| {
        b.iter(|| sphere_sphere_overlap(&sphere, &other));
    });
    group.bench_function("sphere_box", |b| {
        b.iter(|| sphere_box_overlap(&sphere, &bx));
    });
    group.bench_function("box_box", |b| {
        b.iter(|| box_box_overlap(&bx, &other_box));
    });
    group.finish();
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    let table = DispatchTable::new();

    group.bench_function("lookup_all_cells", |b| {
        b.iter(|| {
            for a in ShapeKind::ALL {
                for k in ShapeKind::ALL {
                    criterion::black_box(table.lookup(a, k));
                }
            }
        });
    });

    let sphere = Body::new_dynamic(Sphere::new(Vec2::ZERO, 1.0));
    let plane = Body::new_static(Plane::new(Vec2::Y, 0.0));
    group.bench_function("swapped_pair", |b| {
        b.iter(|| table.test_pair(&plane, &sphere));
    });
    group.finish();
}

// ---------------------------------------------------------------------------
// Full pass
// ---------------------------------------------------------------------------

fn bench_pass(c: &mut Criterion) {
    let manager = CollisionManager::default();

    {
        let mut group = c.benchmark_group("pass/spheres");
        for &n in &[10, 100, 500] {
            let bodies = setup_spheres(n);
            group.bench_with_input(BenchmarkId::from_parameter(n), &bodies, |b, bodies| {
                b.iter(|| manager.detect(bodies));
            });
        }
        group.finish();
    }

    {
        let mut group = c.benchmark_group("pass/mixed");
        for &n in &[10, 100, 500] {
            let bodies = setup_mixed(n);
            group.bench_with_input(BenchmarkId::from_parameter(n), &bodies, |b, bodies| {
                b.iter(|| manager.detect(bodies));
            });
        }
        group.finish();
    }

    {
        let mut group = c.benchmark_group("pass/ecs");
        for &n in &[100, 500] {
            let world = setup_mixed_world(n);
            group.bench_with_input(BenchmarkId::from_parameter(n), &world, |b, world| {
                b.iter(|| collision_system(world, &manager));
            });
        }
        group.finish();
    }
}

criterion_group!(benches, bench_narrowphase, bench_dispatch, bench_pass);
criterion_main!(benches);
