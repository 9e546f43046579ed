//! Shared setup helpers for collide2d benchmarks.
//!
//! ## Running
//!
//!   cargo bench --manifest-path benchmarks/Cargo.toml --bench physics
//!
//! Filter by group:
//!   cargo bench --manifest-path benchmarks/Cargo.toml --bench physics -- narrowphase

use collide2d::ecs::components::physics::{Collider2d, RigidBody2d};
use collide2d::{Body, BoxShape, Plane, Sphere};
use glam::Vec2;

/// `n` dynamic spheres in a grid layout so neighbours overlap.
pub fn setup_spheres(n: usize) -> Vec<Body> {
    let cols = (n as f32).sqrt().ceil() as usize;
    (0..n)
        .map(|i| {
            let x = (i % cols) as f32 * 1.5;
            let y = (i / cols) as f32 * 1.5;
            Body::new_dynamic(Sphere::new(Vec2::new(x, y), 1.0))
        })
        .collect()
}

/// Ground and wall planes followed by alternating spheres and static boxes.
pub fn setup_mixed(n: usize) -> Vec<Body> {
    let cols = (n as f32).sqrt().ceil() as usize;
    let mut bodies = vec![
        Body::new_static(Plane::new(Vec2::Y, 0.0)),
        Body::new_static(Plane::new(Vec2::X, -1.0)),
    ];

    for i in 0..n.saturating_sub(2) {
        let pos = Vec2::new((i % cols) as f32 * 1.5, (i / cols) as f32 * 1.5);
        if i % 2 == 0 {
            bodies.push(Body::new_dynamic(Sphere::new(pos, 1.0)));
        } else {
            bodies.push(Body::new_static(BoxShape::new(pos, Vec2::splat(0.5))));
        }
    }
    bodies
}

/// Same layout as [`setup_mixed`], spawned into a hecs world.
pub fn setup_mixed_world(n: usize) -> hecs::World {
    let mut world = hecs::World::new();
    for body in setup_mixed(n) {
        world.spawn((
            Collider2d::new(body.shape),
            RigidBody2d {
                body_type: body.body_type,
            },
        ));
    }
    world
}
