use anyhow::Context;
use collide2d::ecs::components::physics::{Collider2d, RigidBody2d};
use collide2d::{
    collision_system, BoxShape, CollisionConfig, CollisionManager, Plane, Shape, Sphere,
};
use glam::Vec2;
use log::info;

/// Small scene: a floor, a wall, two touching balls, a crate half sunk into
/// the floor and one ball in the air.
fn spawn_scene(world: &mut hecs::World) {
    // Floor and wall
    world.spawn((
        Collider2d::new(Plane::new(Vec2::Y, 0.0)),
        RigidBody2d::new_static(),
    ));
    world.spawn((
        Collider2d::new(Plane::new(Vec2::X, -4.0)),
        RigidBody2d::new_static(),
    ));

    // Balls
    world.spawn((
        Collider2d::new(Sphere::new(Vec2::new(0.0, 0.9), 1.0)),
        RigidBody2d::new_dynamic(),
    ));
    world.spawn((
        Collider2d::new(Sphere::new(Vec2::new(1.8, 1.2), 1.0)),
        RigidBody2d::new_dynamic(),
    ));
    world.spawn((
        Collider2d::new(Sphere::new(Vec2::new(-1.0, 8.0), 0.5)),
        RigidBody2d::new_dynamic(),
    ));

    // Crate
    world.spawn((
        Collider2d::new(BoxShape::new(Vec2::new(3.5, 0.4), Vec2::new(0.75, 0.5))),
        RigidBody2d::new_kinematic(),
    ));
}

fn describe(shape: &Shape) -> String {
    match shape {
        Shape::Plane(p) => format!("plane n={} d={}", p.normal, p.distance_to_origin),
        Shape::Sphere(s) => format!("sphere at {} r={}", s.position, s.radius),
        Shape::Box(b) => format!("box at {} half={}", b.position, b.half_extents),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut world = hecs::World::new();
    spawn_scene(&mut world);

    let manager = CollisionManager::new(CollisionConfig::default());
    let hits = collision_system(&world, &manager).context("collision pass failed")?;

    info!("{} colliding pairs", hits.len());
    for hit in &hits {
        let a = world.get::<&Collider2d>(hit.entity_a)?;
        let b = world.get::<&Collider2d>(hit.entity_b)?;
        info!(
            "{:?} [{}] <-> {:?} [{}]",
            hit.entity_a,
            describe(&a.shape),
            hit.entity_b,
            describe(&b.shape),
        );
    }

    Ok(())
}
