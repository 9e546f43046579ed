//! Collision detection over a hecs world.

use tracing::debug;

use crate::ecs::components::physics::{Collider2d, RigidBody2d};
use crate::physics::contact::CollisionPair;
use crate::physics::error::CollisionError;
use crate::physics::shape::{Body, RigidBodyType};
use crate::physics::CollisionManager;

/// A colliding pair of entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityCollision {
    pub entity_a: hecs::Entity,
    pub entity_b: hecs::Entity,
    pub pair: CollisionPair,
}

/// Run one collision pass over every entity with a [`Collider2d`].
///
/// Entities are visited in query order, which stays fixed as long as the
/// world is not modified. `entity_a` is the entity visited first.
pub fn collision_system(
    world: &hecs::World,
    manager: &CollisionManager,
) -> Result<Vec<EntityCollision>, CollisionError> {
    let mut entities = Vec::new();
    let mut bodies = Vec::new();

    for (entity, (collider, rb)) in world
        .query::<(&Collider2d, Option<&RigidBody2d>)>()
        .iter()
    {
        let body_type = rb.map_or(RigidBodyType::Dynamic, |rb| rb.body_type);
        entities.push(entity);
        bodies.push(Body {
            shape: collider.shape,
            body_type,
        });
    }

    let report = manager.detect(&bodies)?;
    debug!(
        entities = entities.len(),
        collisions = report.collisions.len(),
        "ecs collision pass"
    );

    Ok(report
        .collisions
        .into_iter()
        .map(|pair| EntityCollision {
            entity_a: entities[pair.index_a],
            entity_b: entities[pair.index_b],
            pair,
        })
        .collect())
}

impl CollisionManager {
    /// Entity pairs that collide in `world`, in the order of [`collision_system`].
    pub fn detect_world(
        &self,
        world: &hecs::World,
    ) -> Result<Vec<(hecs::Entity, hecs::Entity)>, CollisionError> {
        Ok(collision_system(world, self)?
            .into_iter()
            .map(|hit| (hit.entity_a, hit.entity_b))
            .collect())
    }
}
