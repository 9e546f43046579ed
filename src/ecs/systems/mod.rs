//! ECS systems.

pub mod collision;

pub use collision::{collision_system, EntityCollision};
