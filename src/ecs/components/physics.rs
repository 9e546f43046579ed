//! Physics components for ECS entities.

use crate::physics::shape::{RigidBodyType, Shape};

/// Rigid body component. Entities without one are treated as dynamic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RigidBody2d {
    pub body_type: RigidBodyType,
}

impl RigidBody2d {
    pub fn new_dynamic() -> Self {
        Self {
            body_type: RigidBodyType::Dynamic,
        }
    }

    pub fn new_static() -> Self {
        Self {
            body_type: RigidBodyType::Static,
        }
    }

    pub fn new_kinematic() -> Self {
        Self {
            body_type: RigidBodyType::Kinematic,
        }
    }
}

/// Collision detection component. The shape carries its world position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collider2d {
    pub shape: Shape,
}

impl Collider2d {
    pub fn new(shape: impl Into<Shape>) -> Self {
        Self {
            shape: shape.into(),
        }
    }
}
