//! collide2d
//!
//! Narrow-phase collision detection for 2D rigid bodies.
//!
//! # Architecture
//!
//! 1. **physics::shape** - Plane, Sphere and Box shapes, the `PhysicsObject` trait
//! 2. **physics::narrowphase** - One test per ordered pair of shape kinds
//! 3. **physics::dispatch** - Kind-indexed table selecting the test for a pair
//! 4. **physics** - `CollisionManager` running every unordered pair once
//! 5. **ecs** - hecs integration (feature = "ecs")
//!
//! ```
//! use collide2d::glam::Vec2;
//! use collide2d::{Body, CollisionManager, Plane, Sphere};
//!
//! let objects = [
//!     Body::new_static(Plane::new(Vec2::Y, 0.0)),
//!     Body::new_dynamic(Sphere::new(Vec2::new(0.0, 0.5), 1.0)),
//! ];
//! let report = CollisionManager::default().detect(&objects)?;
//! assert!(report.contains(0, 1));
//! # Ok::<(), collide2d::CollisionError>(())
//! ```

pub mod physics;

#[cfg(feature = "ecs")]
pub mod ecs;

// Re-export commonly used types
pub use physics::contact::{CollisionContext, CollisionPair, ContactSlot};
pub use physics::dispatch::DispatchTable;
pub use physics::error::{CollisionError, ShapeError};
pub use physics::narrowphase::PairTest;
pub use physics::shape::{
    Body, BoxShape, PhysicsObject, Plane, RigidBodyType, Shape, ShapeKind, Sphere, SHAPE_COUNT,
};
pub use physics::{pair_count, CollisionConfig, CollisionManager, CollisionReport};

#[cfg(feature = "ecs")]
pub use ecs::prelude::*;

// Re-export glam for convenience
pub use glam;
