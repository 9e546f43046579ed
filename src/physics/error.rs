//! Error types for the collision pass.

use glam::Vec2;
use thiserror::Error;

/// A shape whose parameters the geometric tests cannot work with.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ShapeError {
    #[error("plane normal must be unit length, got length {length}")]
    NonUnitNormal { length: f32 },
    #[error("sphere radius must be positive, got {radius}")]
    NonPositiveRadius { radius: f32 },
    #[error("box half extents must be positive on both axes, got {half_extents}")]
    NonPositiveHalfExtent { half_extents: Vec2 },
    #[error("shape contains a NaN or infinite component")]
    NonFinite,
}

/// Failure of a whole collision pass.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CollisionError {
    #[error("object {index} has an invalid shape")]
    InvalidShape {
        index: usize,
        #[source]
        source: ShapeError,
    },
}
