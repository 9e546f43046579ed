//! Geometric helpers shared by the narrowphase tests.

use glam::Vec2;

use super::error::ShapeError;
use super::shape::{BoxShape, Plane, Shape, Sphere};

/// Axis-aligned bounding rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb2 {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb2 {
    /// Test whether two rectangles overlap. Touching edges count.
    #[inline]
    pub fn overlaps(&self, other: &Aabb2) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }
}

impl Plane {
    /// Signed distance of `point` from the line. Positive on the side the
    /// normal points to.
    #[inline]
    pub fn signed_distance(&self, point: Vec2) -> f32 {
        point.dot(self.normal) - self.distance_to_origin
    }
}

impl BoxShape {
    /// The four corners.
    ///
    /// ```text
    /// b1 ________ a1
    ///   |        |
    ///   |   *    |
    ///   |________|
    /// b2          a2
    /// ```
    #[inline]
    pub fn corners(&self) -> [Vec2; 4] {
        let c = self.position;
        let h = self.half_extents;
        [
            Vec2::new(c.x + h.x, c.y + h.y),
            Vec2::new(c.x + h.x, c.y - h.y),
            Vec2::new(c.x - h.x, c.y + h.y),
            Vec2::new(c.x - h.x, c.y - h.y),
        ]
    }

    /// Point of the box (boundary or interior) closest to `point`.
    #[inline]
    pub fn closest_point(&self, point: Vec2) -> Vec2 {
        point.clamp(self.position - self.half_extents, self.position + self.half_extents)
    }

    #[inline]
    pub fn aabb(&self) -> Aabb2 {
        Aabb2 {
            min: self.position - self.half_extents,
            max: self.position + self.half_extents,
        }
    }
}

impl Sphere {
    #[inline]
    pub fn aabb(&self) -> Aabb2 {
        Aabb2 {
            min: self.position - Vec2::splat(self.radius),
            max: self.position + Vec2::splat(self.radius),
        }
    }
}

impl Shape {
    /// Check the parameters the tests rely on: unit plane normals (within
    /// `normal_tolerance`), positive radii and half extents, finite values.
    pub fn validate(&self, normal_tolerance: f32) -> Result<(), ShapeError> {
        match self {
            Shape::Plane(plane) => {
                if !plane.normal.is_finite() || !plane.distance_to_origin.is_finite() {
                    return Err(ShapeError::NonFinite);
                }
                let length = plane.normal.length();
                if (length - 1.0).abs() > normal_tolerance {
                    return Err(ShapeError::NonUnitNormal { length });
                }
            }
            Shape::Sphere(sphere) => {
                if !sphere.position.is_finite() || !sphere.radius.is_finite() {
                    return Err(ShapeError::NonFinite);
                }
                if sphere.radius <= 0.0 {
                    return Err(ShapeError::NonPositiveRadius {
                        radius: sphere.radius,
                    });
                }
            }
            Shape::Box(b) => {
                if !b.position.is_finite() || !b.half_extents.is_finite() {
                    return Err(ShapeError::NonFinite);
                }
                if b.half_extents.min_element() <= 0.0 {
                    return Err(ShapeError::NonPositiveHalfExtent {
                        half_extents: b.half_extents,
                    });
                }
            }
        }
        Ok(())
    }
}
