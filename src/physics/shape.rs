//! Shape variants and the object capability set the collision pass reads.

use glam::Vec2;

/// Number of shape kinds. Row and column count of the dispatch table.
pub const SHAPE_COUNT: usize = 3;

/// Closed set of shape kinds.
///
/// The discriminants are the row/column indices of
/// [`DispatchTable`](super::dispatch::DispatchTable). Adding a kind means
/// appending it here, bumping [`SHAPE_COUNT`], and adding a row and a column
/// to the table in the same order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum ShapeKind {
    Plane = 0,
    Sphere = 1,
    Box = 2,
}

impl ShapeKind {
    /// Every kind, in ordinal order.
    pub const ALL: [ShapeKind; SHAPE_COUNT] = [ShapeKind::Plane, ShapeKind::Sphere, ShapeKind::Box];

    /// Table index of this kind.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            ShapeKind::Plane => "plane",
            ShapeKind::Sphere => "sphere",
            ShapeKind::Box => "box",
        }
    }
}

/// Infinite line splitting the world into two half-spaces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Unit normal.
    pub normal: Vec2,
    /// Offset of the line from the origin along `normal`.
    pub distance_to_origin: f32,
}

impl Plane {
    pub fn new(normal: Vec2, distance_to_origin: f32) -> Self {
        Self {
            normal,
            distance_to_origin,
        }
    }
}

/// Circle in 2D; kept under the name the rest of the engine uses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub position: Vec2,
    pub radius: f32,
}

impl Sphere {
    pub fn new(position: Vec2, radius: f32) -> Self {
        Self { position, radius }
    }
}

/// Axis-aligned box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxShape {
    /// Center.
    pub position: Vec2,
    /// Half size along each axis.
    pub half_extents: Vec2,
}

impl BoxShape {
    pub fn new(position: Vec2, half_extents: Vec2) -> Self {
        Self {
            position,
            half_extents,
        }
    }
}

/// Tagged shape payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Plane(Plane),
    Sphere(Sphere),
    Box(BoxShape),
}

impl Shape {
    #[inline]
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Plane(_) => ShapeKind::Plane,
            Shape::Sphere(_) => ShapeKind::Sphere,
            Shape::Box(_) => ShapeKind::Box,
        }
    }

    /// Reference point of the shape. Planes report the point of the line
    /// closest to the origin.
    #[inline]
    pub fn position(&self) -> Vec2 {
        match self {
            Shape::Plane(plane) => plane.normal * plane.distance_to_origin,
            Shape::Sphere(sphere) => sphere.position,
            Shape::Box(b) => b.position,
        }
    }
}

impl From<Plane> for Shape {
    fn from(plane: Plane) -> Self {
        Shape::Plane(plane)
    }
}

impl From<Sphere> for Shape {
    fn from(sphere: Sphere) -> Self {
        Shape::Sphere(sphere)
    }
}

impl From<BoxShape> for Shape {
    fn from(b: BoxShape) -> Self {
        Shape::Box(b)
    }
}

/// Rigid body type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RigidBodyType {
    /// Affected by forces and collisions.
    #[default]
    Dynamic,
    /// Immovable.
    Static,
    /// Position controlled by user, but affects dynamic bodies.
    Kinematic,
}

/// Read accessors the collision pass needs from a scene object.
///
/// The pass only ever borrows objects; it never moves or mutates them.
pub trait PhysicsObject {
    fn shape(&self) -> &Shape;

    fn is_static(&self) -> bool;

    #[inline]
    fn shape_kind(&self) -> ShapeKind {
        self.shape().kind()
    }

    #[inline]
    fn position(&self) -> Vec2 {
        self.shape().position()
    }
}

impl<T: PhysicsObject + ?Sized> PhysicsObject for &T {
    fn shape(&self) -> &Shape {
        (**self).shape()
    }

    fn is_static(&self) -> bool {
        (**self).is_static()
    }
}

impl<T: PhysicsObject + ?Sized> PhysicsObject for Box<T> {
    fn shape(&self) -> &Shape {
        (**self).shape()
    }

    fn is_static(&self) -> bool {
        (**self).is_static()
    }
}

/// Owned shape plus body type. The simplest [`PhysicsObject`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub shape: Shape,
    pub body_type: RigidBodyType,
}

impl Body {
    /// Create a dynamic body.
    pub fn new_dynamic(shape: impl Into<Shape>) -> Self {
        Self {
            shape: shape.into(),
            body_type: RigidBodyType::Dynamic,
        }
    }

    /// Create a static body.
    pub fn new_static(shape: impl Into<Shape>) -> Self {
        Self {
            shape: shape.into(),
            body_type: RigidBodyType::Static,
        }
    }

    /// Create a kinematic body.
    pub fn new_kinematic(shape: impl Into<Shape>) -> Self {
        Self {
            shape: shape.into(),
            body_type: RigidBodyType::Kinematic,
        }
    }
}

impl PhysicsObject for Body {
    fn shape(&self) -> &Shape {
        &self.shape
    }

    fn is_static(&self) -> bool {
        self.body_type == RigidBodyType::Static
    }
}
