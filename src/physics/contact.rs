//! Per-pair collision state handed from the tests to a resolution stage.

use super::shape::{PhysicsObject, ShapeKind};

/// One operand of a pair test: the object and its position in the input slice.
#[derive(Clone, Copy)]
pub struct ContactSlot<'a> {
    pub object: &'a dyn PhysicsObject,
    pub index: usize,
}

impl<'a> ContactSlot<'a> {
    pub fn new(object: &'a dyn PhysicsObject, index: usize) -> Self {
        Self { object, index }
    }

    #[inline]
    pub fn kind(&self) -> ShapeKind {
        self.object.shape_kind()
    }
}

impl std::fmt::Debug for ContactSlot<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContactSlot")
            .field("index", &self.index)
            .field("shape", self.object.shape())
            .field("is_static", &self.object.is_static())
            .finish()
    }
}

/// Mutable record for the pair currently under test.
///
/// Symmetric tests call [`swap`](Self::swap) and hand the context to the
/// canonical ordering, so after a test `first` may be the object that was
/// passed in as `second`. The slot indices always identify the original
/// objects.
#[derive(Debug, Clone, Copy)]
pub struct CollisionContext<'a> {
    pub first: ContactSlot<'a>,
    pub second: ContactSlot<'a>,
    /// Set by the test that ran last.
    pub collided: bool,
}

impl<'a> CollisionContext<'a> {
    pub fn new(first: ContactSlot<'a>, second: ContactSlot<'a>) -> Self {
        Self {
            first,
            second,
            collided: false,
        }
    }

    /// Exchange the two operands.
    #[inline]
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.first, &mut self.second);
    }

    /// Load a new pair and clear the result.
    #[inline]
    pub fn reset(&mut self, first: ContactSlot<'a>, second: ContactSlot<'a>) {
        self.first = first;
        self.second = second;
        self.collided = false;
    }

    /// The pair in input order, independent of any swap.
    pub fn pair(&self) -> CollisionPair {
        CollisionPair::new(
            (self.first.index, self.first.kind()),
            (self.second.index, self.second.kind()),
        )
    }
}

/// A tested pair, identified by input indices with `index_a < index_b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CollisionPair {
    pub index_a: usize,
    pub index_b: usize,
    pub kind_a: ShapeKind,
    pub kind_b: ShapeKind,
}

impl CollisionPair {
    /// Build a pair from two `(index, kind)` operands in either order.
    pub fn new(a: (usize, ShapeKind), b: (usize, ShapeKind)) -> Self {
        let (a, b) = if a.0 <= b.0 { (a, b) } else { (b, a) };
        Self {
            index_a: a.0,
            index_b: b.0,
            kind_a: a.1,
            kind_b: b.1,
        }
    }
}
