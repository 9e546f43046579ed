//! Dispatch table mapping an ordered pair of shape kinds to its pair test.

use super::contact::{CollisionContext, ContactSlot};
use super::narrowphase::{
    box_box, box_plane, box_sphere, plane_box, plane_plane, plane_sphere, sphere_box,
    sphere_plane, sphere_sphere, PairTest,
};
use super::shape::{PhysicsObject, ShapeKind, SHAPE_COUNT};

/// Number of cells in the table.
pub const TABLE_SIZE: usize = SHAPE_COUNT * SHAPE_COUNT;

/// Row-major: the cell for `(first, second)` sits at
/// `first.index() * SHAPE_COUNT + second.index()`.
#[rustfmt::skip]
const DEFAULT_TESTS: [Option<PairTest>; TABLE_SIZE] = [
    //              Plane               Sphere                Box
    /* Plane  */    Some(plane_plane),  Some(plane_sphere),   Some(plane_box),
    /* Sphere */    Some(sphere_plane), Some(sphere_sphere),  Some(sphere_box),
    /* Box    */    Some(box_plane),    Some(box_sphere),     Some(box_box),
];

/// Ordinals must be dense and in `ShapeKind::ALL` order for the rows above
/// to line up with the kinds they are labelled with.
const fn ordinals_are_dense() -> bool {
    let mut i = 0;
    while i < SHAPE_COUNT {
        if ShapeKind::ALL[i].index() != i {
            return false;
        }
        i += 1;
    }
    true
}

const _: () = assert!(ordinals_are_dense(), "ShapeKind ordinals out of table order");
const _: () = assert!(ShapeKind::Plane.index() == 0);
const _: () = assert!(ShapeKind::Sphere.index() == 1);
const _: () = assert!(ShapeKind::Box.index() == 2);

/// Square table of pair tests.
///
/// An empty cell means "no test": the pair is skipped and counts as not
/// colliding. The default table fills every cell.
#[derive(Clone, Copy)]
pub struct DispatchTable {
    tests: [Option<PairTest>; TABLE_SIZE],
}

impl Default for DispatchTable {
    fn default() -> Self {
        Self::new()
    }
}

impl DispatchTable {
    /// Table with every kind pair populated.
    pub const fn new() -> Self {
        Self {
            tests: DEFAULT_TESTS,
        }
    }

    /// Table with every cell empty.
    pub const fn empty() -> Self {
        Self {
            tests: [None; TABLE_SIZE],
        }
    }

    #[inline]
    pub const fn cell_index(first: ShapeKind, second: ShapeKind) -> usize {
        first.index() * SHAPE_COUNT + second.index()
    }

    #[inline]
    pub fn lookup(&self, first: ShapeKind, second: ShapeKind) -> Option<PairTest> {
        self.tests[Self::cell_index(first, second)]
    }

    /// Replace one cell. `None` installs the "no test" marker.
    pub fn set(&mut self, first: ShapeKind, second: ShapeKind, test: Option<PairTest>) {
        self.tests[Self::cell_index(first, second)] = test;
    }

    /// Builder form of [`set`](Self::set).
    pub fn with(mut self, first: ShapeKind, second: ShapeKind, test: Option<PairTest>) -> Self {
        self.set(first, second, test);
        self
    }

    /// Whether every cell holds a test.
    pub fn is_complete(&self) -> bool {
        self.tests.iter().all(Option::is_some)
    }

    /// Run the cell for `(a, b)` on a private context.
    ///
    /// Returns `None` when the cell is empty.
    pub fn run(&self, a: &dyn PhysicsObject, b: &dyn PhysicsObject) -> Option<bool> {
        let test = self.lookup(a.shape_kind(), b.shape_kind())?;
        let mut ctx = CollisionContext::new(ContactSlot::new(a, 0), ContactSlot::new(b, 1));
        Some(test(&mut ctx))
    }

    /// Whether `a` and `b` collide. Empty cells report `false`.
    pub fn test_pair(&self, a: &dyn PhysicsObject, b: &dyn PhysicsObject) -> bool {
        self.run(a, b).unwrap_or(false)
    }
}

impl std::fmt::Debug for DispatchTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let populated = self.tests.iter().filter(|t| t.is_some()).count();
        f.debug_struct("DispatchTable")
            .field("size", &TABLE_SIZE)
            .field("populated", &populated)
            .finish()
    }
}
