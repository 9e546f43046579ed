//! CPU narrowphase collision detection for 2D rigid bodies.
//!
//! # Architecture
//!
//! A collision pass runs in three steps per pair:
//!
//! 1. Enumerate every unordered pair `i < j` of the input objects
//! 2. Select the pair test for `(kind(i), kind(j))` from the [`DispatchTable`]
//! 3. Run the test on a [`CollisionContext`] and hand the result to the caller
//!
//! Objects are only read. Resolution (impulses, penetration correction) is
//! left to whatever consumes the reported pairs.

pub mod collider;
pub mod contact;
pub mod dispatch;
pub mod error;
pub mod narrowphase;
pub mod shape;

use tracing::{debug, trace};

use self::contact::{CollisionContext, CollisionPair, ContactSlot};
use self::dispatch::DispatchTable;
use self::error::CollisionError;
use self::narrowphase::pair_test_name;
use self::shape::PhysicsObject;

/// Configuration for the collision pass.
#[derive(Debug, Clone)]
pub struct CollisionConfig {
    /// Check every shape before the pass and fail on the first invalid one.
    /// Default: true.
    pub validate_shapes: bool,
    /// Keep tested pairs that did not collide in [`CollisionReport::misses`].
    /// Default: false.
    pub record_misses: bool,
    /// Allowed deviation of a plane normal's length from 1. Default: 1e-3.
    pub normal_tolerance: f32,
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self {
            validate_shapes: true,
            record_misses: false,
            normal_tolerance: 1e-3,
        }
    }
}

/// Outcome of one collision pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollisionReport {
    /// Pairs whose test ran.
    pub pairs_tested: usize,
    /// Pairs whose dispatch cell was empty.
    pub pairs_skipped: usize,
    /// Colliding pairs, ordered by `(index_a, index_b)`.
    pub collisions: Vec<CollisionPair>,
    /// Non-colliding tested pairs, only filled with `record_misses`.
    pub misses: Vec<CollisionPair>,
}

impl CollisionReport {
    pub fn has_collisions(&self) -> bool {
        !self.collisions.is_empty()
    }

    pub fn contains(&self, index_a: usize, index_b: usize) -> bool {
        let (lo, hi) = if index_a <= index_b {
            (index_a, index_b)
        } else {
            (index_b, index_a)
        };
        self.collisions
            .iter()
            .any(|p| p.index_a == lo && p.index_b == hi)
    }
}

/// Number of unordered pairs among `n` objects.
#[inline]
pub const fn pair_count(n: usize) -> usize {
    if n < 2 {
        0
    } else {
        n * (n - 1) / 2
    }
}

/// Runs the pairwise narrowphase over a slice of objects.
#[derive(Debug, Clone, Default)]
pub struct CollisionManager {
    config: CollisionConfig,
    table: DispatchTable,
}

impl CollisionManager {
    /// Create a manager with the given configuration and the full table.
    pub fn new(config: CollisionConfig) -> Self {
        Self::with_table(config, DispatchTable::new())
    }

    pub fn with_table(config: CollisionConfig, table: DispatchTable) -> Self {
        Self { config, table }
    }

    pub fn config(&self) -> &CollisionConfig {
        &self.config
    }

    pub fn table(&self) -> &DispatchTable {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut DispatchTable {
        &mut self.table
    }

    /// Validate every shape if the configuration asks for it.
    pub fn validate<O: PhysicsObject>(&self, objects: &[O]) -> Result<(), CollisionError> {
        if !self.config.validate_shapes {
            return Ok(());
        }
        for (index, object) in objects.iter().enumerate() {
            object
                .shape()
                .validate(self.config.normal_tolerance)
                .map_err(|source| CollisionError::InvalidShape { index, source })?;
        }
        Ok(())
    }

    /// Test every pair `i < j` and call `on_pair` with the context after each
    /// test. Pairs with an empty dispatch cell are skipped without a call.
    ///
    /// Shapes are not validated here. Returns the number of pairs tested.
    pub fn for_each_pair<O, F>(&self, objects: &[O], mut on_pair: F) -> usize
    where
        O: PhysicsObject,
        F: FnMut(&CollisionContext<'_>),
    {
        let n = objects.len();
        let mut tested = 0;
        // One context for the whole pass, reloaded per pair.
        let mut scratch: Option<CollisionContext<'_>> = None;

        for i in 0..n {
            for j in (i + 1)..n {
                let first = ContactSlot::new(&objects[i], i);
                let second = ContactSlot::new(&objects[j], j);
                let (kind_a, kind_b) = (first.kind(), second.kind());

                let Some(test) = self.table.lookup(kind_a, kind_b) else {
                    trace!(i, j, first = kind_a.name(), second = kind_b.name(), "no pair test, skipped");
                    continue;
                };

                let ctx = scratch.get_or_insert_with(|| CollisionContext::new(first, second));
                ctx.reset(first, second);
                let collided = test(ctx);
                tested += 1;

                trace!(i, j, test = pair_test_name(kind_a, kind_b), collided, "pair tested");
                on_pair(ctx);
            }
        }

        tested
    }

    /// Run a full pass and collect the results.
    pub fn detect<O: PhysicsObject>(&self, objects: &[O]) -> Result<CollisionReport, CollisionError> {
        self.validate(objects)?;

        let mut report = CollisionReport::default();
        let record_misses = self.config.record_misses;
        report.pairs_tested = self.for_each_pair(objects, |ctx| {
            if ctx.collided {
                report.collisions.push(ctx.pair());
            } else if record_misses {
                report.misses.push(ctx.pair());
            }
        });
        report.pairs_skipped = pair_count(objects.len()) - report.pairs_tested;

        debug!(
            objects = objects.len(),
            tested = report.pairs_tested,
            skipped = report.pairs_skipped,
            collisions = report.collisions.len(),
            "collision pass finished"
        );

        Ok(report)
    }
}
