//! Narrowphase collision detection: one test per ordered pair of shape kinds.
//!
//! Every pair test has the [`PairTest`] signature. It reads the two operands
//! from the [`CollisionContext`], writes `collided`, and returns the same
//! value. Reversed orderings swap the context and delegate to the canonical
//! test. The geometry itself lives in the `*_overlap` kernels, which are pure
//! and usable without a context.

use tracing::warn;

use super::contact::CollisionContext;
use super::dispatch::DispatchTable;
use super::shape::{BoxShape, PhysicsObject, Plane, Shape, ShapeKind, Sphere};

/// Entry type of the dispatch table.
pub type PairTest = for<'a, 'b> fn(&'a mut CollisionContext<'b>) -> bool;

/// Record a result on the context and pass it through.
#[inline]
fn finish(ctx: &mut CollisionContext<'_>, collided: bool) -> bool {
    ctx.collided = collided;
    collided
}

/// Operands are not the kinds this test handles. Only reachable through a
/// hand-edited dispatch table or a direct call.
#[cold]
fn reject(ctx: &mut CollisionContext<'_>, test: &'static str) -> bool {
    warn!(
        test,
        first = ctx.first.kind().name(),
        second = ctx.second.kind().name(),
        "pair test called with mismatched shapes, reporting no collision"
    );
    finish(ctx, false)
}

// ---------------------------------------------------------------------------
// Geometry kernels
// ---------------------------------------------------------------------------

/// Sphere against a plane, either side.
///
/// The center distance is folded onto the sphere's side of the plane, so a
/// sphere fully behind the plane is treated like one in front of it.
#[inline]
pub fn sphere_plane_overlap(sphere: &Sphere, plane: &Plane) -> bool {
    let distance = plane.signed_distance(sphere.position).abs();
    sphere.radius - distance > 0.0
}

/// Box against a plane: true when any corner lies on or behind the plane.
#[inline]
pub fn plane_box_overlap(plane: &Plane, b: &BoxShape) -> bool {
    let smallest = b
        .corners()
        .iter()
        .map(|corner| plane.signed_distance(*corner))
        .fold(f32::INFINITY, f32::min);
    smallest <= 0.0
}

/// Strict: spheres that exactly touch do not collide.
#[inline]
pub fn sphere_sphere_overlap(a: &Sphere, b: &Sphere) -> bool {
    a.position.distance(b.position) < a.radius + b.radius
}

/// Sphere against an axis-aligned box via the closest point on the box.
#[inline]
pub fn sphere_box_overlap(sphere: &Sphere, b: &BoxShape) -> bool {
    if !sphere.aabb().overlaps(&b.aabb()) {
        return false;
    }
    let closest = b.closest_point(sphere.position);
    sphere.position.distance(closest) < sphere.radius
}

/// Interval overlap on both axes. Touching boxes collide.
#[inline]
pub fn box_box_overlap(a: &BoxShape, b: &BoxShape) -> bool {
    a.aabb().overlaps(&b.aabb())
}

// ---------------------------------------------------------------------------
// Pair tests
// ---------------------------------------------------------------------------

/// Planes never overlap-test. A pair of static planes reports `true` as a
/// settled pair; anything else reports `false`.
pub fn plane_plane(ctx: &mut CollisionContext<'_>) -> bool {
    match (ctx.first.object.shape(), ctx.second.object.shape()) {
        (Shape::Plane(_), Shape::Plane(_)) => {
            let both_static = ctx.first.object.is_static() && ctx.second.object.is_static();
            finish(ctx, both_static)
        }
        _ => reject(ctx, "plane_plane"),
    }
}

pub fn plane_sphere(ctx: &mut CollisionContext<'_>) -> bool {
    ctx.swap();
    sphere_plane(ctx)
}

pub fn plane_box(ctx: &mut CollisionContext<'_>) -> bool {
    match (ctx.first.object.shape(), ctx.second.object.shape()) {
        (Shape::Plane(plane), Shape::Box(b)) => {
            let hit = plane_box_overlap(plane, b);
            finish(ctx, hit)
        }
        _ => reject(ctx, "plane_box"),
    }
}

pub fn sphere_plane(ctx: &mut CollisionContext<'_>) -> bool {
    match (ctx.first.object.shape(), ctx.second.object.shape()) {
        (Shape::Sphere(sphere), Shape::Plane(plane)) => {
            let hit = sphere_plane_overlap(sphere, plane);
            finish(ctx, hit)
        }
        _ => reject(ctx, "sphere_plane"),
    }
}

pub fn sphere_sphere(ctx: &mut CollisionContext<'_>) -> bool {
    match (ctx.first.object.shape(), ctx.second.object.shape()) {
        (Shape::Sphere(a), Shape::Sphere(b)) => {
            let hit = sphere_sphere_overlap(a, b);
            finish(ctx, hit)
        }
        _ => reject(ctx, "sphere_sphere"),
    }
}

pub fn sphere_box(ctx: &mut CollisionContext<'_>) -> bool {
    match (ctx.first.object.shape(), ctx.second.object.shape()) {
        (Shape::Sphere(sphere), Shape::Box(b)) => {
            let hit = sphere_box_overlap(sphere, b);
            finish(ctx, hit)
        }
        _ => reject(ctx, "sphere_box"),
    }
}

pub fn box_plane(ctx: &mut CollisionContext<'_>) -> bool {
    ctx.swap();
    plane_box(ctx)
}

pub fn box_sphere(ctx: &mut CollisionContext<'_>) -> bool {
    ctx.swap();
    sphere_box(ctx)
}

pub fn box_box(ctx: &mut CollisionContext<'_>) -> bool {
    match (ctx.first.object.shape(), ctx.second.object.shape()) {
        (Shape::Box(a), Shape::Box(b)) => {
            let hit = box_box_overlap(a, b);
            finish(ctx, hit)
        }
        _ => reject(ctx, "box_box"),
    }
}

/// Whether `a` and `b` collide, using the default dispatch table.
///
/// Shapes are not validated. Use [`DispatchTable::test_pair`] to go through a
/// customized table.
pub fn test_pair(a: &dyn PhysicsObject, b: &dyn PhysicsObject) -> bool {
    DispatchTable::new().test_pair(a, b)
}

/// Canonical test name for an ordered kind pair, for logs.
pub fn pair_test_name(first: ShapeKind, second: ShapeKind) -> &'static str {
    match (first, second) {
        (ShapeKind::Plane, ShapeKind::Plane) => "plane_plane",
        (ShapeKind::Plane, ShapeKind::Sphere) => "plane_sphere",
        (ShapeKind::Plane, ShapeKind::Box) => "plane_box",
        (ShapeKind::Sphere, ShapeKind::Plane) => "sphere_plane",
        (ShapeKind::Sphere, ShapeKind::Sphere) => "sphere_sphere",
        (ShapeKind::Sphere, ShapeKind::Box) => "sphere_box",
        (ShapeKind::Box, ShapeKind::Plane) => "box_plane",
        (ShapeKind::Box, ShapeKind::Sphere) => "box_sphere",
        (ShapeKind::Box, ShapeKind::Box) => "box_box",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::contact::ContactSlot;
    use crate::physics::shape::{Body, PhysicsObject};
    use glam::Vec2;

    fn run(test: PairTest, a: &dyn PhysicsObject, b: &dyn PhysicsObject) -> (bool, bool) {
        let mut ctx = CollisionContext::new(ContactSlot::new(a, 0), ContactSlot::new(b, 1));
        let result = test(&mut ctx);
        (result, ctx.collided)
    }

    fn ground() -> Body {
        Body::new_static(Plane::new(Vec2::Y, 0.0))
    }

    #[test]
    fn test_plane_plane_static_policy() {
        let a = Body::new_static(Plane::new(Vec2::Y, 0.0));
        let b = Body::new_static(Plane::new(Vec2::X, 4.0));
        let moving = Body::new_dynamic(Plane::new(Vec2::X, 4.0));

        assert_eq!(run(plane_plane, &a, &b), (true, true));
        assert_eq!(run(plane_plane, &a, &moving), (false, false));
        assert_eq!(run(plane_plane, &moving, &a), (false, false));
    }

    #[test]
    fn test_sphere_plane_intersecting() {
        let sphere = Body::new_dynamic(Sphere::new(Vec2::new(0.0, 0.5), 1.0));
        assert_eq!(run(sphere_plane, &sphere, &ground()), (true, true));
    }

    #[test]
    fn test_sphere_plane_separated() {
        let sphere = Body::new_dynamic(Sphere::new(Vec2::new(0.0, 5.0), 1.0));
        assert_eq!(run(sphere_plane, &sphere, &ground()), (false, false));
    }

    #[test]
    fn test_sphere_plane_behind() {
        let plane = Plane::new(Vec2::Y, 0.0);
        assert!(sphere_plane_overlap(&Sphere::new(Vec2::new(0.0, -0.5), 1.0), &plane));
        assert!(!sphere_plane_overlap(&Sphere::new(Vec2::new(0.0, -5.0), 1.0), &plane));
    }

    #[test]
    fn test_sphere_plane_uses_offset() {
        // Line y = 3
        let plane = Plane::new(Vec2::Y, 3.0);
        assert!(sphere_plane_overlap(&Sphere::new(Vec2::new(0.0, 3.5), 1.0), &plane));
        assert!(!sphere_plane_overlap(&Sphere::new(Vec2::new(0.0, 0.5), 1.0), &plane));
    }

    #[test]
    fn test_sphere_plane_tangent_is_not_collision() {
        let plane = Plane::new(Vec2::Y, 0.0);
        assert!(!sphere_plane_overlap(&Sphere::new(Vec2::new(0.0, 1.0), 1.0), &plane));
    }

    #[test]
    fn test_plane_sphere_delegates_with_swap() {
        let sphere = Body::new_dynamic(Sphere::new(Vec2::new(0.0, 0.5), 1.0));
        let plane = ground();
        let mut ctx = CollisionContext::new(ContactSlot::new(&plane, 0), ContactSlot::new(&sphere, 1));
        assert!(plane_sphere(&mut ctx));
        assert!(ctx.collided);
        assert_eq!(ctx.first.kind(), ShapeKind::Sphere);
        assert_eq!(ctx.first.index, 1);
        assert_eq!(ctx.second.index, 0);
    }

    #[test]
    fn test_plane_box() {
        let above = Body::new_dynamic(BoxShape::new(Vec2::new(0.0, 2.0), Vec2::ONE));
        let through = Body::new_dynamic(BoxShape::new(Vec2::new(0.0, 0.5), Vec2::ONE));
        assert_eq!(run(plane_box, &ground(), &above), (false, false));
        assert_eq!(run(plane_box, &ground(), &through), (true, true));
    }

    #[test]
    fn test_plane_box_resting_corner_counts() {
        let resting = BoxShape::new(Vec2::new(0.0, 1.0), Vec2::ONE);
        assert!(plane_box_overlap(&Plane::new(Vec2::Y, 0.0), &resting));
    }

    #[test]
    fn test_plane_box_tilted_plane() {
        let n = Vec2::new(1.0, 1.0).normalize();
        let plane = Plane::new(n, 0.0);
        // Lower-left corner (1.1, 1.1) - (1, 1) = (0.1, 0.1) is in front
        assert!(!plane_box_overlap(&plane, &BoxShape::new(Vec2::splat(1.1), Vec2::ONE)));
        // Lower-left corner (-0.5, -0.5) is behind
        assert!(plane_box_overlap(&plane, &BoxShape::new(Vec2::splat(0.5), Vec2::ONE)));
    }

    #[test]
    fn test_plane_box_uses_offset() {
        // Line y = 3
        let plane = Body::new_static(Plane::new(Vec2::Y, 3.0));
        let above = Body::new_dynamic(BoxShape::new(Vec2::new(0.0, 5.0), Vec2::ONE));
        let through = Body::new_dynamic(BoxShape::new(Vec2::new(0.0, 2.5), Vec2::ONE));
        assert_eq!(run(plane_box, &plane, &above), (false, false));
        assert_eq!(run(plane_box, &plane, &through), (true, true));
        assert_eq!(run(box_plane, &above, &plane), (false, false));
        assert_eq!(run(box_plane, &through, &plane), (true, true));
    }

    #[test]
    fn test_box_plane_matches_plane_box() {
        let through = Body::new_dynamic(BoxShape::new(Vec2::new(0.0, 0.5), Vec2::ONE));
        let above = Body::new_dynamic(BoxShape::new(Vec2::new(0.0, 2.0), Vec2::ONE));
        assert_eq!(run(box_plane, &through, &ground()), run(plane_box, &ground(), &through));
        assert_eq!(run(box_plane, &above, &ground()), run(plane_box, &ground(), &above));
    }

    #[test]
    fn test_sphere_sphere_boundary() {
        let a = Body::new_dynamic(Sphere::new(Vec2::ZERO, 1.0));
        let touching = Body::new_dynamic(Sphere::new(Vec2::new(2.0, 0.0), 1.0));
        let close = Body::new_dynamic(Sphere::new(Vec2::new(1.9, 0.0), 1.0));
        assert_eq!(run(sphere_sphere, &a, &touching), (false, false));
        assert_eq!(run(sphere_sphere, &a, &close), (true, true));
    }

    #[test]
    fn test_negative_radius_never_collides() {
        let a = Sphere::new(Vec2::ZERO, -1.0);
        let b = Sphere::new(Vec2::new(1.0, 0.0), -1.0);
        assert!(!sphere_sphere_overlap(&a, &b));
        assert!(!sphere_sphere_overlap(&a, &a));
        assert!(!sphere_box_overlap(&a, &BoxShape::new(Vec2::ZERO, Vec2::ONE)));
    }

    #[test]
    fn test_sphere_box() {
        let b = Body::new_static(BoxShape::new(Vec2::ZERO, Vec2::ONE));
        let near_face = Body::new_dynamic(Sphere::new(Vec2::new(1.5, 0.0), 1.0));
        let near_corner = Body::new_dynamic(Sphere::new(Vec2::new(1.8, 1.8), 1.0));
        let inside = Body::new_dynamic(Sphere::new(Vec2::new(0.2, 0.1), 0.1));
        let far = Body::new_dynamic(Sphere::new(Vec2::new(5.0, 0.0), 1.0));

        assert!(run(sphere_box, &near_face, &b).0);
        // Corner distance is 0.8 * sqrt(2) > 1
        assert!(!run(sphere_box, &near_corner, &b).0);
        assert!(run(sphere_box, &inside, &b).0);
        assert!(!run(sphere_box, &far, &b).0);
    }

    #[test]
    fn test_sphere_box_separated_on_one_axis() {
        let b = BoxShape::new(Vec2::ZERO, Vec2::ONE);
        // Within the box's x range, clear of it on y
        assert!(!sphere_box_overlap(&Sphere::new(Vec2::new(0.5, 2.5), 1.0), &b));
        assert!(sphere_box_overlap(&Sphere::new(Vec2::new(0.5, 1.5), 1.0), &b));
    }

    #[test]
    fn test_free_test_pair_is_order_independent() {
        let sphere = Body::new_dynamic(Sphere::new(Vec2::new(0.0, 0.5), 1.0));
        let lifted = Body::new_dynamic(Sphere::new(Vec2::new(0.0, 5.0), 1.0));
        let plane = ground();
        assert!(test_pair(&plane, &sphere));
        assert!(test_pair(&sphere, &plane));
        assert!(!test_pair(&plane, &lifted));
        assert!(!test_pair(&lifted, &plane));
    }

    #[test]
    fn test_box_sphere_matches_sphere_box() {
        let b = Body::new_static(BoxShape::new(Vec2::ZERO, Vec2::ONE));
        for x in [0.5, 1.5, 1.99, 2.0, 3.0] {
            let s = Body::new_dynamic(Sphere::new(Vec2::new(x, 0.3), 1.0));
            assert_eq!(run(box_sphere, &b, &s), run(sphere_box, &s, &b), "x = {x}");
        }
    }

    #[test]
    fn test_box_box() {
        let a = Body::new_dynamic(BoxShape::new(Vec2::ZERO, Vec2::ONE));
        let overlapping = Body::new_dynamic(BoxShape::new(Vec2::new(1.5, 1.5), Vec2::ONE));
        let x_only = Body::new_dynamic(BoxShape::new(Vec2::new(1.5, 5.0), Vec2::ONE));
        assert_eq!(run(box_box, &a, &overlapping), (true, true));
        assert_eq!(run(box_box, &a, &x_only), (false, false));
    }

    #[test]
    fn test_mismatched_operands_report_no_collision() {
        let sphere = Body::new_dynamic(Sphere::new(Vec2::ZERO, 10.0));
        let b = Body::new_dynamic(BoxShape::new(Vec2::ZERO, Vec2::ONE));
        let plane = ground();

        assert_eq!(run(sphere_sphere, &sphere, &b), (false, false));
        assert_eq!(run(plane_plane, &sphere, &plane), (false, false));
        assert_eq!(run(box_box, &sphere, &b), (false, false));
        assert_eq!(run(sphere_plane, &plane, &sphere), (false, false));
        // Delegating tests reject after the swap as well
        assert_eq!(run(plane_sphere, &b, &sphere), (false, false));
    }

    #[test]
    fn test_mismatch_overwrites_previous_result() {
        let sphere = Body::new_dynamic(Sphere::new(Vec2::ZERO, 1.0));
        let b = Body::new_dynamic(BoxShape::new(Vec2::ZERO, Vec2::ONE));
        let mut ctx = CollisionContext::new(ContactSlot::new(&sphere, 0), ContactSlot::new(&b, 1));
        ctx.collided = true;
        assert!(!box_box(&mut ctx));
        assert!(!ctx.collided);
    }

    #[test]
    fn test_pair_test_names() {
        assert_eq!(pair_test_name(ShapeKind::Plane, ShapeKind::Box), "plane_box");
        assert_eq!(pair_test_name(ShapeKind::Box, ShapeKind::Sphere), "box_sphere");
    }
}
