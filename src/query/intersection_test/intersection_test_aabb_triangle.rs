use crate::bounding_volume::AxisAlignedBounds;
use crate::query::sat;
use crate::shape::Triangle;

/// Tests if a triangle intersects an AABB.
///
/// This is the separating-axis test of
/// [`aabb_triangle_find_separating_axis`](crate::query::sat::aabb_triangle_find_separating_axis):
/// the shapes intersect iff none of the 13 candidate axes separates them.
/// A triangle exactly touching the box is intersecting.
#[inline]
pub fn intersection_test_aabb_triangle<B: ?Sized + AxisAlignedBounds>(
    aabb1: &B,
    triangle2: &Triangle,
) -> bool {
    sat::aabb_triangle_find_separating_axis(aabb1, triangle2).is_none()
}

/// Tests if an AABB intersects a triangle.
#[inline]
pub fn intersection_test_triangle_aabb<B: ?Sized + AxisAlignedBounds>(
    triangle1: &Triangle,
    aabb2: &B,
) -> bool {
    intersection_test_aabb_triangle(aabb2, triangle1)
}
