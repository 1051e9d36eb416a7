use crate::bounding_volume::AxisAlignedBounds;
use crate::shape::Plane;

#[cfg(not(feature = "std"))]
use na::ComplexField; // for .abs()

/// Tests if an AABB touches or crosses a plane.
///
/// The half-extents of the box are projected on the plane normal to get the
/// radius `r` of the box along that normal. The box intersects the plane iff
/// the distance from its center to the plane is at most `r`.
#[inline]
pub fn intersection_test_aabb_plane<B: ?Sized + AxisAlignedBounds>(
    aabb1: &B,
    plane2: &Plane,
) -> bool {
    let center = aabb1.center();
    let extents = aabb1.half_extents();

    let r = extents.dot(&plane2.normal.abs());
    let s = plane2.signed_distance_to_point(&center);

    s.abs() <= r
}

/// Tests if a plane touches or crosses an AABB.
#[inline]
pub fn intersection_test_plane_aabb<B: ?Sized + AxisAlignedBounds>(
    plane1: &Plane,
    aabb2: &B,
) -> bool {
    intersection_test_aabb_plane(aabb2, plane1)
}
