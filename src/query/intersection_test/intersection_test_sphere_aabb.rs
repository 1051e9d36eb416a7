use crate::bounding_volume::AxisAlignedBounds;
use crate::math::{Real, DIM};
use crate::shape::Sphere;

/// Intersection test between a sphere and an AABB.
///
/// Accumulates, axis by axis, the squared distance between the sphere center
/// and the box, and compares it to the squared radius.
#[inline]
pub fn intersection_test_sphere_aabb<B: ?Sized + AxisAlignedBounds>(
    sphere1: &Sphere,
    aabb2: &B,
) -> bool {
    let mins = aabb2.mins();
    let maxs = aabb2.maxs();
    let center = &sphere1.center;
    let mut sq_dist: Real = 0.0;

    for i in 0..DIM {
        if center[i] < mins[i] {
            sq_dist += (mins[i] - center[i]) * (mins[i] - center[i]);
        }

        if center[i] > maxs[i] {
            sq_dist += (center[i] - maxs[i]) * (center[i] - maxs[i]);
        }
    }

    sq_dist <= sphere1.radius * sphere1.radius
}

/// Intersection test between an AABB and a sphere.
#[inline]
pub fn intersection_test_aabb_sphere<B: ?Sized + AxisAlignedBounds>(
    aabb1: &B,
    sphere2: &Sphere,
) -> bool {
    intersection_test_sphere_aabb(sphere2, aabb1)
}
