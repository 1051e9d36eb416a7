//! Non-persistent geometric queries.
//!
//! Every function of this module is a pure computation over the shapes given
//! to it. None of them keeps state between calls.
//!
//! # Boolean tests
//!
//! * [`query::intersection_test_aabb_plane()`] tests if a box crosses a plane.
//! * [`query::intersection_test_aabb_triangle()`] tests if a triangle overlaps a box, using
//!   the separating-axis theorem. [`query::sat::aabb_triangle_find_separating_axis()`]
//!   also reports which axis separates them.
//! * [`query::intersection_test_sphere_sphere()`] tests if two spheres overlap.
//! * [`query::intersection_test_sphere_aabb()`] tests if a sphere overlaps a box.
//!
//! The box arguments are generic over [`AxisAlignedBounds`] so the nodes of a
//! spatial index can be tested directly.
//!
//! # Contacts
//!
//! * [`query::contact_sphere_triangle()`] computes a contact point and penetration distance
//!   between a sphere and a triangle.
//! * [`query::intersection_segment_triangle()`] computes the point where a segment crosses
//!   the front face of a triangle.
//!
//! The functions have the form `[operation]_[shape1]_[shape2]()`, and most of
//! them also exist with the shapes swapped.
//!
//! [`query::intersection_test_aabb_plane()`]: crate::query::intersection_test_aabb_plane
//! [`query::intersection_test_aabb_triangle()`]: crate::query::intersection_test_aabb_triangle
//! [`query::sat::aabb_triangle_find_separating_axis()`]: crate::query::sat::aabb_triangle_find_separating_axis
//! [`query::intersection_test_sphere_sphere()`]: crate::query::intersection_test_sphere_sphere
//! [`query::intersection_test_sphere_aabb()`]: crate::query::intersection_test_sphere_aabb
//! [`query::contact_sphere_triangle()`]: crate::query::contact_sphere_triangle
//! [`query::intersection_segment_triangle()`]: crate::query::intersection_segment_triangle
//! [`AxisAlignedBounds`]: crate::bounding_volume::AxisAlignedBounds

pub use self::contact::{
    contact_sphere_triangle, contact_sphere_triangle_with_computed_normal, SphereTriangleContact,
    SPHERE_TRIANGLE_DISTANCE_OFFSET,
};
pub use self::intersection_test::{
    intersection_test_aabb_plane, intersection_test_aabb_sphere, intersection_test_aabb_triangle,
    intersection_test_sphere_aabb, intersection_test_sphere_sphere,
};
pub use self::segment_intersection::{
    intersection_segment_triangle, intersection_segment_triangle_two_sided,
    SegmentTriangleIntersection,
};

mod contact;
mod intersection_test;
pub mod sat;
mod segment_intersection;

/// Queries dedicated to specific pairs of shapes.
pub mod details {
    pub use super::contact::*;
    pub use super::intersection_test::*;
    pub use super::segment_intersection::*;
}
