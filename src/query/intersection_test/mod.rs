//! Implementation details of the boolean intersection tests.

pub use self::intersection_test_aabb_plane::{
    intersection_test_aabb_plane, intersection_test_plane_aabb,
};
pub use self::intersection_test_aabb_triangle::{
    intersection_test_aabb_triangle, intersection_test_triangle_aabb,
};
pub use self::intersection_test_sphere_aabb::{
    intersection_test_aabb_sphere, intersection_test_sphere_aabb,
};
pub use self::intersection_test_sphere_sphere::intersection_test_sphere_sphere;

mod intersection_test_aabb_plane;
mod intersection_test_aabb_triangle;
mod intersection_test_sphere_aabb;
mod intersection_test_sphere_sphere;
