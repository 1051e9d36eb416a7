//! Application of the Separating-Axis-Theorem (SAT).

pub use self::sat_aabb_triangle::{aabb_triangle_find_separating_axis, AabbTriangleSeparatingAxis};

mod sat_aabb_triangle;
