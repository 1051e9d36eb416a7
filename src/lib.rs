/*!
overlap3d
========

**overlap3d** is a 3-dimensional library of intersection predicates between
the primitive shapes usually stored in a spatial index: axis-aligned boxes,
triangles, spheres, segments and planes.

Every query is a pure function of its arguments. Nothing is cached between
calls, so all queries are reentrant and can be called from any thread.

```
# #[cfg(all(feature = "dim3", feature = "f32"))] {
use overlap3d::bounding_volume::Aabb;
use overlap3d::math::Point;
use overlap3d::query;
use overlap3d::shape::{Sphere, Triangle};

let cell = Aabb::new(Point::new(-1.0, -1.0, -1.0), Point::new(1.0, 1.0, 1.0));
let triangle = Triangle::new(
    Point::new(0.5, 0.0, 0.0),
    Point::new(3.0, 0.0, 0.0),
    Point::new(0.5, 3.0, 0.0),
);
let probe = Sphere::new(Point::new(5.0, 0.0, 0.0), 0.5);

assert!(query::intersection_test_aabb_triangle(&cell, &triangle));
assert!(!query::intersection_test_sphere_aabb(&probe, &cell));
# }
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unused_qualifications)]

#[cfg(not(feature = "std"))]
extern crate core as std;

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod query;
pub mod shape;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
#[cfg(feature = "dim3")]
pub mod math {
    pub use super::real::*;
    pub use na::{Point3, UnitVector3, Vector3};

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The unit vector type.
    pub use UnitVector3 as UnitVector;
}
