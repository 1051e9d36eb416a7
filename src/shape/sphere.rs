//! Definition of the sphere shape.

use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use crate::shape::ShapeError;

/// A sphere, given by its center and radius.
///
/// A sphere with a zero radius behaves like a point in every query.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
#[repr(C)]
pub struct Sphere {
    /// The sphere center.
    pub center: Point<Real>,
    /// The radius of the sphere.
    pub radius: Real,
}

impl Sphere {
    /// Creates a new sphere from its center and radius.
    #[inline]
    pub fn new(center: Point<Real>, radius: Real) -> Sphere {
        Sphere { center, radius }
    }

    /// Creates a new sphere, checking that its radius is a non-negative finite number.
    pub fn try_new(center: Point<Real>, radius: Real) -> Result<Sphere, ShapeError> {
        if center.iter().any(|e| !e.is_finite()) {
            return Err(ShapeError::NonFinite);
        }

        if !radius.is_finite() || radius < 0.0 {
            log::debug!("Rejected sphere with radius {}.", radius);
            return Err(ShapeError::InvalidRadius(radius));
        }

        Ok(Sphere::new(center, radius))
    }

    /// The smallest AABB containing this sphere.
    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::from_half_extents(self.center, Vector::repeat(self.radius))
    }

    /// Tests if `point` is inside of this sphere, or on its boundary.
    #[inline]
    pub fn contains_point(&self, point: &Point<Real>) -> bool {
        na::distance_squared(&self.center, point) <= self.radius * self.radius
    }

    /// This sphere moved by `translation`.
    #[inline]
    pub fn translated(mut self, translation: &Vector<Real>) -> Sphere {
        self.center += translation;
        self
    }
}
