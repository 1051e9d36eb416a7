//! Definition of the plane shape.

use crate::math::{Point, Real, UnitVector, Vector};
use crate::shape::ShapeError;
use na::Unit;

/// An infinite plane.
///
/// The plane is the set of points `x` such that `normal.dot(x) == constant`.
/// With a unit normal, `constant` is the signed distance from the origin to
/// the plane, measured along the normal.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Clone, Copy)]
#[repr(C)]
pub struct Plane {
    /// The plane unit normal.
    pub normal: UnitVector<Real>,
    /// The signed distance from the origin to the plane, along `normal`.
    pub constant: Real,
}

impl Plane {
    /// Builds a plane from its unit normal and its constant.
    #[inline]
    pub fn new(normal: UnitVector<Real>, constant: Real) -> Plane {
        Plane { normal, constant }
    }

    /// Builds a plane from a non-normalized normal, failing if it has a zero length.
    pub fn try_new(normal: Vector<Real>, constant: Real) -> Result<Plane, ShapeError> {
        if !constant.is_finite() || normal.iter().any(|e| !e.is_finite()) {
            return Err(ShapeError::NonFinite);
        }

        match Unit::try_new(normal, crate::math::DEFAULT_EPSILON) {
            Some(normal) => Ok(Plane::new(normal, constant)),
            None => {
                log::debug!("Rejected plane with a degenerate normal {:?}.", normal);
                Err(ShapeError::DegenerateNormal)
            }
        }
    }

    /// Builds the plane with the given normal passing through `point`.
    #[inline]
    pub fn from_point_and_normal(point: &Point<Real>, normal: UnitVector<Real>) -> Plane {
        Plane::new(normal, normal.dot(&point.coords))
    }

    /// The signed distance between `point` and this plane.
    ///
    /// The distance is positive if the point is on the side the normal points to.
    #[inline]
    pub fn signed_distance_to_point(&self, point: &Point<Real>) -> Real {
        self.normal.dot(&point.coords) - self.constant
    }

    /// The orthogonal projection of `point` on this plane.
    #[inline]
    pub fn project_point(&self, point: &Point<Real>) -> Point<Real> {
        *point - *self.normal * self.signed_distance_to_point(point)
    }

    /// The same plane with its normal pointing the other way.
    #[inline]
    pub fn flipped(&self) -> Plane {
        Plane::new(Unit::new_unchecked(-*self.normal), -self.constant)
    }
}
