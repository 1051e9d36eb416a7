use crate::math::{Point, Real, Vector};

/// Trait implemented by anything shaped like an axis-aligned box.
///
/// Only the two corners are required. An octree node, a cell of a grid or a
/// plain [`Aabb`](crate::bounding_volume::Aabb) can all implement it and be
/// handed to the box queries without first being copied into an `Aabb`.
///
/// Implementors must uphold `mins()[i] <= maxs()[i]` on every axis.
pub trait AxisAlignedBounds {
    /// The corner with the smallest coordinates.
    fn mins(&self) -> Point<Real>;

    /// The corner with the largest coordinates.
    fn maxs(&self) -> Point<Real>;

    /// The center of the box.
    #[inline]
    fn center(&self) -> Point<Real> {
        na::center(&self.mins(), &self.maxs())
    }

    /// Half the size of the box along each axis.
    #[inline]
    fn half_extents(&self) -> Vector<Real> {
        (self.maxs() - self.mins()) * 0.5
    }
}

impl<T: ?Sized + AxisAlignedBounds> AxisAlignedBounds for &T {
    #[inline]
    fn mins(&self) -> Point<Real> {
        (**self).mins()
    }

    #[inline]
    fn maxs(&self) -> Point<Real> {
        (**self).maxs()
    }

    #[inline]
    fn center(&self) -> Point<Real> {
        (**self).center()
    }

    #[inline]
    fn half_extents(&self) -> Vector<Real> {
        (**self).half_extents()
    }
}
