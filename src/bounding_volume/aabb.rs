//! Axis Aligned Bounding Box.

use crate::bounding_volume::AxisAlignedBounds;
use crate::math::{Point, Real, Vector, DIM};
use crate::shape::ShapeError;

/// An Axis-Aligned Bounding Box (AABB).
///
/// An AABB is defined by its minimum and maximum corners. Its faces are
/// always perpendicular to the coordinate axes.
///
/// # Invariant
///
/// `mins.x ≤ maxs.x`, `mins.y ≤ maxs.y` and `mins.z ≤ maxs.z`. This is not
/// checked by [`Aabb::new`]; use [`Aabb::try_new`] for untrusted inputs.
///
/// # Example
///
/// ```rust
/// # #[cfg(all(feature = "dim3", feature = "f32"))] {
/// use overlap3d::bounding_volume::Aabb;
/// use overlap3d::math::Point;
///
/// let aabb = Aabb::new(Point::new(-0.5, -0.5, -0.5), Point::new(0.5, 0.5, 0.5));
///
/// assert!(aabb.contains_local_point(&Point::origin()));
/// assert_eq!(aabb.center(), Point::origin());
/// assert_eq!(aabb.extents().x, 1.0);
/// assert_eq!(aabb.half_extents().x, 0.5);
/// # }
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct Aabb {
    /// The point with minimum coordinates.
    pub mins: Point<Real>,
    /// The point with maximum coordinates.
    pub maxs: Point<Real>,
}

impl Aabb {
    /// Creates a new AABB from its two corners.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates a new AABB, checking that `mins` is smaller than `maxs` on every axis.
    pub fn try_new(mins: Point<Real>, maxs: Point<Real>) -> Result<Aabb, ShapeError> {
        if mins.iter().chain(maxs.iter()).any(|e| !e.is_finite()) {
            return Err(ShapeError::NonFinite);
        }

        if let Some(axis) = (0..DIM).find(|&i| mins[i] > maxs[i]) {
            log::debug!("Rejected AABB with mins {:?} and maxs {:?}.", mins, maxs);
            return Err(ShapeError::InvalidAabb { axis });
        }

        Ok(Aabb::new(mins, maxs))
    }

    /// Creates a new AABB from its center and its half-extents.
    #[inline]
    pub fn from_half_extents(center: Point<Real>, half_extents: Vector<Real>) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    /// The smallest AABB containing all the given points.
    ///
    /// Returns `None` if the iterator is empty.
    pub fn from_points<I>(pts: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point<Real>>,
    {
        let mut it = pts.into_iter();
        let first = it.next()?;
        let mut result = Aabb::new(first, first);

        for pt in it {
            result.take_point(pt);
        }

        Some(result)
    }

    /// The center of this AABB.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        na::center(&self.mins, &self.maxs)
    }

    /// The half extents of this AABB.
    #[inline]
    pub fn half_extents(&self) -> Vector<Real> {
        let half: Real = na::convert::<f64, Real>(0.5);
        (self.maxs - self.mins) * half
    }

    /// The extents of this AABB.
    #[inline]
    pub fn extents(&self) -> Vector<Real> {
        self.maxs - self.mins
    }

    /// Enlarges this AABB so it also contains the point `pt`.
    pub fn take_point(&mut self, pt: Point<Real>) {
        self.mins = self.mins.coords.inf(&pt.coords).into();
        self.maxs = self.maxs.coords.sup(&pt.coords).into();
    }

    /// Translates this AABB by the given vector.
    #[inline]
    pub fn translated(mut self, translation: &Vector<Real>) -> Self {
        self.mins += translation;
        self.maxs += translation;
        self
    }

    /// Does this AABB contains a point expressed in the same coordinate frame as `self`?
    #[inline]
    pub fn contains_local_point(&self, point: &Point<Real>) -> bool {
        for i in 0..DIM {
            if point[i] < self.mins[i] || point[i] > self.maxs[i] {
                return false;
            }
        }

        true
    }
}

impl AxisAlignedBounds for Aabb {
    #[inline]
    fn mins(&self) -> Point<Real> {
        self.mins
    }

    #[inline]
    fn maxs(&self) -> Point<Real> {
        self.maxs
    }

    #[inline]
    fn center(&self) -> Point<Real> {
        Aabb::center(self)
    }

    #[inline]
    fn half_extents(&self) -> Vector<Real> {
        Aabb::half_extents(self)
    }
}
