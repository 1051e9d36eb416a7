//! Definition of the segment shape.

use crate::math::{Point, Real, UnitVector, Vector};
use crate::shape::ShapeError;

use na::Unit;
use core::mem;

/// A segment shape.
///
/// Segments are oriented: queries that only accept crossings from one side
/// of a surface look at the direction going from `a` to `b`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Segment {
    /// The segment first point.
    pub a: Point<Real>,
    /// The segment second point.
    pub b: Point<Real>,
}

impl Segment {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>) -> Segment {
        Segment { a, b }
    }

    /// Creates a new segment from two points, failing if they are identical.
    pub fn try_new(a: Point<Real>, b: Point<Real>) -> Result<Segment, ShapeError> {
        if a.iter().chain(b.iter()).any(|e| !e.is_finite()) {
            return Err(ShapeError::NonFinite);
        }

        if a == b {
            log::debug!("Rejected degenerate segment at {:?}.", a);
            return Err(ShapeError::DegenerateSegment);
        }

        Ok(Segment::new(a, b))
    }
}

impl Segment {
    /// The direction of this segment scaled by its length.
    ///
    /// Points from `self.a` toward `self.b`.
    #[inline]
    pub fn scaled_direction(&self) -> Vector<Real> {
        self.b - self.a
    }

    /// The length of this segment.
    #[inline]
    pub fn length(&self) -> Real {
        self.scaled_direction().norm()
    }

    /// Swaps the two vertices of this segment.
    #[inline]
    pub fn swap(&mut self) {
        mem::swap(&mut self.a, &mut self.b)
    }

    /// This segment with its two vertices swapped.
    #[inline]
    pub fn swapped(mut self) -> Segment {
        self.swap();
        self
    }

    /// The unit direction of this segment.
    ///
    /// Points from `self.a` toward `self.b`.
    /// Returns `None` is both points are equal.
    pub fn direction(&self) -> Option<UnitVector<Real>> {
        Unit::try_new(self.scaled_direction(), crate::math::DEFAULT_EPSILON)
    }

    /// The point at parameter `t` on this segment: `a` for `t = 0`, `b` for `t = 1`.
    #[inline]
    pub fn point_at(&self, t: Real) -> Point<Real> {
        self.a + self.scaled_direction() * t
    }
}

impl From<[Point<Real>; 2]> for Segment {
    fn from(arr: [Point<Real>; 2]) -> Self {
        Segment::new(arr[0], arr[1])
    }
}
