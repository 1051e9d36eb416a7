//! Definition of the triangle shape.

use crate::math::{Point, Real, UnitVector, Vector};
use crate::shape::{Plane, ShapeError};

use na::Unit;

/// A triangle shape.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Triangle {
    /// The triangle first point.
    pub a: Point<Real>,
    /// The triangle second point.
    pub b: Point<Real>,
    /// The triangle third point.
    pub c: Point<Real>,
}

impl From<[Point<Real>; 3]> for Triangle {
    fn from(arr: [Point<Real>; 3]) -> Self {
        Triangle::new(arr[0], arr[1], arr[2])
    }
}

impl Triangle {
    /// Creates a triangle from three points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>, c: Point<Real>) -> Triangle {
        Triangle { a, b, c }
    }

    /// Creates a triangle from three points, failing if they are (almost) collinear.
    pub fn try_new(a: Point<Real>, b: Point<Real>, c: Point<Real>) -> Result<Triangle, ShapeError> {
        let triangle = Triangle::new(a, b, c);

        if triangle
            .vertices()
            .iter()
            .any(|pt| pt.iter().any(|e| !e.is_finite()))
        {
            return Err(ShapeError::NonFinite);
        }

        if triangle.is_affinely_dependent() {
            log::debug!("Rejected degenerate triangle {:?}.", triangle);
            return Err(ShapeError::DegenerateTriangle);
        }

        Ok(triangle)
    }

    /// The three vertices of this triangle.
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 3] {
        [self.a, self.b, self.c]
    }

    /// The normal of this triangle assuming it is oriented ccw.
    ///
    /// The normal points such that it is collinear to `AB × AC` (where `×` denotes the cross
    /// product). Returns `None` if the triangle is degenerate.
    #[inline]
    pub fn normal(&self) -> Option<UnitVector<Real>> {
        Unit::try_new(self.scaled_normal(), crate::math::DEFAULT_EPSILON)
    }

    /// A vector normal of this triangle.
    ///
    /// The vector points such that it is collinear to `AB × AC` (where `×` denotes the cross
    /// product). Its length is twice the triangle area.
    #[inline]
    pub fn scaled_normal(&self) -> Vector<Real> {
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        ab.cross(&ac)
    }

    /// The edges of this triangle, scaled by their length: `[B - A, C - B, A - C]`.
    #[inline]
    pub fn edges_scaled_directions(&self) -> [Vector<Real>; 3] {
        [self.b - self.a, self.c - self.b, self.a - self.c]
    }

    /// The plane containing this triangle, with the same orientation as [`Self::normal`].
    ///
    /// Returns `None` if the triangle is degenerate.
    #[inline]
    pub fn plane(&self) -> Option<Plane> {
        self.normal()
            .map(|normal| Plane::from_point_and_normal(&self.a, normal))
    }

    /// The area of this triangle.
    #[inline]
    pub fn area(&self) -> Real {
        self.scaled_normal().norm() * 0.5
    }

    /// The geometric center of this triangle.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        Point::from((self.a.coords + self.b.coords + self.c.coords) / 3.0)
    }

    /// Tests if this triangle is affinely dependent, i.e., its points are almost aligned.
    pub fn is_affinely_dependent(&self) -> bool {
        const EPS: Real = crate::math::DEFAULT_EPSILON * 100.0;

        let p1p2 = self.b - self.a;
        let p1p3 = self.c - self.a;
        relative_eq!(p1p2.cross(&p1p3).norm_squared(), 0.0, epsilon = EPS * EPS)
    }

    /// This triangle with its vertices moved by `translation`.
    #[inline]
    pub fn translated(&self, translation: &Vector<Real>) -> Triangle {
        Triangle::new(
            self.a + translation,
            self.b + translation,
            self.c + translation,
        )
    }

    /// This triangle with an opposite winding, i.e., with `b` and `c` swapped.
    #[inline]
    pub fn reversed(&self) -> Triangle {
        Triangle::new(self.a, self.c, self.b)
    }
}
