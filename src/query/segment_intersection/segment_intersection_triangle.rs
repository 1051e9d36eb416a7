use crate::math::{Point, Real};
use crate::shape::{Segment, Triangle};

/// Intersection point between a segment and a triangle.
#[derive(Debug, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SegmentTriangleIntersection {
    /// The intersection point.
    pub point: Point<Real>,
    /// The position of the intersection along the segment: 0 at `segment.a`, 1 at `segment.b`.
    pub toi: Real,
    /// The barycentric coordinates `[u, v, w]` of the intersection point on the triangle,
    /// i.e., `point = u * a + v * b + w * c`.
    pub bcoords: [Real; 3],
}

/// Computes the intersection between a segment and the front face of a triangle.
///
/// The front face is the one the triangle normal `(b - a) × (c - a)` points
/// out of. Segments going from the back to the front of the triangle, or
/// parallel to it, never intersect it.
///
/// Based on Real-Time Collision Detection, section 5.3.4.
#[inline]
pub fn intersection_segment_triangle(
    segment1: &Segment,
    triangle2: &Triangle,
) -> Option<SegmentTriangleIntersection> {
    segment_triangle_intersection(segment1, triangle2, false)
}

/// Computes the intersection between a segment and a triangle, whatever the side it
/// comes from.
///
/// Only segments parallel to the triangle plane are rejected outright.
#[inline]
pub fn intersection_segment_triangle_two_sided(
    segment1: &Segment,
    triangle2: &Triangle,
) -> Option<SegmentTriangleIntersection> {
    segment_triangle_intersection(segment1, triangle2, true)
}

fn segment_triangle_intersection(
    segment1: &Segment,
    triangle2: &Triangle,
    two_sided: bool,
) -> Option<SegmentTriangleIntersection> {
    let Triangle { a, b, c } = *triangle2;
    let p = segment1.a;
    let q = segment1.b;

    let ab = b - a;
    let ac = c - a;
    let qp = p - q;

    // normal
    let n = ab.cross(&ac);
    let mut d = qp.dot(&n);

    // the segment is parallel to the triangle, or points toward its back face
    if d == 0.0 || (d < 0.0 && !two_sided) {
        return None;
    }

    let ap = p - a;
    let mut t = ap.dot(&n);
    let mut e = qp.cross(&ap);

    if d < 0.0 {
        // Flipping all the signs keeps the ratios t/d, v/d and w/d unchanged.
        d = -d;
        t = -t;
        e = -e;
    }

    if t < 0.0 || t > d {
        return None;
    }

    //
    // intersection: compute barycentric coordinates
    //
    let mut v = ac.dot(&e);

    if v < 0.0 || v > d {
        return None;
    }

    let mut w = -ab.dot(&e);

    if w < 0.0 || v + w > d {
        return None;
    }

    let invd = 1.0 / d;
    t *= invd;
    v *= invd;
    w *= invd;
    let u = 1.0 - v - w;

    Some(SegmentTriangleIntersection {
        point: Point::from(a.coords * u + b.coords * v + c.coords * w),
        toi: t,
        bcoords: [u, v, w],
    })
}
