use crate::math::{Point, Real, UnitVector};
use crate::shape::{Sphere, Triangle};

#[cfg(not(feature = "std"))]
use na::ComplexField; // for .sqrt()

/// Constant subtracted from the penetration distance reported by [`contact_sphere_triangle`].
///
/// TODO: confirm with the octree collision response whether this unit shift is a
/// contact margin or a defect before changing it.
pub const SPHERE_TRIANGLE_DISTANCE_OFFSET: Real = 1.0;

/// Contact between a sphere and a triangle.
#[derive(Debug, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SphereTriangleContact {
    /// Distance between the sphere surface and the triangle plane, minus
    /// [`SPHERE_TRIANGLE_DISTANCE_OFFSET`].
    ///
    /// Negative values indicate a penetration.
    pub dist: Real,
    /// The sphere center moved by `dist` along the opposite of the triangle normal.
    pub point: Point<Real>,
}

/// Computes the contact between a sphere and a triangle.
///
/// Returns `None` if they do not intersect. The rejection is done in three
/// stages, each of which exits early:
///
/// 1. the sphere does not reach the triangle plane,
/// 2. the sphere is entirely in the Voronoi region of one vertex, away from it,
/// 3. the sphere is entirely in the Voronoi region of one edge, away from it.
///
/// `normal` is the unit normal of the triangle. It is only used to place the
/// contact point and can be oriented either way.
pub fn contact_sphere_triangle(
    sphere1: &Sphere,
    triangle2: &Triangle,
    normal2: &UnitVector<Real>,
) -> Option<SphereTriangleContact> {
    // See https://realtimecollisiondetection.net/blog/?p=103
    let a = triangle2.a - sphere1.center;
    let b = triangle2.b - sphere1.center;
    let c = triangle2.c - sphere1.center;
    let rr = sphere1.radius * sphere1.radius;

    // Sphere vs. triangle plane.
    let v = (b - a).cross(&(c - a));
    let d = a.dot(&v);
    let e = v.dot(&v);

    if d * d > rr * e {
        return None;
    }

    // Sphere vs. triangle vertices.
    let aa = a.dot(&a);
    let ab = a.dot(&b);
    let ac = a.dot(&c);
    let bb = b.dot(&b);
    let bc = b.dot(&c);
    let cc = c.dot(&c);

    if (aa > rr && ab > aa && ac > aa)
        || (bb > rr && ab > bb && bc > bb)
        || (cc > rr && ac > cc && bc > cc)
    {
        return None;
    }

    // Sphere vs. triangle edges.
    let ab_edge = b - a;
    let bc_edge = c - b;
    let ca_edge = a - c;
    let d1 = ab - aa;
    let d2 = bc - bb;
    let d3 = ac - cc;
    let e1 = ab_edge.dot(&ab_edge);
    let e2 = bc_edge.dot(&bc_edge);
    let e3 = ca_edge.dot(&ca_edge);
    let q1 = a * e1 - ab_edge * d1;
    let q2 = b * e2 - bc_edge * d2;
    let q3 = c * e3 - ca_edge * d3;
    let qc = c * e1 - q1;
    let qa = a * e2 - q2;
    let qb = b * e3 - q3;

    if (q1.dot(&q1) > rr * e1 * e1 && q1.dot(&qc) >= 0.0)
        || (q2.dot(&q2) > rr * e2 * e2 && q2.dot(&qa) >= 0.0)
        || (q3.dot(&q3) > rr * e3 * e3 && q3.dot(&qb) >= 0.0)
    {
        return None;
    }

    let dist = (d * d / e).sqrt() - sphere1.radius - SPHERE_TRIANGLE_DISTANCE_OFFSET;
    let point = sphere1.center + (-normal2.into_inner()) * dist;

    Some(SphereTriangleContact { dist, point })
}

/// Computes the contact between a sphere and a triangle, deriving the triangle normal
/// from its winding.
///
/// Returns `None` if they do not intersect, or if the triangle is degenerate.
pub fn contact_sphere_triangle_with_computed_normal(
    sphere1: &Sphere,
    triangle2: &Triangle,
) -> Option<SphereTriangleContact> {
    let Some(normal) = triangle2.normal() else {
        log::debug!(
            "Skipped sphere/triangle contact: the triangle {:?} has no normal.",
            triangle2
        );
        return None;
    };

    contact_sphere_triangle(sphere1, triangle2, &normal)
}

/// Computes the contact between a triangle and a sphere.
#[inline]
pub fn contact_triangle_sphere(
    triangle1: &Triangle,
    normal1: &UnitVector<Real>,
    sphere2: &Sphere,
) -> Option<SphereTriangleContact> {
    contact_sphere_triangle(sphere2, triangle1, normal1)
}
