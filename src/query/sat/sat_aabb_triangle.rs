use crate::bounding_volume::AxisAlignedBounds;
use crate::math::{Real, Vector, DIM};
use crate::query::details::intersection_test_aabb_plane;
use crate::shape::{Plane, Triangle};
use na::Unit;

/// An axis separating a triangle from an AABB.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AabbTriangleSeparatingAxis {
    /// The cross product between a coordinate axis and a triangle edge.
    ///
    /// `aabb_axis` is 0, 1, 2 for x, y, z. `triangle_edge` is 0 for `b - a`,
    /// 1 for `c - b` and 2 for `a - c`.
    EdgeCross {
        /// The coordinate axis crossed with the edge.
        aabb_axis: usize,
        /// The triangle edge crossed with the coordinate axis.
        triangle_edge: usize,
    },
    /// The normal of an AABB face, i.e., the coordinate axis with the given index.
    AabbFace(usize),
    /// The triangle normal.
    TriangleFace,
}

/// Searches for an axis separating `triangle2` from `aabb1`.
///
/// The 13 candidate axes are tested in a fixed order, and the first one that
/// separates the two shapes is returned:
///
/// 1. the 9 cross products `e_i × f_j` between the coordinate axes `e_i` and the
///    triangle edges `f_j`, with `i` varying slowest,
/// 2. the 3 AABB face normals,
/// 3. the triangle normal.
///
/// Returns `None` if no axis separates the shapes, i.e., if they intersect.
/// Projection intervals that only touch do not separate.
///
/// If the triangle is degenerate its normal is undefined, and the last axis is
/// skipped.
pub fn aabb_triangle_find_separating_axis<B: ?Sized + AxisAlignedBounds>(
    aabb1: &B,
    triangle2: &Triangle,
) -> Option<AabbTriangleSeparatingAxis> {
    let center = aabb1.center();
    let extents = aabb1.half_extents();

    // Move the triangle as if the AABB was centered at the origin.
    let v = [
        triangle2.a - center,
        triangle2.b - center,
        triangle2.c - center,
    ];
    let f = triangle2.edges_scaled_directions();

    for i in 0..DIM {
        for (j, edge) in f.iter().enumerate() {
            let axis = Vector::ith(i, 1.0).cross(edge);
            let (min, max) = projection_interval(&v, &axis);
            let r = extents.dot(&axis.abs());

            if (-max).max(min) > r {
                return Some(AabbTriangleSeparatingAxis::EdgeCross {
                    aabb_axis: i,
                    triangle_edge: j,
                });
            }
        }
    }

    for i in 0..DIM {
        let (min, max) = (
            v[0][i].min(v[1][i]).min(v[2][i]),
            v[0][i].max(v[1][i]).max(v[2][i]),
        );

        if max < -extents[i] || min > extents[i] {
            return Some(AabbTriangleSeparatingAxis::AabbFace(i));
        }
    }

    // The normal is oriented as `f1 × f0`, the opposite of `Triangle::normal`.
    // Both orientations describe the same axis.
    let plane = Unit::try_new(f[1].cross(&f[0]), 0.0)
        .map(|normal| Plane::from_point_and_normal(&triangle2.a, normal));

    match plane {
        Some(plane) if !intersection_test_aabb_plane(aabb1, &plane) => {
            Some(AabbTriangleSeparatingAxis::TriangleFace)
        }
        _ => None,
    }
}

fn projection_interval(pts: &[Vector<Real>; 3], axis: &Vector<Real>) -> (Real, Real) {
    let p0 = pts[0].dot(axis);
    let p1 = pts[1].dot(axis);
    let p2 = pts[2].dot(axis);
    (p0.min(p1).min(p2), p0.max(p1).max(p2))
}
