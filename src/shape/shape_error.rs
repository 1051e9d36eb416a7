use crate::math::Real;

/// Indicates that a shape handed to a checked constructor is not well-formed.
///
/// The queries of this crate never validate their inputs. The `try_new`
/// constructors of each shape return this error instead of building a shape
/// the queries would give meaningless results for.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum ShapeError {
    /// The minimum corner of an AABB is greater than its maximum corner along some axis.
    #[error("the AABB mins are greater than its maxs along the axis {axis}.")]
    InvalidAabb {
        /// The first offending axis (0 for x, 1 for y, 2 for z).
        axis: usize,
    },
    /// A sphere radius is negative or not finite.
    #[error("invalid sphere radius: {0}.")]
    InvalidRadius(Real),
    /// A coordinate is NaN or infinite.
    #[error("the shape has a non-finite coordinate.")]
    NonFinite,
    /// The three vertices of a triangle are (almost) collinear.
    #[error("the triangle vertices are collinear.")]
    DegenerateTriangle,
    /// The two endpoints of a segment coincide.
    #[error("the segment endpoints are identical.")]
    DegenerateSegment,
    /// A plane normal has a zero (or almost zero) length.
    #[error("the plane normal cannot be normalized.")]
    DegenerateNormal,
}
