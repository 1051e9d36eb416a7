//! Implementation details of the segment intersection computations.

pub use self::segment_intersection_triangle::{
    intersection_segment_triangle, intersection_segment_triangle_two_sided,
    SegmentTriangleIntersection,
};

mod segment_intersection_triangle;
