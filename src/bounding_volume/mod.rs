//! Bounding volumes.
//!
//! The queries of this crate only read the two corners of axis-aligned boxes.
//! Any type exposing those corners, for example the node of a spatial index,
//! can be passed to them by implementing [`AxisAlignedBounds`].

#[doc(inline)]
pub use crate::bounding_volume::aabb::Aabb;
#[doc(inline)]
pub use crate::bounding_volume::axis_aligned_bounds::AxisAlignedBounds;

#[doc(hidden)]
pub mod aabb;
mod axis_aligned_bounds;
