//! Shapes supported by overlap3d.

pub use self::plane::Plane;
pub use self::segment::Segment;
pub use self::shape_error::ShapeError;
pub use self::sphere::Sphere;
pub use self::triangle::Triangle;

mod plane;
mod segment;
mod shape_error;
mod sphere;
mod triangle;
