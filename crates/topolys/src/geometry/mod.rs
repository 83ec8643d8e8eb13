//! Geometry value types
//!
//! Points, vectors, planes and boxes are plain values; topology refers to
//! them but never shares them. Double precision throughout.

mod bounds;
mod plane;
mod point;
mod transform;

pub use bounds::BoundingBox;
pub use plane::Plane3D;
pub use point::Point3D;
pub use transform::Transformation;

/// A 3D direction or displacement
pub type Vector3D = glam::DVec3;
