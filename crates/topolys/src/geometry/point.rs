//! 3D point

use std::ops::{Add, Sub};

use glam::DVec3;
use serde::{Deserialize, Serialize};

use super::Vector3D;

/// A position in 3D space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3D {
    /// The origin
    pub const ORIGIN: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Position vector from the origin
    pub fn to_vector(self) -> Vector3D {
        DVec3::new(self.x, self.y, self.z)
    }

    pub fn distance(self, other: Point3D) -> f64 {
        (other - self).length()
    }

    pub fn distance_squared(self, other: Point3D) -> f64 {
        (other - self).length_squared()
    }

    /// Per-axis comparison: true when no coordinate differs by more than `tolerance`
    pub fn within(self, other: Point3D, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance
            && (self.y - other.y).abs() <= tolerance
            && (self.z - other.z).abs() <= tolerance
    }
}

impl From<DVec3> for Point3D {
    fn from(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<[f64; 3]> for Point3D {
    fn from(a: [f64; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }
}

impl From<Point3D> for [f64; 3] {
    fn from(p: Point3D) -> Self {
        [p.x, p.y, p.z]
    }
}

/// Displacement from `other` to `self`
impl Sub for Point3D {
    type Output = Vector3D;

    fn sub(self, other: Point3D) -> Vector3D {
        self.to_vector() - other.to_vector()
    }
}

impl Add<Vector3D> for Point3D {
    type Output = Point3D;

    fn add(self, v: Vector3D) -> Point3D {
        Point3D::from(self.to_vector() + v)
    }
}

impl Sub<Vector3D> for Point3D {
    type Output = Point3D;

    fn sub(self, v: Vector3D) -> Point3D {
        Point3D::from(self.to_vector() - v)
    }
}
