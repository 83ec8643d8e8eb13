//! Infinite 3D plane

use serde::{Deserialize, Serialize};

use super::{Point3D, Vector3D};

/// A plane through `origin` with unit `normal`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane3D {
    pub origin: Point3D,
    pub normal: Vector3D,
}

impl Default for Plane3D {
    fn default() -> Self {
        Self {
            origin: Point3D::ORIGIN,
            normal: Vector3D::Z,
        }
    }
}

impl Plane3D {
    /// Plane through a point with the given normal (normalized here).
    /// Returns `None` for a zero or non-finite normal.
    pub fn from_point_normal(origin: Point3D, normal: Vector3D) -> Option<Self> {
        let normal = normal.try_normalize()?;
        Some(Self { origin, normal })
    }

    /// Plane through three points, normal following the right-hand rule
    pub fn from_points(p1: Point3D, p2: Point3D, p3: Point3D) -> Option<Self> {
        Self::from_point_normal(p1, (p2 - p1).cross(p3 - p1))
    }

    /// Plane through a point spanned by two axes; normal is `xaxis × yaxis`
    pub fn from_point_axes(origin: Point3D, xaxis: Vector3D, yaxis: Vector3D) -> Option<Self> {
        Self::from_point_normal(origin, xaxis.cross(yaxis))
    }

    /// Signed distance from the plane, positive on the normal side
    pub fn signed_distance(&self, point: Point3D) -> f64 {
        self.normal.dot(point - self.origin)
    }

    /// Orthogonal projection of a point onto the plane
    pub fn project(&self, point: Point3D) -> Point3D {
        point - self.normal * self.signed_distance(point)
    }

    /// True when the point is within `epsilon` of the plane
    pub fn contains(&self, point: Point3D, epsilon: f64) -> bool {
        self.signed_distance(point).abs() <= epsilon
    }
}
