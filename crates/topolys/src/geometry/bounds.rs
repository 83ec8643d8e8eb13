//! Axis-aligned bounding box

use glam::DVec3;
use serde::{Deserialize, Serialize};

use super::Point3D;

/// Axis-aligned bounding box. An empty box contains nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Minimum corner of the bounding box.
    pub min: DVec3,
    /// Maximum corner of the bounding box.
    pub max: DVec3,
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::empty()
    }
}

impl BoundingBox {
    /// Creates an empty (inverted) bounding box.
    pub fn empty() -> Self {
        Self {
            min: DVec3::splat(f64::INFINITY),
            max: DVec3::splat(f64::NEG_INFINITY),
        }
    }

    /// Creates a bounding box that contains all given points.
    pub fn from_points(points: impl IntoIterator<Item = Point3D>) -> Self {
        let mut bbox = Self::empty();
        for point in points {
            bbox.add_point(point);
        }
        bbox
    }

    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Grows the box to include the point
    pub fn add_point(&mut self, point: Point3D) {
        let p = point.to_vector();
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    /// Inclusive containment test
    pub fn includes(&self, point: Point3D) -> bool {
        self.includes_within(point, 0.0)
    }

    /// Containment test against the box grown by `tolerance` on every side
    pub fn includes_within(&self, point: Point3D, tolerance: f64) -> bool {
        if self.is_empty() {
            return false;
        }
        let p = point.to_vector();
        let lo = self.min - DVec3::splat(tolerance);
        let hi = self.max + DVec3::splat(tolerance);
        p.cmpge(lo).all() && p.cmple(hi).all()
    }

    /// Returns true if this bounding box intersects another.
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.min.cmple(other.max).all() && self.max.cmpge(other.min).all()
    }
}
