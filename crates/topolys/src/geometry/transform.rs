//! Rigid transformations

use glam::{DAffine3, DVec3};

use super::{Point3D, Vector3D};

/// An affine transformation applied to points and vectors
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Transformation {
    affine: DAffine3,
}

impl Transformation {
    pub fn identity() -> Self {
        Self {
            affine: DAffine3::IDENTITY,
        }
    }

    pub fn translation(offset: Vector3D) -> Self {
        Self {
            affine: DAffine3::from_translation(offset),
        }
    }

    /// Right-handed rotation about `axis` by `angle` radians.
    /// Returns `None` for a zero axis.
    pub fn rotation(axis: Vector3D, angle: f64) -> Option<Self> {
        let axis = axis.try_normalize()?;
        Some(Self {
            affine: DAffine3::from_axis_angle(axis, angle),
        })
    }

    /// `self` followed by `other`
    pub fn then(self, other: Transformation) -> Self {
        Self {
            affine: other.affine * self.affine,
        }
    }

    pub fn apply_point(&self, point: Point3D) -> Point3D {
        Point3D::from(self.affine.transform_point3(point.to_vector()))
    }

    /// Vectors are rotated but never translated
    pub fn apply_vector(&self, vector: Vector3D) -> DVec3 {
        self.affine.transform_vector3(vector)
    }
}
