//! Vertex: a topological point

use serde::{Deserialize, Serialize};

use super::{EdgeId, EntityCore, impl_topology};
use crate::geometry::Point3D;

/// A point in the model; parents are the edges incident to it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vertex {
    #[serde(flatten)]
    pub(crate) core: EntityCore<EdgeId>,
    pub(crate) point: Point3D,
}

impl_topology!(Vertex, EdgeId);

impl Vertex {
    pub(crate) fn new(point: Point3D) -> Self {
        Self {
            core: EntityCore::new(),
            point,
        }
    }

    pub fn point(&self) -> Point3D {
        self.point
    }

    /// Edges incident to this vertex
    pub fn edges(&self) -> &[EdgeId] {
        &self.core.parents
    }
}
