//! Edge: an undirected segment between two vertices

use serde::{Deserialize, Serialize};

use super::{DirectedEdgeId, EntityCore, VertexId, impl_topology};
use crate::geometry::Point3D;

/// Undirected segment. `v0` is the origin it was created with; its
/// parents are the directed edges traversing it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge {
    #[serde(flatten)]
    pub(crate) core: EntityCore<DirectedEdgeId>,
    pub(crate) v0: VertexId,
    pub(crate) v1: VertexId,
    #[serde(skip)]
    pub(crate) length: f64,
}

impl_topology!(Edge, DirectedEdgeId);

impl Edge {
    pub(crate) fn new(v0: VertexId, v1: VertexId) -> Self {
        Self {
            core: EntityCore::new(),
            v0,
            v1,
            length: 0.0,
        }
    }

    pub fn v0(&self) -> VertexId {
        self.v0
    }

    pub fn v1(&self) -> VertexId {
        self.v1
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    /// True if this edge joins `a` and `b`, in either order
    pub fn connects(&self, a: VertexId, b: VertexId) -> bool {
        (self.v0 == a && self.v1 == b) || (self.v0 == b && self.v1 == a)
    }

    pub(crate) fn recalculate(&mut self, p0: Point3D, p1: Point3D) {
        self.length = p0.distance(p1);
    }
}
