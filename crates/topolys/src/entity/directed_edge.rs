//! Directed edge: one traversal direction over an edge

use serde::{Deserialize, Serialize};

use super::{EdgeId, EntityCore, VertexId, WireId, impl_topology};
use crate::geometry::{Point3D, Vector3D};

/// Traversal of an [`Edge`](super::Edge), reversed when `inverted`.
///
/// Endpoints, vector and length are cached from the underlying edge and
/// refreshed by the model whenever that edge changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectedEdge {
    #[serde(flatten)]
    pub(crate) core: EntityCore<WireId>,
    pub(crate) edge: EdgeId,
    pub(crate) inverted: bool,
    #[serde(skip)]
    pub(crate) v0: VertexId,
    #[serde(skip)]
    pub(crate) v1: VertexId,
    #[serde(skip)]
    pub(crate) vector: Vector3D,
    #[serde(skip)]
    pub(crate) length: f64,
}

impl_topology!(DirectedEdge, WireId);

impl DirectedEdge {
    pub(crate) fn new(edge: EdgeId, inverted: bool) -> Self {
        Self {
            core: EntityCore::new(),
            edge,
            inverted,
            v0: VertexId::default(),
            v1: VertexId::default(),
            vector: Vector3D::ZERO,
            length: 0.0,
        }
    }

    pub fn edge(&self) -> EdgeId {
        self.edge
    }

    pub fn inverted(&self) -> bool {
        self.inverted
    }

    /// Origin of the traversal
    pub fn v0(&self) -> VertexId {
        self.v0
    }

    /// Terminal of the traversal
    pub fn v1(&self) -> VertexId {
        self.v1
    }

    /// `v1 - v0`
    pub fn vector(&self) -> Vector3D {
        self.vector
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    /// Refresh caches from the edge's endpoints (`edge_v0`, `edge_v1`) and their points
    pub(crate) fn recalculate(
        &mut self,
        (edge_v0, p0): (VertexId, Point3D),
        (edge_v1, p1): (VertexId, Point3D),
    ) {
        let (v0, v1, start, end) = if self.inverted {
            (edge_v1, edge_v0, p1, p0)
        } else {
            (edge_v0, edge_v1, p0, p1)
        };
        self.v0 = v0;
        self.v1 = v1;
        self.vector = end - start;
        self.length = self.vector.length();
    }
}
