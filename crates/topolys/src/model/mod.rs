//! Model: the registry that owns every entity
//!
//! Callers never construct entities themselves. They ask the model for a
//! vertex at a point, a wire over vertices, a face over wires, and the model
//! deduplicates against what it already holds and repairs existing topology
//! when new geometry lands on it.

mod build;
mod config;
mod queries;
mod split;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entity::{
    Attributes, DirectedEdge, DirectedEdgeId, Edge, EdgeId, EntityId, Face, FaceId, Shell, ShellId,
    Topology, Vertex, VertexId, Wire, WireId,
};
use crate::error::{TopoError, TopoResult};
use crate::geometry::{Point3D, Vector3D};
use crate::io::ModelData;

pub use config::ModelConfig;

/// Owner of all vertices, edges, directed edges, wires, faces and shells.
///
/// Entities live in one arena per kind and are addressed by typed handles
/// carrying this model's id. Nothing is ever removed; a failed construction
/// restores the model to its state before the call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(into = "ModelData", try_from = "ModelData")]
pub struct Model {
    pub(crate) id: Uuid,
    pub(crate) config: ModelConfig,
    pub(crate) vertices: Vec<Vertex>,
    pub(crate) edges: Vec<Edge>,
    pub(crate) directed_edges: Vec<DirectedEdge>,
    pub(crate) wires: Vec<Wire>,
    pub(crate) faces: Vec<Face>,
    pub(crate) shells: Vec<Shell>,
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

impl Model {
    /// Empty model with the default tolerance
    pub fn new() -> Self {
        Self::from_parts(Uuid::new_v4(), ModelConfig::default())
    }

    pub fn with_tolerance(tolerance: f64) -> TopoResult<Self> {
        Self::with_config(ModelConfig::default().with_tolerance(tolerance))
    }

    pub fn with_config(config: ModelConfig) -> TopoResult<Self> {
        config.validate()?;
        Ok(Self::from_parts(Uuid::new_v4(), config))
    }

    pub(crate) fn from_parts(id: Uuid, config: ModelConfig) -> Self {
        Self {
            id,
            config,
            vertices: Vec::new(),
            edges: Vec::new(),
            directed_edges: Vec::new(),
            wires: Vec::new(),
            faces: Vec::new(),
            shells: Vec::new(),
        }
    }

    /// Identifier stamped into every handle this model hands out
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    pub fn tolerance(&self) -> f64 {
        self.config.tolerance
    }

    // ========== Arena access ==========

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn directed_edges(&self) -> &[DirectedEdge] {
        &self.directed_edges
    }

    pub fn wires(&self) -> &[Wire] {
        &self.wires
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn shells(&self) -> &[Shell] {
        &self.shells
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.owns(id.model_id)
            .then(|| self.vertices.get(id.idx()))
            .flatten()
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.owns(id.model_id)
            .then(|| self.edges.get(id.idx()))
            .flatten()
    }

    pub fn directed_edge(&self, id: DirectedEdgeId) -> Option<&DirectedEdge> {
        self.owns(id.model_id)
            .then(|| self.directed_edges.get(id.idx()))
            .flatten()
    }

    pub fn wire(&self, id: WireId) -> Option<&Wire> {
        self.owns(id.model_id)
            .then(|| self.wires.get(id.idx()))
            .flatten()
    }

    pub fn face(&self, id: FaceId) -> Option<&Face> {
        self.owns(id.model_id)
            .then(|| self.faces.get(id.idx()))
            .flatten()
    }

    pub fn shell(&self, id: ShellId) -> Option<&Shell> {
        self.owns(id.model_id)
            .then(|| self.shells.get(id.idx()))
            .flatten()
    }

    /// True if the handle was issued by this model and still resolves
    pub fn contains(&self, id: impl Into<EntityId>) -> bool {
        match id.into() {
            EntityId::Vertex(id) => self.vertex(id).is_some(),
            EntityId::Edge(id) => self.edge(id).is_some(),
            EntityId::DirectedEdge(id) => self.directed_edge(id).is_some(),
            EntityId::Wire(id) => self.wire(id).is_some(),
            EntityId::Face(id) => self.face(id).is_some(),
            EntityId::Shell(id) => self.shell(id).is_some(),
        }
    }

    /// Caller-defined attributes of any entity
    pub fn attributes(&self, id: impl Into<EntityId>) -> Option<&Attributes> {
        match id.into() {
            EntityId::Vertex(id) => self.vertex(id).map(Topology::attributes),
            EntityId::Edge(id) => self.edge(id).map(Topology::attributes),
            EntityId::DirectedEdge(id) => self.directed_edge(id).map(Topology::attributes),
            EntityId::Wire(id) => self.wire(id).map(Topology::attributes),
            EntityId::Face(id) => self.face(id).map(Topology::attributes),
            EntityId::Shell(id) => self.shell(id).map(Topology::attributes),
        }
    }

    pub fn attributes_mut(&mut self, id: impl Into<EntityId>) -> Option<&mut Attributes> {
        let id = id.into();
        if !self.contains(id) {
            return None;
        }
        let attributes = match id {
            EntityId::Vertex(id) => self.vertices[id.idx()].attributes_mut(),
            EntityId::Edge(id) => self.edges[id.idx()].attributes_mut(),
            EntityId::DirectedEdge(id) => self.directed_edges[id.idx()].attributes_mut(),
            EntityId::Wire(id) => self.wires[id.idx()].attributes_mut(),
            EntityId::Face(id) => self.faces[id.idx()].attributes_mut(),
            EntityId::Shell(id) => self.shells[id.idx()].attributes_mut(),
        };
        Some(attributes)
    }

    /// Point of a vertex; `None` for a foreign handle
    pub fn point(&self, id: VertexId) -> Option<Point3D> {
        self.vertex(id).map(Vertex::point)
    }

    // ========== Internal helpers ==========

    fn owns(&self, model_id: Uuid) -> bool {
        model_id == self.id
    }

    pub(crate) fn ensure(&self, id: impl Into<EntityId>) -> TopoResult<()> {
        let id = id.into();
        if self.contains(id) {
            Ok(())
        } else {
            Err(TopoError::ForeignHandle(id.to_string()))
        }
    }

    /// Point of a vertex already known to belong here
    pub(crate) fn point_of(&self, id: VertexId) -> Point3D {
        self.vertices[id.idx()].point
    }

    pub(crate) fn vertex_id(&self, index: usize) -> VertexId {
        VertexId::new(self.id, index)
    }

    pub(crate) fn edge_id(&self, index: usize) -> EdgeId {
        EdgeId::new(self.id, index)
    }

    pub(crate) fn directed_edge_id(&self, index: usize) -> DirectedEdgeId {
        DirectedEdgeId::new(self.id, index)
    }

    pub(crate) fn wire_id(&self, index: usize) -> WireId {
        WireId::new(self.id, index)
    }

    pub(crate) fn face_id(&self, index: usize) -> FaceId {
        FaceId::new(self.id, index)
    }

    pub(crate) fn shell_id(&self, index: usize) -> ShellId {
        ShellId::new(self.id, index)
    }

    /// (origin, terminal) of each directed edge in the wire
    pub(crate) fn wire_segments(&self, wire: WireId) -> Vec<(VertexId, VertexId)> {
        self.wires[wire.idx()]
            .directed_edges
            .iter()
            .map(|de| {
                let de = &self.directed_edges[de.idx()];
                (de.v0, de.v1)
            })
            .collect()
    }

    // ========== Recalculation ==========

    pub(crate) fn recalculate_edge(&mut self, id: EdgeId) {
        let edge = &self.edges[id.idx()];
        let (p0, p1) = (self.point_of(edge.v0), self.point_of(edge.v1));
        self.edges[id.idx()].recalculate(p0, p1);
    }

    pub(crate) fn recalculate_directed_edge(&mut self, id: DirectedEdgeId) {
        let edge = &self.edges[self.directed_edges[id.idx()].edge.idx()];
        let start = (edge.v0, self.point_of(edge.v0));
        let end = (edge.v1, self.point_of(edge.v1));
        self.directed_edges[id.idx()].recalculate(start, end);
    }

    pub(crate) fn recalculate_wire(&mut self, id: WireId) -> TopoResult<()> {
        let wire = &self.wires[id.idx()];
        let count = wire.directed_edges.len();
        let mut points = Vec::with_capacity(count);
        let mut vectors: Vec<Vector3D> = Vec::with_capacity(count);
        let mut lengths = Vec::with_capacity(count);
        for de in &wire.directed_edges {
            let de = &self.directed_edges[de.idx()];
            points.push(self.point_of(de.v0));
            vectors.push(de.vector);
            lengths.push(de.length);
        }
        self.wires[id.idx()].recalculate(&points, &vectors, &lengths)
    }

    /// Non-empty, sequential and closed
    pub(crate) fn validate_wire(&self, id: WireId) -> TopoResult<()> {
        let segments = self.wire_segments(id);
        if segments.is_empty() {
            return Err(TopoError::EmptyWire);
        }
        if let Some(index) = segments.windows(2).position(|pair| pair[0].1 != pair[1].0) {
            return Err(TopoError::NotSequential { index });
        }
        if !crate::entity::is_closed(&segments) {
            return Err(TopoError::NotClosed {
                count: segments.len(),
            });
        }
        Ok(())
    }

    /// Move a vertex and refresh every cache that depends on it
    pub(crate) fn relocate_vertex(&mut self, id: VertexId, point: Point3D) -> TopoResult<()> {
        self.vertices[id.idx()].point = point;

        let mut wires: Vec<WireId> = Vec::new();
        for edge in self.vertices[id.idx()].parents().to_vec() {
            self.recalculate_edge(edge);
            for de in self.edges[edge.idx()].parents().to_vec() {
                self.recalculate_directed_edge(de);
                for wire in self.directed_edges[de.idx()].parents() {
                    if !wires.contains(wire) {
                        wires.push(*wire);
                    }
                }
            }
        }
        for wire in wires {
            self.recalculate_wire(wire)?;
        }
        Ok(())
    }

    // ========== Transactions ==========

    /// Run `build`, restoring the model as it was before if it fails.
    ///
    /// The snapshot covers in-place edits from splits and relocations as well
    /// as additions.
    pub(crate) fn transaction<T>(
        &mut self,
        what: &str,
        build: impl FnOnce(&mut Self) -> TopoResult<T>,
    ) -> TopoResult<T> {
        let snapshot = self.clone();
        let result = build(self);
        if let Err(err) = &result {
            tracing::warn!("Rolling back {}: {}", what, err);
            *self = snapshot;
        }
        result
    }
}
