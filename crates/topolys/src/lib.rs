//! Topological modeling kernel for planar building geometry
//!
//! This crate provides:
//! - Geometry value types (points, vectors, planes, boxes, transforms)
//! - An entity graph of vertices, edges, directed edges, wires, faces and shells
//! - A [`Model`] registry that deduplicates geometry by tolerance and splits
//!   existing edges when new vertices land on them
//! - Shared boundary queries between wires and faces
//! - JSON persistence and a Graphviz dump

pub mod constants;
pub mod entity;
pub mod error;
pub mod geometry;
mod io;
pub mod model;

// Re-exports for convenience
pub use entity::{
    Attributes, DirectedEdge, DirectedEdgeId, Edge, EdgeId, EntityId, Face, FaceId, Shell, ShellId,
    Topology, Vertex, VertexId, Wire, WireId,
};
pub use error::{TopoError, TopoResult};
pub use geometry::{BoundingBox, Plane3D, Point3D, Transformation, Vector3D};
pub use model::{Model, ModelConfig};
