//! Persistence: JSON round trip and Graphviz dump
//!
//! Only entities, their handles and their attributes are stored. Parent
//! links and derived caches (lengths, vectors, planes) are rebuilt on load,
//! and every wire is validated again.

mod graphviz;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entity::{DirectedEdge, Edge, Face, Shell, Vertex, Wire};
use crate::error::{TopoError, TopoResult};
use crate::model::{Model, ModelConfig};

/// Serialized form of a [`Model`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct ModelData {
    id: Uuid,
    #[serde(default)]
    config: ModelConfig,
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
    directed_edges: Vec<DirectedEdge>,
    wires: Vec<Wire>,
    #[serde(default)]
    faces: Vec<Face>,
    #[serde(default)]
    shells: Vec<Shell>,
}

impl From<Model> for ModelData {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            config: model.config,
            vertices: model.vertices,
            edges: model.edges,
            directed_edges: model.directed_edges,
            wires: model.wires,
            faces: model.faces,
            shells: model.shells,
        }
    }
}

impl TryFrom<ModelData> for Model {
    type Error = TopoError;

    fn try_from(data: ModelData) -> TopoResult<Self> {
        data.config.validate()?;
        let mut model = Model::from_parts(data.id, data.config);
        model.vertices = data.vertices;
        model.edges = data.edges;
        model.directed_edges = data.directed_edges;
        model.wires = data.wires;
        model.faces = data.faces;
        model.shells = data.shells;
        model.rebuild_links()?;
        Ok(model)
    }
}

fn resolve(model: &Model, kind: &str, model_id: Uuid, index: u32, len: usize) -> TopoResult<()> {
    if model_id == model.id && (index as usize) < len {
        Ok(())
    } else {
        Err(TopoError::Serialization(format!(
            "{kind} handle {index} does not resolve"
        )))
    }
}

impl Model {
    /// Restore parent links and caches after loading
    fn rebuild_links(&mut self) -> TopoResult<()> {
        for i in 0..self.edges.len() {
            let id = self.edge_id(i);
            let (v0, v1) = (self.edges[i].v0, self.edges[i].v1);
            for v in [v0, v1] {
                resolve(self, "vertex", v.model_id, v.index, self.vertices.len())?;
            }
            if v0 == v1 {
                return Err(TopoError::DegenerateEdge(v0.index));
            }
            self.vertices[v0.idx()].core.link(id);
            self.vertices[v1.idx()].core.link(id);
            self.recalculate_edge(id);
        }

        for i in 0..self.directed_edges.len() {
            let id = self.directed_edge_id(i);
            let edge = self.directed_edges[i].edge;
            resolve(self, "edge", edge.model_id, edge.index, self.edges.len())?;
            self.edges[edge.idx()].core.link(id);
            self.recalculate_directed_edge(id);
        }

        for i in 0..self.wires.len() {
            let id = self.wire_id(i);
            for de in self.wires[i].directed_edges.clone() {
                resolve(self, "directed edge", de.model_id, de.index, self.directed_edges.len())?;
                self.directed_edges[de.idx()].core.link(id);
            }
            self.validate_wire(id)?;
            self.recalculate_wire(id)?;
        }

        for i in 0..self.faces.len() {
            let id = self.face_id(i);
            let wires: Vec<_> = self.faces[i].wires().collect();
            for wire in wires {
                resolve(self, "wire", wire.model_id, wire.index, self.wires.len())?;
                self.wires[wire.idx()].core.link(id);
            }
        }

        for i in 0..self.shells.len() {
            let id = self.shell_id(i);
            for face in self.shells[i].faces.clone() {
                resolve(self, "face", face.model_id, face.index, self.faces.len())?;
                self.faces[face.idx()].core.link(id);
            }
        }

        tracing::debug!(
            "Loaded model {} ({} vertices, {} edges, {} wires, {} faces)",
            self.id,
            self.vertices.len(),
            self.edges.len(),
            self.wires.len(),
            self.faces.len()
        );
        Ok(())
    }

    pub fn to_json(&self) -> TopoResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| TopoError::Serialization(e.to_string()))
    }

    pub fn from_json(json: &str) -> TopoResult<Self> {
        serde_json::from_str(json).map_err(|e| TopoError::Serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Topology;
    use crate::geometry::Point3D;

    fn two_squares() -> Model {
        let mut model = Model::new();
        for x in [0.0, 1.0] {
            let vs = model
                .get_vertices(&[
                    Point3D::new(x, 0.0, 0.0),
                    Point3D::new(x + 1.0, 0.0, 0.0),
                    Point3D::new(x + 1.0, 1.0, 0.0),
                    Point3D::new(x, 1.0, 0.0),
                ])
                .unwrap();
            let wire = model.get_wire(&vs).unwrap();
            let face = model.get_face(wire, &[]).unwrap().unwrap();
            model
                .attributes_mut(face)
                .unwrap()
                .insert("name".into(), serde_json::json!(format!("square {x}")));
        }
        model
    }

    #[test]
    fn test_json_roundtrip_keeps_linkage() {
        let model = two_squares();
        let restored = Model::from_json(&model.to_json().unwrap()).unwrap();

        assert_eq!(restored.id(), model.id());
        assert_eq!(restored.vertices().len(), 6);
        assert_eq!(restored.edges().len(), model.edges().len());
        assert_eq!(restored.faces().len(), 2);

        for (a, b) in model.faces().iter().zip(restored.faces()) {
            assert_eq!(a.id(), b.id());
            assert_eq!(a.outer(), b.outer());
            assert_eq!(a.attributes(), b.attributes());
        }
        for (a, b) in model.vertices().iter().zip(restored.vertices()) {
            assert_eq!(a.id(), b.id());
            assert_eq!(a.point(), b.point());
            let mut pa = a.parents().to_vec();
            let mut pb = b.parents().to_vec();
            pa.sort();
            pb.sort();
            assert_eq!(pa, pb);
        }
        for (a, b) in model.wires().iter().zip(restored.wires()) {
            assert_eq!(a.directed_edges(), b.directed_edges());
            assert_eq!(a.parents(), b.parents());
            assert_eq!(a.perimeter(), b.perimeter());
            assert_eq!(a.outward_normal(), b.outward_normal());
        }
    }

    #[test]
    fn test_rejects_dangling_handle() {
        let model = two_squares();
        let mut value: serde_json::Value = serde_json::to_value(&model).unwrap();
        value["edges"][0]["v1"]["index"] = serde_json::json!(99);
        let err = Model::from_json(&value.to_string()).unwrap_err();
        assert!(matches!(err, TopoError::Serialization(_)));
    }
}
