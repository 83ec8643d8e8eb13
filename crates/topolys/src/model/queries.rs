//! Read-only queries over wires, faces and shells

use std::collections::BTreeMap;

use crate::entity::{EdgeId, FaceId, ShellId, VertexId, WireId, is_closed, is_sequential};
use crate::geometry::{BoundingBox, Point3D};

use super::Model;

impl Model {
    /// Origin of each directed edge, in traversal order
    pub fn wire_vertices(&self, wire: WireId) -> Vec<VertexId> {
        if !self.contains(wire) {
            return Vec::new();
        }
        self.wire_segments(wire).into_iter().map(|(v0, _)| v0).collect()
    }

    pub fn wire_points(&self, wire: WireId) -> Vec<Point3D> {
        self.wire_vertices(wire)
            .into_iter()
            .map(|v| self.point_of(v))
            .collect()
    }

    /// Underlying edge of each directed edge, in traversal order
    pub fn wire_edges(&self, wire: WireId) -> Vec<EdgeId> {
        let Some(w) = self.wire(wire) else {
            return Vec::new();
        };
        w.directed_edges
            .iter()
            .map(|de| self.directed_edges[de.idx()].edge)
            .collect()
    }

    pub fn is_sequential(&self, wire: WireId) -> bool {
        self.contains(wire) && is_sequential(&self.wire_segments(wire))
    }

    pub fn is_closed(&self, wire: WireId) -> bool {
        self.contains(wire) && is_closed(&self.wire_segments(wire))
    }

    /// Edges used by both wires, in `a`'s traversal order. Empty when none
    /// are shared or either wire is foreign.
    pub fn shared_edges(&self, a: WireId, b: WireId) -> Vec<EdgeId> {
        let other = self.wire_edges(b);
        let mut shared: Vec<EdgeId> = Vec::new();
        for edge in self.wire_edges(a) {
            if other.contains(&edge) && !shared.contains(&edge) {
                shared.push(edge);
            }
        }
        shared
    }

    /// Edges shared by the outer wires of two faces
    pub fn shared_outer_edges(&self, a: FaceId, b: FaceId) -> Vec<EdgeId> {
        match (self.face(a), self.face(b)) {
            (Some(fa), Some(fb)) => self.shared_edges(fa.outer, fb.outer),
            _ => Vec::new(),
        }
    }

    /// Outer wire vertices followed by each hole's
    pub fn face_vertices(&self, face: FaceId) -> Vec<VertexId> {
        let Some(f) = self.face(face) else {
            return Vec::new();
        };
        f.wires().flat_map(|w| self.wire_vertices(w)).collect()
    }

    pub fn wire_bounding_box(&self, wire: WireId) -> BoundingBox {
        BoundingBox::from_points(self.wire_points(wire))
    }

    /// Box around the outer wire; holes lie inside it
    pub fn face_bounding_box(&self, face: FaceId) -> BoundingBox {
        match self.face(face) {
            Some(f) => self.wire_bounding_box(f.outer),
            None => BoundingBox::empty(),
        }
    }

    /// Summed length of a list of edges
    pub fn edges_length(&self, edges: &[EdgeId]) -> f64 {
        edges
            .iter()
            .filter_map(|e| self.edge(*e))
            .map(|e| e.length)
            .sum()
    }

    /// True when every edge of the shell is traversed exactly twice, once
    /// in each direction
    pub fn shell_is_closed(&self, shell: ShellId) -> bool {
        let Some(s) = self.shell(shell) else {
            return false;
        };

        // edge -> (forward uses, inverted uses)
        let mut uses: BTreeMap<EdgeId, (usize, usize)> = BTreeMap::new();
        for face in &s.faces {
            for wire in self.faces[face.idx()].wires() {
                for de in &self.wires[wire.idx()].directed_edges {
                    let de = &self.directed_edges[de.idx()];
                    let entry = uses.entry(de.edge).or_default();
                    if de.inverted {
                        entry.1 += 1;
                    } else {
                        entry.0 += 1;
                    }
                }
            }
        }

        !uses.is_empty() && uses.values().all(|&count| count == (1, 1))
    }
}
