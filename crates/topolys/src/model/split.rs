//! Mid-edge insertion: splitting an edge and everything built on it

use crate::entity::{EdgeId, Topology, VertexId};
use crate::error::{TopoError, TopoResult};

use super::Model;
use super::build::project_onto_line;

impl Model {
    /// Split `edge` at `vertex`, which must lie on it.
    ///
    /// The vertex is projected onto the edge line. The edge keeps its origin
    /// and now ends at the vertex; a new edge covers the remainder. Every
    /// directed edge over the original gets a companion over the new edge
    /// in the same sense, spliced into each wire so the loop stays
    /// sequential. Wire and face identities are unchanged.
    pub(crate) fn split_edge(&mut self, edge: EdgeId, vertex: VertexId) -> TopoResult<()> {
        let (v0, old_v1) = {
            let e = &self.edges[edge.idx()];
            (e.v0, e.v1)
        };
        let point = self.point_of(vertex);
        let projected = project_onto_line(point, self.point_of(v0), self.point_of(old_v1));
        let distance = point.distance(projected);
        let tolerance = self.tolerance();
        if distance > tolerance {
            return Err(TopoError::SplitProjection {
                vertex: vertex.index,
                distance,
                tolerance,
            });
        }
        self.relocate_vertex(vertex, projected)?;

        let new_edge = self.get_edge(vertex, old_v1)?;
        self.vertices[old_v1.idx()].core.unlink(edge);
        self.edges[edge.idx()].v1 = vertex;
        self.vertices[vertex.idx()].core.link(edge);
        self.recalculate_edge(edge);
        tracing::debug!(
            "Split edge {} at vertex {}, remainder is edge {}",
            edge,
            vertex,
            new_edge
        );

        let directed = self.edges[edge.idx()].parents().to_vec();
        for de in &directed {
            self.recalculate_directed_edge(*de);
        }

        for de in directed {
            let inverted = self.directed_edges[de.idx()].inverted;
            let new_de = if inverted {
                self.get_directed_edge(old_v1, vertex)?
            } else {
                self.get_directed_edge(vertex, old_v1)?
            };

            for wire in self.directed_edges[de.idx()].parents().to_vec() {
                // An inverted traversal reaches the remainder first
                if !self.wires[wire.idx()].splice(de, new_de, inverted) {
                    return Err(TopoError::SplitInconsistent {
                        wire: wire.index,
                        reason: format!("directed edge {de} is not part of the wire"),
                    });
                }
                self.directed_edges[new_de.idx()].core.link(wire);
                self.recalculate_wire(wire)?;
                self.validate_wire(wire)
                    .map_err(|err| TopoError::SplitInconsistent {
                        wire: wire.index,
                        reason: err.to_string(),
                    })?;
                tracing::debug!("Spliced directed edge {} into wire {}", new_de, wire);
            }
        }

        Ok(())
    }
}
