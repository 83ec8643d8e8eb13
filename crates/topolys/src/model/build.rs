//! Entity acquisition: find an equivalent entity or create a new one

use crate::constants::EPSILON;
use crate::entity::{
    DirectedEdge, DirectedEdgeId, Edge, EdgeId, EntityId, Face, FaceId, Shell, ShellId, Vertex,
    VertexId, Wire, WireId, find_offset,
};
use crate::error::{TopoError, TopoResult};
use crate::geometry::Point3D;

use super::Model;

/// `p` lies between `a` and `b` when `|pa| + |pb|` is within `tolerance` of `|ab|`
pub(crate) fn within_segment(p: Point3D, a: Point3D, b: Point3D, tolerance: f64) -> bool {
    (p.distance(a) + p.distance(b) - a.distance(b)).abs() < tolerance
}

/// Foot of the perpendicular from `p` onto the line through `a` and `b`
pub(crate) fn project_onto_line(p: Point3D, a: Point3D, b: Point3D) -> Point3D {
    let u = (b - a).normalize_or_zero();
    a + u * u.dot(p - a)
}

impl Model {
    // ========== Vertices ==========

    /// First vertex strictly closer than the tolerance to `point`
    pub fn find_existing_vertex(&self, point: Point3D) -> Option<VertexId> {
        let tolerance = self.tolerance();
        self.vertices
            .iter()
            .position(|v| {
                v.point.within(point, tolerance)
                    && v.point.distance_squared(point) < tolerance * tolerance
            })
            .map(|index| self.vertex_id(index))
    }

    /// Vertex at `point`, reusing one within tolerance.
    ///
    /// A new vertex that lands on existing edges splits each of them. Fails if
    /// projecting onto such an edge would move the point further than the
    /// tolerance, or if a split leaves a wire non-planar. The model is left
    /// untouched in both cases.
    pub fn get_vertex(&mut self, point: Point3D) -> TopoResult<VertexId> {
        if let Some(existing) = self.find_existing_vertex(point) {
            tracing::trace!("Reusing vertex {} for {:?}", existing, point);
            return Ok(existing);
        }

        let tolerance = self.tolerance();
        let candidates: Vec<EdgeId> = self
            .edges
            .iter()
            .enumerate()
            .filter(|(_, e)| within_segment(point, self.point_of(e.v0), self.point_of(e.v1), tolerance))
            .map(|(index, _)| self.edge_id(index))
            .collect();

        for edge in &candidates {
            let e = &self.edges[edge.idx()];
            let projected = project_onto_line(point, self.point_of(e.v0), self.point_of(e.v1));
            let distance = point.distance(projected);
            if distance > tolerance {
                return Err(TopoError::SplitProjection {
                    vertex: self.vertices.len() as u32,
                    distance,
                    tolerance,
                });
            }
        }

        if candidates.is_empty() {
            return Ok(self.push_vertex(point));
        }
        self.transaction("vertex", |model| {
            let id = model.push_vertex(point);
            for edge in candidates {
                if model.vertex_intersect_edge(id, edge) {
                    model.split_edge(edge, id)?;
                }
            }
            Ok(id)
        })
    }

    fn push_vertex(&mut self, point: Point3D) -> VertexId {
        let id = self.vertex_id(self.vertices.len());
        self.vertices.push(Vertex::new(point));
        tracing::debug!("Created vertex {} at {:?}", id, point);
        id
    }

    pub fn get_vertices(&mut self, points: &[Point3D]) -> TopoResult<Vec<VertexId>> {
        points.iter().map(|p| self.get_vertex(*p)).collect()
    }

    /// True when `vertex` lies on `edge` without being one of its endpoints
    pub fn vertex_intersect_edge(&self, vertex: VertexId, edge: EdgeId) -> bool {
        let (Some(v), Some(e)) = (self.vertex(vertex), self.edge(edge)) else {
            return false;
        };
        if e.v0 == vertex || e.v1 == vertex {
            return false;
        }
        let a = v.point.distance(self.point_of(e.v0));
        let b = v.point.distance(self.point_of(e.v1));
        (a + b - e.length).abs() < self.tolerance()
    }

    // ========== Edges ==========

    /// Edge joining `v0` and `v1` in either order
    pub fn find_existing_edge(&self, v0: VertexId, v1: VertexId) -> Option<EdgeId> {
        self.edges
            .iter()
            .position(|e| e.connects(v0, v1))
            .map(|index| self.edge_id(index))
    }

    /// Undirected edge between two vertices; `v0` is its origin if created here
    pub fn get_edge(&mut self, v0: VertexId, v1: VertexId) -> TopoResult<EdgeId> {
        self.ensure(v0)?;
        self.ensure(v1)?;
        if v0 == v1 {
            return Err(TopoError::DegenerateEdge(v0.index));
        }
        if let Some(existing) = self.find_existing_edge(v0, v1) {
            tracing::trace!("Reusing edge {} for {} -> {}", existing, v0, v1);
            return Ok(existing);
        }

        let id = self.edge_id(self.edges.len());
        self.edges.push(Edge::new(v0, v1));
        self.recalculate_edge(id);
        self.vertices[v0.idx()].core.link(id);
        self.vertices[v1.idx()].core.link(id);
        tracing::debug!("Created edge {} ({} -> {})", id, v0, v1);
        Ok(id)
    }

    /// Directed edge traversing from `v0` to `v1`
    pub fn get_directed_edge(&mut self, v0: VertexId, v1: VertexId) -> TopoResult<DirectedEdgeId> {
        if let Some(index) = self
            .directed_edges
            .iter()
            .position(|de| de.v0 == v0 && de.v1 == v1)
        {
            return Ok(self.directed_edge_id(index));
        }

        let edge = self.get_edge(v0, v1)?;
        let inverted = self.edges[edge.idx()].v0 != v0;
        let id = self.directed_edge_id(self.directed_edges.len());
        self.directed_edges.push(DirectedEdge::new(edge, inverted));
        self.recalculate_directed_edge(id);
        self.edges[edge.idx()].core.link(id);
        tracing::debug!("Created directed edge {} over {} (inverted: {})", id, edge, inverted);
        Ok(id)
    }

    // ========== Wires ==========

    /// Closed wire through `vertices`; the last vertex connects back to the first.
    ///
    /// Repeated consecutive vertices collapse into one. Existing vertices
    /// lying on a segment are threaded into the loop, and a wire whose
    /// directed edges are a rotation of the result is reused. A reversed loop
    /// is a different wire.
    pub fn get_wire(&mut self, vertices: &[VertexId]) -> TopoResult<WireId> {
        for v in vertices {
            self.ensure(*v)?;
        }
        let mut vertices = vertices.to_vec();
        vertices.dedup();
        while vertices.len() > 1 && vertices.first() == vertices.last() {
            vertices.pop();
        }
        match vertices.len() {
            0 => return Err(TopoError::EmptyWire),
            count @ 1..=2 => return Err(TopoError::NotClosed { count }),
            _ => {}
        }

        self.transaction("wire", |model| {
            let refined = model.refine_loop(&vertices)?;
            model.build_wire(&refined)
        })
    }

    /// Insert every existing vertex lying on each segment, nearest first.
    ///
    /// An inserted vertex is moved onto the segment exactly as a split would
    /// move it, so the result does not depend on which surface came first.
    fn refine_loop(&mut self, vertices: &[VertexId]) -> TopoResult<Vec<VertexId>> {
        let tolerance = self.tolerance();
        let mut refined = Vec::with_capacity(vertices.len());
        for (i, &a) in vertices.iter().enumerate() {
            let b = vertices[(i + 1) % vertices.len()];
            let (pa, pb) = (self.point_of(a), self.point_of(b));
            refined.push(a);

            let mut between: Vec<(f64, VertexId)> = self
                .vertices
                .iter()
                .enumerate()
                .map(|(index, v)| (self.vertex_id(index), v.point))
                .filter(|(id, p)| *id != a && *id != b && within_segment(*p, pa, pb, tolerance))
                .map(|(id, p)| (p.distance_squared(pa), id))
                .collect();
            between.sort_by(|x, y| x.0.total_cmp(&y.0));

            for (_, id) in between {
                let point = self.point_of(id);
                let projected = project_onto_line(point, pa, pb);
                let distance = point.distance(projected);
                if distance > tolerance {
                    return Err(TopoError::SplitProjection {
                        vertex: id.index,
                        distance,
                        tolerance,
                    });
                }
                if distance > EPSILON {
                    tracing::debug!("Moving vertex {} onto {} -> {} by {}", id, a, b, distance);
                    self.relocate_vertex(id, projected)?;
                }
                refined.push(id);
            }
        }
        Ok(refined)
    }

    fn build_wire(&mut self, vertices: &[VertexId]) -> TopoResult<WireId> {
        let mut directed_edges = Vec::with_capacity(vertices.len());
        for (i, &v0) in vertices.iter().enumerate() {
            let v1 = vertices[(i + 1) % vertices.len()];
            directed_edges.push(self.get_directed_edge(v0, v1)?);
        }

        if let Some(index) = self
            .wires
            .iter()
            .position(|w| find_offset(&w.directed_edges, &directed_edges).is_some())
        {
            let existing = self.wire_id(index);
            tracing::trace!("Reusing wire {}", existing);
            return Ok(existing);
        }

        let id = self.wire_id(self.wires.len());
        self.wires.push(Wire::new(directed_edges.clone()));
        self.validate_wire(id)?;
        self.recalculate_wire(id)?;
        for de in directed_edges {
            self.directed_edges[de.idx()].core.link(id);
        }
        tracing::debug!(
            "Created wire {} with {} directed edges",
            id,
            self.wires[id.idx()].len()
        );
        Ok(id)
    }

    // ========== Faces and shells ==========

    /// Face bounded by `outer` with `holes`.
    ///
    /// `Ok(None)` when a wire does not belong to this model. Holes must be
    /// wound against the outer wire and lie on its plane; containment inside
    /// the outer boundary is not checked.
    pub fn get_face(&mut self, outer: WireId, holes: &[WireId]) -> TopoResult<Option<FaceId>> {
        if !self.contains(outer) || holes.iter().any(|h| !self.contains(*h)) {
            return Ok(None);
        }
        if let Some(index) = self.faces.iter().position(|f| f.matches(outer, holes)) {
            let existing = self.face_id(index);
            tracing::trace!("Reusing face {}", existing);
            return Ok(Some(existing));
        }

        self.transaction("face", |model| {
            model.validate_holes(outer, holes)?;
            let id = model.face_id(model.faces.len());
            model.faces.push(Face::new(outer, holes.to_vec()));
            model.wires[outer.idx()].core.link(id);
            for hole in holes {
                model.wires[hole.idx()].core.link(id);
            }
            tracing::debug!("Created face {} with {} holes", id, holes.len());
            Ok(Some(id))
        })
    }

    fn validate_holes(&self, outer: WireId, holes: &[WireId]) -> TopoResult<()> {
        let plane = self.wires[outer.idx()].plane;
        for (hole, wire) in holes.iter().enumerate() {
            let dot = plane.normal.dot(self.wires[wire.idx()].outward_normal());
            if dot > -1.0 + EPSILON {
                return Err(TopoError::HoleWinding { hole, dot });
            }
            for (v, _) in self.wire_segments(*wire) {
                let distance = plane.signed_distance(self.point_of(v)).abs();
                if distance > EPSILON {
                    return Err(TopoError::HoleNotCoplanar { hole, distance });
                }
            }
        }
        Ok(())
    }

    /// Shell over a set of faces; `Ok(None)` when empty or a face is foreign
    pub fn get_shell(&mut self, faces: &[FaceId]) -> TopoResult<Option<ShellId>> {
        if faces.is_empty() || faces.iter().any(|f| !self.contains(*f)) {
            return Ok(None);
        }
        if let Some(index) = self.shells.iter().position(|s| s.matches(faces)) {
            return Ok(Some(self.shell_id(index)));
        }

        self.transaction("shell", |model| {
            let id = model.shell_id(model.shells.len());
            model.shells.push(Shell::new(faces.to_vec()));
            for face in faces {
                model.faces[face.idx()].core.link(id);
            }
            tracing::debug!("Created shell {} with {} faces", id, faces.len());
            Ok(Some(id))
        })
    }

    // ========== Reversal ==========

    /// Opposite orientation of an entity.
    ///
    /// Vertices and edges are undirected and come back unchanged. Directed
    /// edges, wires, faces and shells are reversed, reusing an existing
    /// entity when there is one. `Ok(None)` for a foreign handle.
    pub fn get_reverse(&mut self, id: impl Into<EntityId>) -> TopoResult<Option<EntityId>> {
        let id = id.into();
        if !self.contains(id) {
            return Ok(None);
        }
        let reversed = match id {
            EntityId::Vertex(_) | EntityId::Edge(_) => id,
            EntityId::DirectedEdge(de) => {
                let de = &self.directed_edges[de.idx()];
                let (v0, v1) = (de.v0, de.v1);
                self.get_directed_edge(v1, v0)?.into()
            }
            EntityId::Wire(wire) => self.reverse_wire(wire)?.into(),
            EntityId::Face(face) => {
                let face = &self.faces[face.idx()];
                let (outer, holes) = (face.outer, face.holes.clone());
                let outer = self.reverse_wire(outer)?;
                let holes = holes
                    .into_iter()
                    .map(|h| self.reverse_wire(h))
                    .collect::<TopoResult<Vec<_>>>()?;
                match self.get_face(outer, &holes)? {
                    Some(face) => face.into(),
                    None => return Ok(None),
                }
            }
            EntityId::Shell(shell) => {
                let faces = self.shells[shell.idx()].faces.clone();
                let mut reversed = Vec::with_capacity(faces.len());
                for face in faces {
                    match self.get_reverse(face)? {
                        Some(EntityId::Face(face)) => reversed.push(face),
                        _ => return Ok(None),
                    }
                }
                match self.get_shell(&reversed)? {
                    Some(shell) => shell.into(),
                    None => return Ok(None),
                }
            }
        };
        Ok(Some(reversed))
    }

    fn reverse_wire(&mut self, wire: WireId) -> TopoResult<WireId> {
        let mut vertices = self.wire_vertices(wire);
        vertices.reverse();
        self.get_wire(&vertices)
    }
}
