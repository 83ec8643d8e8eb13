//! Shared fixtures for integration tests

#![allow(dead_code)]

use topolys::{FaceId, Model, Point3D, Vector3D, VertexId, WireId};

/// Rectangle in the z = 0 plane, wound clockwise seen from +z
pub fn make_rectangle(width: f64, height: f64) -> Vec<Point3D> {
    vec![
        Point3D::new(0.0, height, 0.0),
        Point3D::new(width, height, 0.0),
        Point3D::new(width, 0.0, 0.0),
        Point3D::new(0.0, 0.0, 0.0),
    ]
}

pub fn move_points(points: &[Point3D], offset: Vector3D) -> Vec<Point3D> {
    points.iter().map(|p| *p + offset).collect()
}

pub fn p(x: f64, y: f64, z: f64) -> Point3D {
    Point3D::new(x, y, z)
}

pub fn vertices(model: &mut Model, points: &[Point3D]) -> Vec<VertexId> {
    model.get_vertices(points).expect("vertices")
}

pub fn wire(model: &mut Model, points: &[Point3D]) -> WireId {
    let vs = vertices(model, points);
    model.get_wire(&vs).expect("wire")
}

/// Wire over the points in reverse order, for holes wound against an outer
pub fn reversed_wire(model: &mut Model, points: &[Point3D]) -> WireId {
    let mut vs = vertices(model, points);
    vs.reverse();
    model.get_wire(&vs).expect("wire")
}

pub fn face(model: &mut Model, points: &[Point3D]) -> (WireId, FaceId) {
    let w = wire(model, points);
    let f = model.get_face(w, &[]).expect("face").expect("registered wire");
    (w, f)
}

pub fn wire_len(model: &Model, wire: WireId) -> usize {
    model.wire(wire).expect("wire").len()
}
