//! JSON surface lists and their conversion into model faces

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use topolys::{FaceId, Model, Point3D, WireId};

/// One planar building surface as read from the input file
#[derive(Debug, Clone, Deserialize)]
pub struct Surface {
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Outer boundary, one point per corner
    pub points: Vec<[f64; 3]>,
    /// Each hole wound against the outer boundary
    #[serde(default)]
    pub holes: Vec<Vec<[f64; 3]>>,
}

/// Boundary shared between the outer wires of two surfaces
#[derive(Debug, Clone, PartialEq)]
pub struct SharedBoundary {
    pub first: usize,
    pub second: usize,
    pub edges: usize,
    pub length: f64,
}

pub fn load_surfaces(path: &Path) -> Result<Vec<Surface>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Add a surface to the model and tag its face with `name` and `type`
pub fn add_surface(model: &mut Model, surface: &Surface) -> Result<FaceId> {
    let outer = add_loop(model, &surface.points)
        .with_context(|| format!("Outer boundary of surface '{}'", surface.name))?;
    let mut holes = Vec::with_capacity(surface.holes.len());
    for (i, hole) in surface.holes.iter().enumerate() {
        let wire = add_loop(model, hole)
            .with_context(|| format!("Hole {} of surface '{}'", i, surface.name))?;
        holes.push(wire);
    }

    let face = model
        .get_face(outer, &holes)
        .with_context(|| format!("Face of surface '{}'", surface.name))?
        .context("Surface wires are not part of the model")?;

    if let Some(attributes) = model.attributes_mut(face) {
        attributes.insert("name".into(), serde_json::json!(surface.name));
        attributes.insert("type".into(), serde_json::json!(surface.kind));
    }
    tracing::debug!("Surface '{}' is face {}", surface.name, face);
    Ok(face)
}

fn add_loop(model: &mut Model, points: &[[f64; 3]]) -> Result<WireId> {
    let points: Vec<Point3D> = points.iter().copied().map(Point3D::from).collect();
    let vertices = model.get_vertices(&points)?;
    Ok(model.get_wire(&vertices)?)
}

/// Every pair of faces whose outer wires share at least one edge
pub fn shared_boundaries(model: &Model, faces: &[FaceId]) -> Vec<SharedBoundary> {
    let mut shared = Vec::new();
    for (i, a) in faces.iter().enumerate() {
        for (j, b) in faces.iter().enumerate().skip(i + 1) {
            let edges = model.shared_outer_edges(*a, *b);
            if !edges.is_empty() {
                shared.push(SharedBoundary {
                    first: i,
                    second: j,
                    edges: edges.len(),
                    length: model.edges_length(&edges),
                });
            }
        }
    }
    shared
}
