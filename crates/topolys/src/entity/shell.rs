//! Shell: a set of faces

use std::convert::Infallible;

use serde::{Deserialize, Serialize};

use super::{EntityCore, FaceId, impl_topology};

/// Unordered collection of faces. Nothing references a shell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shell {
    #[serde(flatten)]
    pub(crate) core: EntityCore<Infallible>,
    pub(crate) faces: Vec<FaceId>,
}

impl_topology!(Shell, Infallible);

impl Shell {
    pub(crate) fn new(faces: Vec<FaceId>) -> Self {
        Self {
            core: EntityCore::new(),
            faces,
        }
    }

    pub fn faces(&self) -> &[FaceId] {
        &self.faces
    }

    pub(crate) fn matches(&self, faces: &[FaceId]) -> bool {
        self.faces.len() == faces.len() && faces.iter().all(|f| self.faces.contains(f))
    }
}
