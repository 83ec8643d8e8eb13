//! Face: a planar region with optional holes

use serde::{Deserialize, Serialize};

use super::{EntityCore, ShellId, WireId, impl_topology};

/// Outer wire plus hole wires wound the other way. Parents are shells.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Face {
    #[serde(flatten)]
    pub(crate) core: EntityCore<ShellId>,
    pub(crate) outer: WireId,
    #[serde(default)]
    pub(crate) holes: Vec<WireId>,
}

impl_topology!(Face, ShellId);

impl Face {
    pub(crate) fn new(outer: WireId, holes: Vec<WireId>) -> Self {
        Self {
            core: EntityCore::new(),
            outer,
            holes,
        }
    }

    pub fn outer(&self) -> WireId {
        self.outer
    }

    pub fn holes(&self) -> &[WireId] {
        &self.holes
    }

    /// Outer wire followed by the holes
    pub fn wires(&self) -> impl Iterator<Item = WireId> + '_ {
        std::iter::once(self.outer).chain(self.holes.iter().copied())
    }

    /// Same outer wire and same set of holes, in any order
    pub(crate) fn matches(&self, outer: WireId, holes: &[WireId]) -> bool {
        self.outer == outer
            && self.holes.len() == holes.len()
            && holes.iter().all(|h| self.holes.contains(h))
    }
}
