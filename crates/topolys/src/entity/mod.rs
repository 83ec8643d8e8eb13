//! Topological entities
//!
//! Entities never reference each other directly. Every link is a typed
//! handle resolved through the owning [`Model`](crate::Model), and every
//! back-reference ("parent") is a typed handle of the next kind up:
//! vertex → edge → directed edge → wire → face → shell.

mod directed_edge;
mod edge;
mod face;
mod ids;
mod shell;
mod vertex;
mod wire;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use directed_edge::DirectedEdge;
pub use edge::Edge;
pub use face::Face;
pub use ids::{DirectedEdgeId, EdgeId, EntityId, FaceId, ShellId, VertexId, WireId};
pub use shell::Shell;
pub use vertex::Vertex;
pub use wire::{Wire, compute_plane, find_offset, is_closed, is_sequential};

/// Caller-defined key/value pairs. The kernel never interprets them.
pub type Attributes = BTreeMap<String, serde_json::Value>;

/// State shared by every entity: identity, attributes and parent links
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct EntityCore<P> {
    id: Uuid,
    #[serde(default)]
    attributes: Attributes,
    /// Rebuilt from child references on load
    #[serde(skip)]
    parents: Vec<P>,
}

impl<P: Copy + PartialEq> EntityCore<P> {
    pub(crate) fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            attributes: Attributes::new(),
            parents: Vec::new(),
        }
    }

    pub(crate) fn link(&mut self, parent: P) {
        if !self.parents.contains(&parent) {
            self.parents.push(parent);
        }
    }

    pub(crate) fn unlink(&mut self, parent: P) {
        self.parents.retain(|p| *p != parent);
    }
}

/// Read access common to all entities
pub trait Topology {
    /// Handle type of the entities that reference this one
    type Parent: Copy + PartialEq;

    fn core(&self) -> &EntityCore<Self::Parent>;

    fn core_mut(&mut self) -> &mut EntityCore<Self::Parent>;

    /// Process-unique identity, stable across serialization
    fn id(&self) -> Uuid {
        self.core().id
    }

    fn attributes(&self) -> &Attributes {
        &self.core().attributes
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.core_mut().attributes
    }

    /// Entities of the next kind up that reference this one, in link order
    fn parents(&self) -> &[Self::Parent] {
        &self.core().parents
    }
}

macro_rules! impl_topology {
    ($entity:ty, $parent:ty) => {
        impl $crate::entity::Topology for $entity {
            type Parent = $parent;

            fn core(&self) -> &$crate::entity::EntityCore<$parent> {
                &self.core
            }

            fn core_mut(&mut self) -> &mut $crate::entity::EntityCore<$parent> {
                &mut self.core
            }
        }
    };
}

pub(crate) use impl_topology;
