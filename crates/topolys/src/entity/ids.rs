//! Typed handles into a model's entity arenas

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! entity_handle {
    ($(#[$doc:meta])* $name:ident, $variant:ident, $tag:literal) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
        )]
        pub struct $name {
            /// ID of the model this handle belongs to
            pub model_id: Uuid,
            /// Index of the entity within the model's arena
            pub index: u32,
        }

        impl $name {
            pub(crate) fn new(model_id: Uuid, index: usize) -> Self {
                Self {
                    model_id,
                    index: index as u32,
                }
            }

            pub(crate) fn idx(self) -> usize {
                self.index as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($tag, "{}"), self.index)
            }
        }

        impl From<$name> for EntityId {
            fn from(id: $name) -> Self {
                EntityId::$variant(id)
            }
        }
    };
}

entity_handle!(
    /// Handle to a vertex
    VertexId,
    Vertex,
    "v"
);
entity_handle!(
    /// Handle to an undirected edge
    EdgeId,
    Edge,
    "e"
);
entity_handle!(
    /// Handle to a directed edge
    DirectedEdgeId,
    DirectedEdge,
    "de"
);
entity_handle!(
    /// Handle to a wire
    WireId,
    Wire,
    "w"
);
entity_handle!(
    /// Handle to a face
    FaceId,
    Face,
    "f"
);
entity_handle!(
    /// Handle to a shell
    ShellId,
    Shell,
    "s"
);

/// Handle to any kind of entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityId {
    Vertex(VertexId),
    Edge(EdgeId),
    DirectedEdge(DirectedEdgeId),
    Wire(WireId),
    Face(FaceId),
    Shell(ShellId),
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityId::Vertex(id) => write!(f, "{id}"),
            EntityId::Edge(id) => write!(f, "{id}"),
            EntityId::DirectedEdge(id) => write!(f, "{id}"),
            EntityId::Wire(id) => write!(f, "{id}"),
            EntityId::Face(id) => write!(f, "{id}"),
            EntityId::Shell(id) => write!(f, "{id}"),
        }
    }
}
