//! Error types for topology construction

use thiserror::Error;

/// Error type for topology operations
#[derive(Debug, Clone, Error)]
pub enum TopoError {
    #[error("Handle {0} does not belong to this model")]
    ForeignHandle(String),

    #[error("Invalid tolerance: {0} (must be finite and positive)")]
    InvalidTolerance(f64),

    #[error("Degenerate edge: both endpoints are vertex {0}")]
    DegenerateEdge(u32),

    #[error("Wire has no directed edges")]
    EmptyWire,

    #[error("Wire is not sequential at directed edge {index}")]
    NotSequential { index: usize },

    #[error("Wire is not closed ({count} directed edges)")]
    NotClosed { count: usize },

    #[error("Wire normal is degenerate (all directed edges are collinear)")]
    DegenerateNormal,

    #[error("Wire is not planar: vertex {index} is {distance} off the wire plane")]
    NotPlanar { index: usize, distance: f64 },

    #[error("Hole {hole} is not wound against the outer wire (normal dot {dot})")]
    HoleWinding { hole: usize, dot: f64 },

    #[error("Hole {hole} is not coplanar with the outer wire ({distance} off plane)")]
    HoleNotCoplanar { hole: usize, distance: f64 },

    #[error(
        "Split projection moved vertex {vertex} by {distance}, beyond tolerance {tolerance}"
    )]
    SplitProjection {
        vertex: u32,
        distance: f64,
        tolerance: f64,
    },

    #[error("Split left wire {wire} inconsistent: {reason}")]
    SplitInconsistent { wire: u32, reason: String },

    #[error("Serialization failed: {0}")]
    Serialization(String),
}

/// Result type for topology operations
pub type TopoResult<T> = Result<T, TopoError>;
