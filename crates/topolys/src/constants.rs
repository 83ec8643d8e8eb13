//! Global constants for topolys

/// Default model tolerance: points closer than this are the same vertex
pub const DEFAULT_TOLERANCE: f64 = 0.01;

/// Tight epsilon for planarity and hole winding checks.
///
/// Much smaller than any sensible model tolerance; a wire whose vertices
/// drift off their plane by more than this is rejected.
pub const EPSILON: f64 = 1e-9;
