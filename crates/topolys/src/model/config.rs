//! Model configuration

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_TOLERANCE;
use crate::error::{TopoError, TopoResult};

/// Settings fixed when a model is created
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ModelConfig {
    /// Points closer than this (Euclidean) resolve to the same vertex.
    /// Cannot change once a model exists.
    pub tolerance: f64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl ModelConfig {
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn validate(&self) -> TopoResult<()> {
        if self.tolerance.is_finite() && self.tolerance > 0.0 {
            Ok(())
        } else {
            Err(TopoError::InvalidTolerance(self.tolerance))
        }
    }
}
