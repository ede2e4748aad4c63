//! Multiplication options and configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PARALLEL_THRESHOLD, DEFAULT_TOLERANCE};

/// Options for Strassen multiplication and cross-validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Padded side length at or above which the seven sub-products run in parallel.
    pub parallel_threshold: usize,
    /// Relative tolerance used when comparing results from different strategies.
    pub tolerance: f64,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl Options {
    /// Normalize options, applying defaults where values are zero or invalid.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.parallel_threshold == 0 {
            self.parallel_threshold = DEFAULT_PARALLEL_THRESHOLD;
        }
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            self.tolerance = DEFAULT_TOLERANCE;
        }
        self
    }
}
