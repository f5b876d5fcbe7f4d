//! Configuration and error types for the `lsh` crate.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration for the LSH parameter oracle and banding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LshConfig {
    /// Similarity threshold `t ∈ (0, 1)`.
    pub threshold: f64,
    /// False-positive weight in the oracle's objective (default 0.5).
    pub false_positive_weight: f64,
    /// False-negative weight in the oracle's objective (default 0.5).
    pub false_negative_weight: f64,
}

impl LshConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_false_positive_weight(mut self, weight: f64) -> Self {
        self.false_positive_weight = weight;
        self
    }

    pub fn with_false_negative_weight(mut self, weight: f64) -> Self {
        self.false_negative_weight = weight;
        self
    }

    pub fn validate(&self) -> Result<(), LshError> {
        if !(self.threshold > 0.0 && self.threshold < 1.0) {
            return Err(LshError::InvalidThreshold {
                threshold: self.threshold,
            });
        }
        Ok(())
    }
}

impl Default for LshConfig {
    fn default() -> Self {
        Self {
            threshold: 0.8,
            false_positive_weight: 0.5,
            false_negative_weight: 0.5,
        }
    }
}

/// Errors produced by the LSH stage.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LshError {
    #[error("invalid config: threshold must be in (0, 1) (got {threshold})")]
    InvalidThreshold { threshold: f64 },
    #[error("invalid config: num_perm must be >= 1 (got {num_perm})")]
    InvalidNumPerm { num_perm: usize },
}
