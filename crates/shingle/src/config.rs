//! Configuration and error types for the `shingle` crate.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration for tokenization and n-gram shingling.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShingleConfig {
    /// Shingle width in tokens (the `n` in n-gram). Must be `>= 1`.
    pub n: usize,
    /// Minimum token-stream length below which shingling yields nothing.
    ///
    /// Matches the `min_length` guard of the original `ngrams()` helper: a
    /// token stream shorter than this is treated as having no meaningful
    /// content to shingle at all, independent of `n`.
    pub min_length: usize,
}

impl ShingleConfig {
    /// Create a new configuration with sensible defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the shingle width (`n`).
    pub fn with_n(mut self, n: usize) -> Self {
        self.n = n;
        self
    }

    /// Set the minimum-length guard.
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ShingleError> {
        if self.n < 1 {
            return Err(ShingleError::InvalidN { n: self.n });
        }
        Ok(())
    }
}

impl Default for ShingleConfig {
    fn default() -> Self {
        Self {
            n: 5,
            min_length: 5,
        }
    }
}

/// Errors produced by the shingling pipeline.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShingleError {
    #[error("invalid config: n must be >= 1 (got {n})")]
    InvalidN { n: usize },
}
