//! Configuration and error types for the `minhash` crate.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration for MinHash signature computation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MinhashConfig {
    /// Number of permutations (signature length `k`). Must be `>= 1`.
    pub num_perm: usize,
    /// Seed for the deterministic permutation table.
    pub seed: u64,
}

impl MinhashConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_num_perm(mut self, num_perm: usize) -> Self {
        self.num_perm = num_perm;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn validate(&self) -> Result<(), MinhashError> {
        if self.num_perm < 1 {
            return Err(MinhashError::InvalidNumPerm {
                num_perm: self.num_perm,
            });
        }
        Ok(())
    }
}

impl Default for MinhashConfig {
    fn default() -> Self {
        Self {
            num_perm: 128,
            seed: 42,
        }
    }
}

/// Errors produced by MinHash signature computation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MinhashError {
    #[error("invalid config: num_perm must be >= 1 (got {num_perm})")]
    InvalidNumPerm { num_perm: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = MinhashConfig::default();
        assert_eq!(cfg.num_perm, 128);
        assert_eq!(cfg.seed, 42);
    }

    #[test]
    fn validate_rejects_zero_num_perm() {
        let cfg = MinhashConfig::new().with_num_perm(0);
        assert!(cfg.validate().is_err());
    }
}
