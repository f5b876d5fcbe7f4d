//! Configuration and error types for the `exactdedup` crate.

use hashes::HashFunc;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration for the exact-hash engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExactHashConfig {
    /// Content hash algorithm used to compare records.
    pub hash_func: HashFuncName,
    /// Shard size: records are partitioned into `ceil(N / batch_size)`
    /// contiguous shards.
    pub batch_size: usize,
}

/// Serializable stand-in for [`hashes::HashFunc`] (which has no `Serialize`
/// impl of its own, since it lives in a crate with no serde dependency).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HashFuncName {
    Md5,
    Sha256,
    Xxh3,
}

impl From<HashFuncName> for HashFunc {
    fn from(name: HashFuncName) -> Self {
        match name {
            HashFuncName::Md5 => HashFunc::Md5,
            HashFuncName::Sha256 => HashFunc::Sha256,
            HashFuncName::Xxh3 => HashFunc::Xxh3,
        }
    }
}

impl ExactHashConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hash_func(mut self, hash_func: HashFuncName) -> Self {
        self.hash_func = hash_func;
        self
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn validate(&self) -> Result<(), ExactHashError> {
        if self.batch_size < 1 {
            return Err(ExactHashError::InvalidBatchSize {
                batch_size: self.batch_size,
            });
        }
        Ok(())
    }

    /// Number of shards for a corpus of `n` records.
    pub fn num_shards(&self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        (n + self.batch_size - 1) / self.batch_size
    }
}

impl Default for ExactHashConfig {
    fn default() -> Self {
        Self {
            hash_func: HashFuncName::Xxh3,
            batch_size: 10_000,
        }
    }
}

/// Errors produced by the exact-hash engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExactHashError {
    #[error("invalid config: batch_size must be >= 1 (got {batch_size})")]
    InvalidBatchSize { batch_size: usize },
}
