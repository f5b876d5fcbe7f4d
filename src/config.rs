//! YAML configuration loading for the dedup pipeline.
//!
//! Mirrors the host workspace's layered top-level config: one YAML document
//! holds the recognized external-interface options (`hash_func`, `column`,
//! `ngram`, `num_perm`, `threshold`, `batch_size`, `seed`) plus the internal
//! sub-configs each stage crate validates on its own.
//!
//! ## Example
//!
//! ```yaml
//! hash_func: xxh3
//! column: text
//! ngram: 5
//! num_perm: 128
//! threshold: 0.8
//! batch_size: 10000
//! seed: 42
//! ```

use std::fs;
use std::path::Path;

use exactdedup::HashFuncName;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading or validating a [`Config`].
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),
}

/// Recognized configuration options for the dedup pipeline (see the
/// external-interfaces contract: `hash_func`, `column`, `ngram`, `num_perm`,
/// `threshold`, `batch_size`, `seed`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Content hash algorithm for the exact engine.
    #[serde(default = "default_hash_func")]
    pub hash_func: HashFuncName,

    /// Name of the text field in the record source.
    #[serde(default = "default_column")]
    pub column: String,

    /// Shingle width in tokens.
    #[serde(default = "default_ngram")]
    pub ngram: usize,

    /// Number of MinHash permutations, `>= bands * rows`.
    #[serde(default = "default_num_perm")]
    pub num_perm: usize,

    /// Jaccard similarity threshold in `(0, 1)`.
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    /// Exact-engine shard size.
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Seed for the deterministic permutation table.
    #[serde(default = "default_seed")]
    pub seed: u64,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hash_func(mut self, hash_func: HashFuncName) -> Self {
        self.hash_func = hash_func;
        self
    }

    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.column = column.into();
        self
    }

    pub fn with_ngram(mut self, ngram: usize) -> Self {
        self.ngram = ngram;
        self
    }

    pub fn with_num_perm(mut self, num_perm: usize) -> Self {
        self.num_perm = num_perm;
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Validate the recognized options.
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.column.trim().is_empty() {
            return Err(ConfigLoadError::Validation(
                "column must be non-empty".to_string(),
            ));
        }
        if self.ngram < 1 {
            return Err(ConfigLoadError::Validation(
                "ngram must be >= 1".to_string(),
            ));
        }
        if self.num_perm < 1 {
            return Err(ConfigLoadError::Validation(
                "num_perm must be >= 1".to_string(),
            ));
        }
        if !(self.threshold > 0.0 && self.threshold < 1.0) {
            return Err(ConfigLoadError::Validation(
                "threshold must be in (0, 1)".to_string(),
            ));
        }
        if self.batch_size < 1 {
            return Err(ConfigLoadError::Validation(
                "batch_size must be >= 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Load and validate configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: Config = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hash_func: default_hash_func(),
            column: default_column(),
            ngram: default_ngram(),
            num_perm: default_num_perm(),
            threshold: default_threshold(),
            batch_size: default_batch_size(),
            seed: default_seed(),
        }
    }
}

fn default_hash_func() -> HashFuncName {
    HashFuncName::Xxh3
}
fn default_column() -> String {
    "text".to_string()
}
fn default_ngram() -> usize {
    5
}
fn default_num_perm() -> usize {
    128
}
fn default_threshold() -> f64 {
    0.8
}
fn default_batch_size() -> usize {
    10_000
}
fn default_seed() -> u64 {
    42
}
