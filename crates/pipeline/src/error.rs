//! The umbrella error type for the dedup pipeline.

use exactdedup::ExactHashError;
use lsh::LshError;
use minhash::MinhashError;
use shingle::ShingleError;
use thiserror::Error;

/// Errors that can occur while running a dedup pipeline end-to-end.
///
/// `Config`, `Input`, `Resource`, and `Internal` are the four kinds a
/// pipeline can surface (§7). Every stage crate's own error converges on one
/// of them via `#[from]`, preserving the `source()` chain back to the
/// originating stage error rather than flattening it to a string.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DedupError {
    /// Invalid top-level configuration that doesn't map to a single stage
    /// crate's own error type (e.g. a cross-field check in the umbrella
    /// `Config`), caught before any stage runs.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Invalid shingling configuration, caught before any stage runs.
    #[error("invalid shingle configuration: {0}")]
    Shingle(#[from] ShingleError),

    /// Invalid MinHash configuration, caught before any stage runs.
    #[error("invalid minhash configuration: {0}")]
    Minhash(#[from] MinhashError),

    /// Invalid LSH configuration, caught before any stage runs.
    #[error("invalid lsh configuration: {0}")]
    Lsh(#[from] LshError),

    /// Invalid exact-hash configuration, caught before any stage runs.
    #[error("invalid exact-hash configuration: {0}")]
    ExactHash(#[from] ExactHashError),

    /// A record's input field was missing or malformed.
    ///
    /// Carries the offending record's `idx` so the pipeline halts with a
    /// precise pointer into the source.
    #[error("invalid input at record {idx}: {message}")]
    Input { idx: usize, message: String },

    /// The external record source or sink failed (worker pool could not
    /// start, I/O failed, and so on).
    #[error("resource failure: {0}")]
    Resource(String),

    /// An internal invariant was violated. Should never occur.
    #[error("internal invariant violated: {0}")]
    Internal(String),
}
