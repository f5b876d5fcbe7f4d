//! Sharded, concurrent exact-content-hash deduplication.
//!
//! Records are hashed in parallel and then checked against a shared `seen`
//! set in ascending id order, so the first occurrence of every distinct
//! digest is always the one kept — deterministically, regardless of thread
//! count.

mod config;
mod engine;

pub use config::{ExactHashConfig, ExactHashError, HashFuncName};
pub use engine::{exact_dedup, kept_indices};
