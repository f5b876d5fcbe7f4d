//! Deterministic word tokenization and n-gram shingling.
//!
//! This crate turns raw document text into the set of overlapping word
//! n-grams ("shingles") that downstream hashing and MinHash stages consume.
//! Tokenization splits on any run of non-word characters, preserving case;
//! shingling then follows the min-length / below-n / sliding-window
//! branches described in [`shingles::shingle_set`].

mod config;
mod shingles;
mod token;

pub use config::{ShingleConfig, ShingleError};
pub use shingles::shingle_set;
pub use token::tokenize;

use std::collections::BTreeSet;

/// Tokenize and shingle a document in one step.
pub fn shingle_document(content: &str, cfg: &ShingleConfig) -> Result<BTreeSet<String>, ShingleError> {
    cfg.validate()?;
    let tokens = tokenize(content);
    let shingles = shingle_set(&tokens, cfg);
    tracing::trace!(
        tokens = tokens.len(),
        shingles = shingles.len(),
        "shingle: document tokenized"
    );
    Ok(shingles)
}
