//! N-gram shingle-set construction.
//!
//! Mirrors the three-way branch of the original `ngrams()` helper exactly:
//! a token stream shorter than `min_length` produces no shingles at all, one
//! shorter than `n` (but at or above `min_length`) collapses to a single
//! whole-sequence shingle, and anything longer is split into every
//! overlapping window of width `n`.

use std::collections::BTreeSet;

use crate::config::ShingleConfig;

/// Build the deduplicated set of shingles for a token stream.
///
/// Shingles are returned as space-joined strings, matching the `" ".join(..)`
/// convention of the source this behavior was distilled from. A `BTreeSet`
/// is used so iteration order is stable and deterministic across runs.
pub fn shingle_set(tokens: &[String], cfg: &ShingleConfig) -> BTreeSet<String> {
    let mut out = BTreeSet::new();

    if tokens.len() < cfg.min_length {
        return out;
    }

    if tokens.len() < cfg.n {
        out.insert(tokens.join(" "));
        return out;
    }

    for window in tokens.windows(cfg.n) {
        out.insert(window.join(" "));
    }
    out
}
