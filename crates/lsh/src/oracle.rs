//! LSH parameter oracle: choose `(b, r)` minimizing weighted false-positive
//! and false-negative probability under `b * r <= k`.

use crate::config::{LshConfig, LshError};
use crate::quad::integrate;

const INTEGRATION_EPS: f64 = 1e-7;

fn false_positive_probability(threshold: f64, b: u32, r: u32) -> f64 {
    let proba = |s: f64| 1.0 - (1.0 - s.powi(r as i32)).powi(b as i32);
    integrate(proba, 0.0, threshold, INTEGRATION_EPS)
}

fn false_negative_probability(threshold: f64, b: u32, r: u32) -> f64 {
    let proba = |s: f64| (1.0 - s.powi(r as i32)).powi(b as i32);
    integrate(proba, threshold, 1.0, INTEGRATION_EPS)
}

/// Enumerate `b ∈ [1, k]`, `r ∈ [1, ⌊k/b⌋]` and return the `(b, r)` pair
/// minimizing `wFP * FP(t, b, r) + wFN * FN(t, b, r)`. Ties keep whichever
/// candidate was scanned first, which is the lowest `b` (and, for a fixed
/// `b`, the lowest `r`).
pub fn optimal_param(cfg: &LshConfig, num_perm: usize) -> Result<(u32, u32), LshError> {
    cfg.validate()?;
    if num_perm < 1 {
        return Err(LshError::InvalidNumPerm { num_perm });
    }

    let k = num_perm as u32;
    let mut min_error = f64::INFINITY;
    let mut best = (1u32, 1u32);

    for b in 1..=k {
        let max_r = k / b;
        for r in 1..=max_r {
            let fp = false_positive_probability(cfg.threshold, b, r);
            let fn_ = false_negative_probability(cfg.threshold, b, r);
            let error = fp * cfg.false_positive_weight + fn_ * cfg.false_negative_weight;
            if error < min_error {
                min_error = error;
                best = (b, r);
            }
        }
    }

    tracing::info!(
        threshold = cfg.threshold,
        num_perm,
        bands = best.0,
        rows = best.1,
        error = min_error,
        "lsh: parameter oracle selected (b, r)"
    );

    Ok(best)
}
