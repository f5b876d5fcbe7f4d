//! Deterministic MinHash signatures over Mersenne-prime universal hashing.
//!
//! Signatures are computed with the universal hash family
//! `h(x) = ((a * x + b) mod P) & 0xFFFFFFFF`, `P = 2^61 - 1`, so the same
//! seed and permutation count produce byte-identical signatures regardless
//! of thread count or call order. [`fingerprint`] is the single entry point
//! most callers need: it tokenizes, shingles, hashes, signs, and bands a
//! record in one pure call.

mod band;
mod config;
mod fingerprint;
mod permute;
mod signature;

pub use band::{band_keys, band_ranges};
pub use config::{MinhashConfig, MinhashError};
pub use fingerprint::{fingerprint, Fingerprint};
pub use permute::{PermutationTable, MASK32, MERSENNE_PRIME};
pub use signature::compute_signature;
