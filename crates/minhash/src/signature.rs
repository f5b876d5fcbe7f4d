//! Signature computation over a permutation table.

use crate::permute::{PermutationTable, MASK32, MERSENNE_PRIME};

/// Compute a MinHash signature for a set of 32-bit shingle hashes.
///
/// Each permutation slot starts at [`MASK32`] (the all-ones sentinel for an
/// empty input) and is reduced to the elementwise minimum of
/// `((h * a + b) mod P) & 0xFFFFFFFF` over every shingle hash `h`. An empty
/// `shingle_hashes` leaves the signature all-ones, matching the contract
/// that empty records still produce a valid, indexable signature.
pub fn compute_signature(shingle_hashes: &[u32], table: &PermutationTable) -> Vec<u32> {
    let k = table.len();
    let mut sig = vec![MASK32 as u32; k];

    for &h in shingle_hashes {
        let h = h as u128;
        for i in 0..k {
            // `h * a` can reach ~2^93, far past u64; reduce in u128 so the
            // wide product is never silently truncated before the `mod P`.
            let v = (h * table.a[i] as u128 + table.b[i] as u128) % MERSENNE_PRIME as u128;
            let v = (v as u64 & MASK32) as u32;
            if v < sig[i] {
                sig[i] = v;
            }
        }
    }

    sig
}
