//! End-to-end per-record MinHash fingerprinting.

use hashes::sha1_hash32;
use shingle::{shingle_set, tokenize, ShingleConfig};

use crate::band::band_keys;
use crate::permute::PermutationTable;
use crate::signature::compute_signature;

/// The result of fingerprinting a single record: its dense index, full
/// MinHash signature, and the per-band keys derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fingerprint {
    pub idx: usize,
    pub signature: Vec<u32>,
    pub band_keys: Vec<Vec<u8>>,
}

/// Fingerprint a single record.
///
/// This is a pure function of its inputs: tokenize, shingle, hash each
/// shingle to a 32-bit integer, compute the MinHash signature against
/// `table`, and slice it into band keys per `ranges`. It never fails —
/// fingerprinting has no external dependency to fail on, per the pipeline's
/// failure semantics.
pub fn fingerprint(
    idx: usize,
    content: &str,
    shingle_cfg: &ShingleConfig,
    table: &PermutationTable,
    ranges: &[(usize, usize)],
) -> Fingerprint {
    let tokens = tokenize(content);
    let shingles = shingle_set(&tokens, shingle_cfg);
    let shingle_hashes: Vec<u32> = shingles.iter().map(|s| sha1_hash32(s)).collect();

    let signature = compute_signature(&shingle_hashes, table);
    let keys = band_keys(&signature, ranges);

    tracing::trace!(
        idx,
        shingles = shingle_hashes.len(),
        bands = keys.len(),
        "minhash: record fingerprinted"
    );

    Fingerprint {
        idx,
        signature,
        band_keys: keys,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::band::band_ranges;

    #[test]
    fn fingerprint_is_deterministic() {
        let cfg = ShingleConfig::new().with_n(2).with_min_length(1);
        let table = PermutationTable::generate(42, 16);
        let ranges = band_ranges(4, 4);

        let f1 = fingerprint(0, "the quick brown fox", &cfg, &table, &ranges);
        let f2 = fingerprint(0, "the quick brown fox", &cfg, &table, &ranges);
        assert_eq!(f1, f2);
    }

    #[test]
    fn identical_content_yields_identical_band_keys_in_every_band() {
        let cfg = ShingleConfig::new().with_n(2).with_min_length(1);
        let table = PermutationTable::generate(42, 16);
        let ranges = band_ranges(4, 4);

        let f1 = fingerprint(0, "the quick brown fox jumps", &cfg, &table, &ranges);
        let f2 = fingerprint(1, "the quick brown fox jumps", &cfg, &table, &ranges);
        assert_eq!(f1.band_keys, f2.band_keys);
    }

    #[test]
    fn empty_content_is_still_fingerprinted() {
        let cfg = ShingleConfig::new().with_n(2).with_min_length(1);
        let table = PermutationTable::generate(42, 8);
        let ranges = band_ranges(2, 4);

        let f = fingerprint(0, "", &cfg, &table, &ranges);
        assert!(f.signature.iter().all(|&v| v == u32::MAX));
        assert_eq!(f.band_keys.len(), 2);
    }

    #[test]
    fn preserves_idx() {
        let cfg = ShingleConfig::default();
        let table = PermutationTable::generate(1, 4);
        let ranges = band_ranges(1, 4);
        let f = fingerprint(7, "some content here", &cfg, &table, &ranges);
        assert_eq!(f.idx, 7);
    }
}
