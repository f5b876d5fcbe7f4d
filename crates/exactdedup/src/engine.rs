//! Sharded, concurrent exact-hash deduplication.

use dashmap::DashMap;
use hashes::{digest, HashFunc};
use rayon::prelude::*;

use crate::config::ExactHashConfig;

/// Deduplicate `contents` by exact content hash.
///
/// Returns a drop-bitmap of length `contents.len()`: `flags[i] == true` means
/// record `i` is a duplicate of an earlier record and should be dropped;
/// `false` means it is the first occurrence of its digest and is kept.
///
/// Digest computation runs in parallel over shards (embarrassingly
/// parallel, pure per record); the check-and-insert against the shared
/// `seen` set then runs as a single sequential pass in ascending id order,
/// which is what guarantees that the *lowest* id of each digest is always
/// the one kept, independent of how many threads compute digests or in
/// what order shards finish.
pub fn exact_dedup(contents: &[String], cfg: &ExactHashConfig, hash_func: HashFunc) -> Vec<bool> {
    let shards = cfg.num_shards(contents.len());
    tracing::debug!(
        records = contents.len(),
        shards,
        hash_func = ?hash_func,
        "exact dedup: digesting shard"
    );

    let digests: Vec<Vec<u8>> = contents
        .par_iter()
        .map(|content| digest(hash_func, content))
        .collect();

    let seen: DashMap<Vec<u8>, usize> = DashMap::new();
    let mut flags = vec![false; contents.len()];

    for (idx, d) in digests.into_iter().enumerate() {
        if seen.contains_key(&d) {
            flags[idx] = true;
        } else {
            seen.insert(d, idx);
            flags[idx] = false;
        }
    }

    let duplicates = flags.iter().filter(|&&f| f).count();
    tracing::info!(
        records = contents.len(),
        unique = seen.len(),
        duplicates,
        "exact dedup: shard complete"
    );

    flags
}

/// Indices of the kept (non-duplicate) records, in ascending order.
pub fn kept_indices(flags: &[bool]) -> Vec<usize> {
    flags
        .iter()
        .enumerate()
        .filter(|(_, &dropped)| !dropped)
        .map(|(idx, _)| idx)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strs(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn first_occurrence_is_kept() {
        let contents = strs(&["hello", "hello", "world"]);
        let cfg = ExactHashConfig::default();
        let flags = exact_dedup(&contents, &cfg, HashFunc::Xxh3);
        assert_eq!(flags, vec![false, true, false]);
    }

    #[test]
    fn all_unique_keeps_everything() {
        let contents = strs(&["a", "b", "c"]);
        let cfg = ExactHashConfig::default();
        let flags = exact_dedup(&contents, &cfg, HashFunc::Md5);
        assert_eq!(flags, vec![false, false, false]);
    }

    #[test]
    fn all_identical_keeps_only_first() {
        let contents = strs(&["same", "same", "same", "same"]);
        let cfg = ExactHashConfig::default();
        let flags = exact_dedup(&contents, &cfg, HashFunc::Sha256);
        assert_eq!(flags, vec![false, true, true, true]);
    }

    #[test]
    fn empty_corpus_yields_empty_flags() {
        let contents: Vec<String> = vec![];
        let cfg = ExactHashConfig::default();
        assert!(exact_dedup(&contents, &cfg, HashFunc::Xxh3).is_empty());
    }

    #[test]
    fn kept_indices_matches_false_flags() {
        let flags = vec![false, true, false, true, false];
        assert_eq!(kept_indices(&flags), vec![0, 2, 4]);
    }

    #[test]
    fn small_batch_size_still_dedups_across_shards() {
        let contents = strs(&["x", "y", "x", "z", "x"]);
        let cfg = ExactHashConfig::new().with_batch_size(2);
        let flags = exact_dedup(&contents, &cfg, HashFunc::Xxh3);
        assert_eq!(flags, vec![false, false, true, false, true]);
    }
}
