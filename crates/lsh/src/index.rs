//! Banded LSH index: bucket records by band key, then cluster collisions.

use std::collections::HashMap;

use crate::unionfind::UnionFind;

/// Bucket every record into its per-band hash tables, then union every
/// bucket of size `>= 2` around its minimum id. `band_keys[i]` is the id's
/// key for band `i`; every fingerprint must carry the same number of bands.
///
/// Returns a [`UnionFind`] over `[0, n)` where `find(id) == id` iff `id` is
/// the kept representative of its cluster.
pub fn cluster(n: usize, band_keys: impl Fn(usize) -> Vec<Vec<u8>>) -> UnionFind {
    let mut uf = UnionFind::new(n);
    if n == 0 {
        return uf;
    }

    let num_bands = band_keys(0).len();

    for band in 0..num_bands {
        let mut buckets: HashMap<Vec<u8>, Vec<usize>> = HashMap::new();
        for id in 0..n {
            let key = band_keys(id)[band].clone();
            buckets.entry(key).or_default().push(id);
        }

        let colliding = buckets.values().filter(|b| b.len() >= 2).count();
        tracing::debug!(band, buckets = buckets.len(), colliding, "lsh: band indexed");

        for bucket in buckets.values() {
            if bucket.len() < 2 {
                continue;
            }
            let root = *bucket.iter().min().expect("non-empty bucket");
            for &id in bucket {
                if id != root {
                    uf.union(id, root);
                }
            }
        }
    }

    let clusters = (0..n).filter(|&id| uf.find(id) == id).count();
    tracing::info!(records = n, clusters, "lsh: clustering complete");

    uf
}

/// The kept ids after clustering: every `id` with `uf.find(id) == id`, in
/// ascending order.
pub fn kept_ids(uf: &mut UnionFind) -> Vec<usize> {
    (0..uf.len()).filter(|&id| uf.find(id) == id).collect()
}
