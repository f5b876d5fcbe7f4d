//! Band-key encoding for LSH banding.

/// Slice `signature` into the windows described by `ranges` and encode each
/// window as a big-endian byte concatenation of its entries. `ranges` is the
/// `[(0, r), (r, 2r), ...]` partition schedule of length `b` produced by the
/// LSH parameter oracle.
pub fn band_keys(signature: &[u32], ranges: &[(usize, usize)]) -> Vec<Vec<u8>> {
    ranges
        .iter()
        .map(|&(start, end)| {
            let mut key = Vec::with_capacity((end - start) * 4);
            for &v in &signature[start..end] {
                key.extend_from_slice(&v.to_be_bytes());
            }
            key
        })
        .collect()
}

/// Build the `[(0, r), (r, 2r), ...]` partition schedule of length `bands`
/// for a signature of `bands * rows` entries.
pub fn band_ranges(bands: usize, rows: usize) -> Vec<(usize, usize)> {
    (0..bands).map(|i| (i * rows, (i + 1) * rows)).collect()
}
