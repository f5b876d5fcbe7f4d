//! The external-facing record source and sink contracts.

use crate::error::DedupError;

/// Yields a finite sequence of `(idx, content)` pairs, `idx` dense over
/// `[0, N)`. The Load stage is the only place a `DedupError::Resource` can
/// originate from outside the core.
pub trait RecordSource {
    fn records(&mut self) -> Result<Vec<(usize, String)>, DedupError>;
}

/// Persists the kept subset of records. The driver always calls this with
/// ascending kept ids, matching the filter stage's order-preserving
/// contract.
pub trait RecordSink {
    fn save(&mut self, kept_ids: &[usize]) -> Result<(), DedupError>;
}

/// A plain in-memory source over already-materialized content.
impl RecordSource for Vec<String> {
    fn records(&mut self) -> Result<Vec<(usize, String)>, DedupError> {
        Ok(self.iter().cloned().enumerate().collect())
    }
}

/// A plain in-memory sink that just records which ids were kept.
impl RecordSink for Vec<usize> {
    fn save(&mut self, kept_ids: &[usize]) -> Result<(), DedupError> {
        self.clear();
        self.extend_from_slice(kept_ids);
        Ok(())
    }
}
