//! Stage drivers for the exact and fuzzy dedup pipelines.
//!
//! Both drivers follow the same shape: **Load** (external) → per-record
//! work (parallel, pure) → clustering/check (sequential) → **Filter**
//! (parallel) → **Save** (external). Each stage's wall-clock duration and
//! before/after counts are captured in a [`StageReport`] and forwarded to
//! the installed [`PipelineMetrics`] recorder, if any.

use std::time::Instant;

use exactdedup::{exact_dedup, kept_indices, ExactHashConfig};
use hashes::HashFunc;
use lsh::{cluster, kept_ids as lsh_kept_ids, LshConfig};
use minhash::{band_ranges, fingerprint, MinhashConfig, PermutationTable};
use rayon::prelude::*;
use shingle::ShingleConfig;

use crate::error::DedupError;
use crate::metrics::{emit, StageReport};
use crate::traits::{RecordSink, RecordSource};

/// Run the exact-hash dedup pipeline end-to-end.
pub fn run_exact_pipeline(
    source: &mut dyn RecordSource,
    sink: &mut dyn RecordSink,
    cfg: &ExactHashConfig,
    hash_func: HashFunc,
) -> Result<Vec<StageReport>, DedupError> {
    cfg.validate()?;
    let mut reports = Vec::new();

    let t0 = Instant::now();
    let records = source.records()?;
    let n = records.len();
    reports.push(emit(StageReport::new("load", t0.elapsed(), n, n)));

    let contents: Vec<String> = records.into_iter().map(|(_, content)| content).collect();

    let t1 = Instant::now();
    let flags = exact_dedup(&contents, cfg, hash_func);
    let kept = kept_indices(&flags);
    reports.push(emit(StageReport::new(
        "digest",
        t1.elapsed(),
        n,
        kept.len(),
    )));

    let t2 = Instant::now();
    reports.push(emit(StageReport::new(
        "filter",
        t2.elapsed(),
        n,
        kept.len(),
    )));

    let t3 = Instant::now();
    sink.save(&kept)?;
    reports.push(emit(StageReport::new(
        "save",
        t3.elapsed(),
        kept.len(),
        kept.len(),
    )));

    Ok(reports)
}

/// Run the MinHash-LSH fuzzy dedup pipeline end-to-end.
pub fn run_fuzzy_pipeline(
    source: &mut dyn RecordSource,
    sink: &mut dyn RecordSink,
    shingle_cfg: &ShingleConfig,
    minhash_cfg: &MinhashConfig,
    lsh_cfg: &LshConfig,
) -> Result<Vec<StageReport>, DedupError> {
    shingle_cfg.validate()?;
    minhash_cfg.validate()?;
    lsh_cfg.validate()?;

    let mut reports = Vec::new();

    let t0 = Instant::now();
    let records = source.records()?;
    let n = records.len();
    reports.push(emit(StageReport::new("load", t0.elapsed(), n, n)));

    let (bands, rows) = lsh::optimal_param(lsh_cfg, minhash_cfg.num_perm)?;
    let ranges = band_ranges(bands as usize, rows as usize);
    let table = PermutationTable::generate(minhash_cfg.seed, minhash_cfg.num_perm);

    let t1 = Instant::now();
    let fingerprints: Vec<_> = records
        .into_par_iter()
        .map(|(idx, content)| fingerprint(idx, &content, shingle_cfg, &table, &ranges))
        .collect();
    reports.push(emit(StageReport::new(
        "fingerprint",
        t1.elapsed(),
        n,
        n,
    )));

    let t2 = Instant::now();
    let mut uf = cluster(n, |id| fingerprints[id].band_keys.clone());
    let kept = lsh_kept_ids(&mut uf);
    reports.push(emit(StageReport::new(
        "cluster",
        t2.elapsed(),
        n,
        kept.len(),
    )));

    let t3 = Instant::now();
    reports.push(emit(StageReport::new(
        "filter",
        t3.elapsed(),
        n,
        kept.len(),
    )));

    let t4 = Instant::now();
    sink.save(&kept)?;
    reports.push(emit(StageReport::new(
        "save",
        t4.elapsed(),
        kept.len(),
        kept.len(),
    )));

    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_pipeline_keeps_first_occurrence() {
        let mut source: Vec<String> =
            vec!["hello".into(), "hello".into(), "world".into()];
        let mut sink: Vec<usize> = Vec::new();
        let cfg = ExactHashConfig::default();

        let reports = run_exact_pipeline(&mut source, &mut sink, &cfg, HashFunc::Xxh3).unwrap();

        assert_eq!(sink, vec![0, 2]);
        assert_eq!(reports.len(), 4);
        assert_eq!(reports[0].stage, "load");
        assert_eq!(reports.last().unwrap().stage, "save");
    }

    #[test]
    fn fuzzy_pipeline_dedups_near_identical_text() {
        let text_a = "the quick brown fox jumps over the lazy dog";
        let text_b = "the quick brown fox jumps over the lazy dog today";
        let mut source: Vec<String> = vec![text_a.into(), text_a.into(), text_b.into()];
        let mut sink: Vec<usize> = Vec::new();

        let shingle_cfg = ShingleConfig::new().with_n(3).with_min_length(1);
        let minhash_cfg = MinhashConfig::new().with_num_perm(32);
        let lsh_cfg = LshConfig::new().with_threshold(0.5);

        let reports = run_fuzzy_pipeline(
            &mut source,
            &mut sink,
            &shingle_cfg,
            &minhash_cfg,
            &lsh_cfg,
        )
        .unwrap();

        assert!(sink.contains(&0));
        assert!(!sink.contains(&1));
        assert_eq!(reports.first().unwrap().stage, "load");
    }

    #[test]
    fn fuzzy_pipeline_keeps_all_isolated_records() {
        let mut source: Vec<String> = vec!["alpha one two".into(), "beta three four".into()];
        let mut sink: Vec<usize> = Vec::new();

        let shingle_cfg = ShingleConfig::new().with_n(2).with_min_length(1);
        let minhash_cfg = MinhashConfig::new().with_num_perm(16);
        let lsh_cfg = LshConfig::default();

        run_fuzzy_pipeline(
            &mut source,
            &mut sink,
            &shingle_cfg,
            &minhash_cfg,
            &lsh_cfg,
        )
        .unwrap();

        assert_eq!(sink, vec![0, 1]);
    }

    #[test]
    fn exact_pipeline_rejects_invalid_config() {
        let mut source: Vec<String> = vec!["a".into()];
        let mut sink: Vec<usize> = Vec::new();
        let cfg = ExactHashConfig::new().with_batch_size(0);
        assert!(run_exact_pipeline(&mut source, &mut sink, &cfg, HashFunc::Md5).is_err());
    }
}
