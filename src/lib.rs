//! Exact-hash and MinHash-LSH fuzzy deduplication for large text corpora.
//!
//! This crate re-exports the `shingle`, `hashes`, `minhash`, `lsh`,
//! `exactdedup`, and `pipeline` stage crates so applications can drive
//! either dedup mode through a single dependency, plus hosts [`Config`]
//! (the recognized external-interface options) and the two top-level entry
//! points: [`dedup_exact`] for whole-record hash dedup and [`dedup_fuzzy`]
//! for MinHash-LSH near-duplicate clustering.
//!
//! ## Quick start
//!
//! ```
//! use corpus_dedup::{dedup_exact, Config};
//!
//! let cfg = Config::default();
//! let mut source: Vec<String> = vec!["hello".into(), "hello".into(), "world".into()];
//! let mut sink: Vec<usize> = Vec::new();
//!
//! let reports = dedup_exact(&mut source, &mut sink, &cfg).unwrap();
//! assert_eq!(sink, vec![0, 2]);
//! assert!(!reports.is_empty());
//! ```
//!
//! ## Observability
//!
//! Stage timings and record counts can be captured by installing a
//! [`PipelineMetrics`] recorder via [`set_pipeline_metrics`]. Every stage
//! also emits a `tracing` event at info level regardless of whether a
//! recorder is installed.
//!
//! ## Errors
//!
//! Failures from any stage converge on [`DedupError`], which distinguishes
//! configuration problems (surfaced before any stage runs), bad input
//! records, resource failures in the external source/sink, and internal
//! invariant violations.

pub use exactdedup::{exact_dedup, kept_indices, ExactHashConfig, ExactHashError, HashFuncName};
pub use hashes::{digest, sha1_hash32, HashFunc};
pub use lsh::{cluster, kept_ids, optimal_param, LshConfig, LshError, UnionFind};
pub use minhash::{
    band_keys, band_ranges, compute_signature, fingerprint, Fingerprint, MinhashConfig,
    MinhashError, PermutationTable,
};
pub use pipeline::{
    run_exact_pipeline, run_fuzzy_pipeline, set_pipeline_metrics, DedupError, PipelineMetrics,
    RecordSink, RecordSource, StageReport,
};
pub use shingle::{shingle_document, shingle_set, tokenize, ShingleConfig, ShingleError};

pub mod config;
pub use config::{Config, ConfigLoadError};

/// Deduplicate `source` by exact content hash and persist the kept ids to
/// `sink`. See [`ExactHashConfig`] for the shard-size/hash-function
/// parameters, sourced from `cfg.batch_size` and `cfg.hash_func`.
pub fn dedup_exact(
    source: &mut dyn RecordSource,
    sink: &mut dyn RecordSink,
    cfg: &Config,
) -> Result<Vec<StageReport>, DedupError> {
    cfg.validate()
        .map_err(|err| DedupError::Config(err.to_string()))?;

    let exact_cfg = ExactHashConfig::new().with_batch_size(cfg.batch_size);
    run_exact_pipeline(source, sink, &exact_cfg, cfg.hash_func.into())
}

/// Deduplicate `source` by MinHash-LSH near-duplicate clustering and
/// persist the kept ids (cluster representatives) to `sink`. Band layout
/// `(b, r)` is chosen by the parameter oracle from `cfg.threshold` and
/// `cfg.num_perm`.
pub fn dedup_fuzzy(
    source: &mut dyn RecordSource,
    sink: &mut dyn RecordSink,
    cfg: &Config,
) -> Result<Vec<StageReport>, DedupError> {
    cfg.validate()
        .map_err(|err| DedupError::Config(err.to_string()))?;

    let shingle_cfg = ShingleConfig::new().with_n(cfg.ngram);
    let minhash_cfg = MinhashConfig::new()
        .with_num_perm(cfg.num_perm)
        .with_seed(cfg.seed);
    let lsh_cfg = LshConfig::new().with_threshold(cfg.threshold);

    run_fuzzy_pipeline(source, sink, &shingle_cfg, &minhash_cfg, &lsh_cfg)
}
