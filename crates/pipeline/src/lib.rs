//! Stage driver, observability, and record source/sink contracts shared by
//! the exact and fuzzy dedup pipelines.
//!
//! [`run_exact_pipeline`] and [`run_fuzzy_pipeline`] are the two entry
//! points; both take a [`RecordSource`]/[`RecordSink`] pair and return a
//! [`StageReport`] per stage. Install a [`PipelineMetrics`] recorder with
//! [`set_pipeline_metrics`] to observe stage timings and counts as they
//! happen, in addition to the `tracing` events each stage emits.

mod driver;
mod error;
mod metrics;
mod traits;

pub use driver::{run_exact_pipeline, run_fuzzy_pipeline};
pub use error::DedupError;
pub use metrics::{set_pipeline_metrics, PipelineMetrics, StageReport};
pub use traits::{RecordSink, RecordSource};
