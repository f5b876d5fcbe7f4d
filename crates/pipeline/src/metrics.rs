//! Observability hooks: a global metrics recorder plus per-stage reports.

use std::sync::{Arc, OnceLock, RwLock};
use std::time::Duration;

/// Wall-clock timing and record counts for one driver stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageReport {
    pub stage: &'static str,
    pub duration: Duration,
    pub before: usize,
    pub after: usize,
    pub duplicates: usize,
}

impl StageReport {
    pub fn new(stage: &'static str, duration: Duration, before: usize, after: usize) -> Self {
        Self {
            stage,
            duration,
            before,
            after,
            duplicates: before.saturating_sub(after),
        }
    }
}

/// Observer for per-stage pipeline outcomes. Implementors typically forward
/// to a metrics backend (counters, histograms); see [`set_pipeline_metrics`]
/// to install one globally.
pub trait PipelineMetrics: Send + Sync {
    fn record_stage(&self, report: &StageReport);
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn PipelineMetrics>>> {
    static METRICS: OnceLock<RwLock<Option<Arc<dyn PipelineMetrics>>>> = OnceLock::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

/// Install or clear the global pipeline metrics recorder.
pub fn set_pipeline_metrics(recorder: Option<Arc<dyn PipelineMetrics>>) {
    let lock = metrics_lock();
    let mut guard = lock.write().unwrap_or_else(|poison| poison.into_inner());
    *guard = recorder;
}

pub(crate) fn metrics_recorder() -> Option<Arc<dyn PipelineMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poison| poison.into_inner());
    guard.clone()
}

/// Emit `report` to the installed recorder (if any) and as a `tracing` info
/// event, then return it for the driver's own accumulation.
pub(crate) fn emit(report: StageReport) -> StageReport {
    tracing::info!(
        stage = report.stage,
        duration_us = report.duration.as_micros() as u64,
        before = report.before,
        after = report.after,
        duplicates = report.duplicates,
        "pipeline stage complete"
    );
    if let Some(recorder) = metrics_recorder() {
        recorder.record_stage(&report);
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct CollectingMetrics {
        reports: Mutex<Vec<StageReport>>,
    }

    impl PipelineMetrics for CollectingMetrics {
        fn record_stage(&self, report: &StageReport) {
            self.reports.lock().unwrap().push(report.clone());
        }
    }

    #[test]
    fn stage_report_computes_duplicates() {
        let report = StageReport::new("load", Duration::from_millis(1), 10, 7);
        assert_eq!(report.duplicates, 3);
    }

    #[test]
    fn installed_recorder_receives_emitted_reports() {
        let recorder = Arc::new(CollectingMetrics::default());
        set_pipeline_metrics(Some(recorder.clone()));

        let report = StageReport::new("filter", Duration::from_millis(2), 5, 5);
        emit(report.clone());

        let seen = recorder.reports.lock().unwrap();
        assert_eq!(seen.last(), Some(&report));

        set_pipeline_metrics(None);
    }
}
