use std::sync::Arc;
use std::time::Instant;
use crate::enums::phase_status::PhaseStatus;
use crate::enums::pipeline_phase::PipelinePhase;
use crate::services::metrics_collector::MetricsCollector;
use crate::structs::phase_span::PhaseSpan;

/// Opens one timed span per pipeline phase and feeds the metrics sink.
#[derive(Clone)]
pub struct PhaseTracer {
    metrics: Arc<MetricsCollector>,
}

impl PhaseTracer {
    pub fn new(metrics: Arc<MetricsCollector>) -> Self {
        Self { metrics }
    }

    pub fn start(&self, phase: PipelinePhase, correlation_id: &str) -> ActivePhase {
        log::debug!("[{}] ▶️ {} started", correlation_id, phase);
        ActivePhase {
            metrics: Arc::clone(&self.metrics),
            phase,
            correlation_id: correlation_id.to_string(),
            started: Instant::now(),
            finished: false,
        }
    }

    pub fn skip(&self, phase: PipelinePhase, correlation_id: &str) -> PhaseSpan {
        log::debug!("[{}] ⏭️ {} skipped", correlation_id, phase);
        PhaseSpan::skipped(phase)
    }
}

/// A span left unfinished is recorded as an error when dropped.
pub struct ActivePhase {
    metrics: Arc<MetricsCollector>,
    phase: PipelinePhase,
    correlation_id: String,
    started: Instant,
    finished: bool,
}

impl ActivePhase {
    pub fn finish(mut self, status: PhaseStatus) -> PhaseSpan {
        self.finished = true;
        self.record(status)
    }

    fn record(&self, status: PhaseStatus) -> PhaseSpan {
        let elapsed = self.started.elapsed();
        let phase = self.phase.as_str();

        self.metrics.record_duration(phase, elapsed);
        match status {
            PhaseStatus::Error => self.metrics.increment(&format!("{}.error", phase)),
            PhaseStatus::Skipped => {}
            PhaseStatus::Ok | PhaseStatus::Degraded => self.metrics.increment(&format!("{}.success", phase)),
        }
        if status == PhaseStatus::Degraded {
            self.metrics.increment(&format!("{}.degraded", phase));
        }

        log::info!("[{}] ⏱️ {} finished: {:?} in {}ms", self.correlation_id, phase, status, elapsed.as_millis());

        PhaseSpan {
            phase: self.phase,
            status,
            duration_ms: elapsed.as_millis() as u64,
        }
    }
}

impl Drop for ActivePhase {
    fn drop(&mut self) {
        if !self.finished {
            self.record(PhaseStatus::Error);
        }
    }
}
