use serde::{Deserialize, Serialize};
use crate::enums::phase_status::PhaseStatus;
use crate::enums::pipeline_phase::PipelinePhase;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseSpan {
    pub phase: PipelinePhase,
    pub status: PhaseStatus,
    pub duration_ms: u64,
}

impl PhaseSpan {
    pub fn skipped(phase: PipelinePhase) -> Self {
        Self {
            phase,
            status: PhaseStatus::Skipped,
            duration_ms: 0,
        }
    }
}
