use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::config::constants::EXIT_PIPELINE_ERROR;
use crate::enums::analysis_type::AnalysisType;
use crate::enums::run_status::RunStatus;
use crate::enums::severity_tier::SeverityTier;
use crate::structs::evaluation_record::EvaluationRecord;
use crate::structs::final_report::FinalReport;
use crate::structs::human_review_outcome::HumanReviewOutcome;
use crate::structs::impact_assessment::ImpactAssessment;
use crate::structs::phase_span::PhaseSpan;
use crate::structs::probe_results::ProbeResults;

/// Outcome of one pipeline run. Built once and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub status: RunStatus,
    pub analysis_type: AnalysisType,
    pub repo_path: String,
    pub timestamp: DateTime<Utc>,
    pub correlation_id: String,
    pub session_id: String,
    pub duration_secs: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probe_results: Option<ProbeResults>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact_assessment: Option<ImpactAssessment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report: Option<FinalReport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evaluation: Option<EvaluationRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub human_review: Option<HumanReviewOutcome>,
    pub phases: Vec<PhaseSpan>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AnalysisResult {
    pub fn is_success(&self) -> bool {
        self.status == RunStatus::Success
    }

    pub fn severity(&self) -> Option<SeverityTier> {
        self.impact_assessment.as_ref().map(|impact| impact.severity)
    }

    pub fn impact_score(&self) -> Option<f64> {
        self.impact_assessment.as_ref().map(|impact| impact.impact_score)
    }

    pub fn exit_code(&self) -> i32 {
        match (self.status, self.severity()) {
            (RunStatus::Success, Some(severity)) => severity.exit_code(),
            _ => EXIT_PIPELINE_ERROR,
        }
    }
}
