use serde::{Deserialize, Serialize};
use crate::enums::severity_tier::SeverityTier;
use crate::structs::impact_assessment::ImpactAssessment;
use crate::structs::probe_results::ProbeResults;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutiveSummary {
    pub impact_score: f64,
    pub severity: SeverityTier,
    pub total_issues: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalReport {
    pub executive_summary: ExecutiveSummary,
    pub detailed_findings: ProbeResults,
    pub impact_assessment: ImpactAssessment,
    pub recommendations: Vec<String>,
}
