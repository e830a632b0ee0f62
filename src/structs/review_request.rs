use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::enums::review_status::ReviewStatus;
use crate::enums::severity_tier::SeverityTier;
use crate::structs::review_question::ReviewQuestion;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyFindings {
    pub git_risk: u32,
    pub vulnerabilities: usize,
    pub documentation_coverage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewSummary {
    pub overall_severity: SeverityTier,
    pub impact_score: f64,
    pub key_findings: KeyFindings,
    pub top_recommendations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRequest {
    pub review_id: String,
    pub timestamp: DateTime<Utc>,
    pub summary: ReviewSummary,
    pub focus_areas: Vec<String>,
    pub questions: Vec<ReviewQuestion>,
    pub status: ReviewStatus,
}
