use serde::{Deserialize, Serialize};

/// Averages over every successful run seen by a `QualityAggregator`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QualitySummary {
    pub total_analyses: usize,
    pub average_quality: f64,
    pub average_completeness: f64,
    pub average_accuracy: f64,
    pub average_actionability: f64,
    pub average_clarity: f64,
    pub average_duration_secs: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_duration_secs: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_duration_secs: Option<f64>,
    pub total_issues: usize,
    pub total_vulnerabilities: usize,
    pub average_issues_per_analysis: f64,
    /// Mean over rated runs only; 0 when no run carried a reviewer rating.
    pub average_rating: f64,
}
