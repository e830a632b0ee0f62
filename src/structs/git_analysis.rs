use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::enums::probe_status::ProbeStatus;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChurnFile {
    pub file: String,
    pub changes: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GitAnalysis {
    pub risk_score: u32,
    pub total_commits: usize,
    pub high_churn_files: Vec<ChurnFile>,
    pub lookback_days: u32,
    pub status: ProbeStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analyzed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GitAnalysis {
    pub fn failed(reason: &str, lookback_days: u32) -> Self {
        Self {
            risk_score: 0,
            total_commits: 0,
            high_churn_files: Vec::new(),
            lookback_days,
            status: ProbeStatus::Error,
            message: None,
            analyzed_at: None,
            error: Some(reason.to_string()),
        }
    }

    pub fn no_commits(lookback_days: u32) -> Self {
        Self {
            risk_score: 0,
            total_commits: 0,
            high_churn_files: Vec::new(),
            lookback_days,
            status: ProbeStatus::NoData,
            message: Some("No commits in the specified time range".to_string()),
            analyzed_at: Some(Utc::now()),
            error: None,
        }
    }
}
