use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::enums::severity_tier::SeverityTier;
use crate::structs::analysis_result::AnalysisResult;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryMetadata {
    pub impact_score: f64,
    /// `None` for runs that failed before scoring.
    pub severity: Option<SeverityTier>,
}

impl MemoryMetadata {
    pub fn from_result(result: &AnalysisResult) -> Self {
        Self {
            impact_score: result.impact_score().unwrap_or(0.0),
            severity: result.severity(),
        }
    }

    pub fn severity_label(&self) -> &'static str {
        self.severity.map(|s| s.as_str()).unwrap_or("unknown")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryEntry {
    pub id: String,
    pub repo_path: String,
    pub correlation_id: String,
    pub timestamp: DateTime<Utc>,
    pub result: AnalysisResult,
    pub tags: Vec<String>,
    pub metadata: MemoryMetadata,
}

impl MemoryEntry {
    pub fn key_risks(&self) -> &[String] {
        self.result
            .impact_assessment
            .as_ref()
            .map(|impact| impact.key_risks.as_slice())
            .unwrap_or(&[])
    }

    pub fn has_any_tag(&self, tags: &[String]) -> bool {
        tags.iter().any(|tag| self.tags.contains(tag))
    }
}
