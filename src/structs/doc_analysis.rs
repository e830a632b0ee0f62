use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::enums::probe_status::ProbeStatus;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UndocumentedFile {
    pub file: String,
    pub functions: usize,
    pub classes: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocAnalysis {
    pub coverage: f64,
    pub has_readme: bool,
    pub total_files: usize,
    pub documented_files: usize,
    pub undocumented_files: Vec<UndocumentedFile>,
    pub function_coverage: f64,
    pub class_coverage: f64,
    pub total_functions: usize,
    pub total_classes: usize,
    pub status: ProbeStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analyzed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DocAnalysis {
    pub fn failed(reason: &str) -> Self {
        Self {
            coverage: 0.0,
            has_readme: false,
            total_files: 0,
            documented_files: 0,
            undocumented_files: Vec::new(),
            function_coverage: 0.0,
            class_coverage: 0.0,
            total_functions: 0,
            total_classes: 0,
            status: ProbeStatus::Error,
            analyzed_at: None,
            error: Some(reason.to_string()),
        }
    }

    pub fn no_source_files(has_readme: bool) -> Self {
        Self {
            has_readme,
            status: ProbeStatus::NoData,
            analyzed_at: Some(Utc::now()),
            error: None,
            ..Self::failed("")
        }
    }
}
