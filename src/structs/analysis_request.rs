use std::path::PathBuf;
use serde::{Deserialize, Serialize};
use crate::enums::analysis_type::AnalysisType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub repo_path: PathBuf,
    pub analysis_type: AnalysisType,
    pub human_review: bool,
    pub tags: Vec<String>,
}

impl AnalysisRequest {
    pub fn new(repo_path: impl Into<PathBuf>) -> Self {
        Self {
            repo_path: repo_path.into(),
            analysis_type: AnalysisType::default(),
            human_review: false,
            tags: Vec::new(),
        }
    }

    pub fn with_analysis_type(mut self, analysis_type: AnalysisType) -> Self {
        self.analysis_type = analysis_type;
        self
    }

    pub fn with_human_review(mut self, enabled: bool) -> Self {
        self.human_review = enabled;
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }
}
