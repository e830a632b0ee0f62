use std::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelinePhase {
    Probing,
    Aggregation,
    Narrative,
    Reporting,
    Evaluation,
    HumanReview,
}

impl PipelinePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            PipelinePhase::Probing => "probing",
            PipelinePhase::Aggregation => "aggregation",
            PipelinePhase::Narrative => "narrative",
            PipelinePhase::Reporting => "reporting",
            PipelinePhase::Evaluation => "evaluation",
            PipelinePhase::HumanReview => "human_review",
        }
    }
}

impl fmt::Display for PipelinePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
