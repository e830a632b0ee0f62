use std::collections::BTreeMap;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::enums::judge_dimension::JudgeDimension;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EvaluationRecord {
    pub overall_score: u32,
    pub dimension_scores: BTreeMap<JudgeDimension, u32>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub recommendations: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evaluated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub judge_model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl EvaluationRecord {
    pub fn failed(reason: &str) -> Self {
        Self {
            error: Some(format!("Evaluation failed: {}", reason)),
            ..Self::default()
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn dimension(&self, dimension: JudgeDimension) -> Option<u32> {
        self.dimension_scores.get(&dimension).copied()
    }
}
