use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::enums::review_status::ReviewStatus;
use crate::structs::review_feedback::ReviewFeedback;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HumanReviewOutcome {
    pub status: ReviewStatus,
    pub review_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<ReviewFeedback>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refinement: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HumanReviewOutcome {
    pub fn failed(review_id: &str, reason: &str) -> Self {
        Self {
            status: ReviewStatus::Error,
            review_id: review_id.to_string(),
            feedback: None,
            refinement: None,
            quality_score: None,
            processed_at: None,
            error: Some(reason.to_string()),
        }
    }
}
