use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewAnswer {
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<String>,
}

impl ReviewAnswer {
    pub fn new(answer: &str, comment: Option<&str>) -> Self {
        Self {
            answer: answer.to_string(),
            comment: comment.map(|c| c.to_string()),
            items: Vec::new(),
        }
    }
}

/// Answers keyed by question id. `overall_rating` is 1-5, or 0 when the reviewer gave none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewFeedback {
    pub answers: BTreeMap<String, ReviewAnswer>,
    pub overall_rating: u8,
    pub approved: bool,
    pub reviewer: String,
}
