use serde::{Deserialize, Serialize};
use crate::enums::question_type::QuestionType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewQuestion {
    pub id: String,
    pub question: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
}

impl ReviewQuestion {
    pub fn new(id: &str, question: &str, question_type: QuestionType) -> Self {
        Self {
            id: id.to_string(),
            question: question.to_string(),
            question_type,
        }
    }
}
