use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JudgeDimension {
    Completeness,
    Accuracy,
    Actionability,
    Clarity,
}

impl JudgeDimension {
    pub const ALL: [JudgeDimension; 4] = [
        JudgeDimension::Completeness,
        JudgeDimension::Accuracy,
        JudgeDimension::Actionability,
        JudgeDimension::Clarity,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            JudgeDimension::Completeness => "Completeness",
            JudgeDimension::Accuracy => "Accuracy",
            JudgeDimension::Actionability => "Actionability",
            JudgeDimension::Clarity => "Clarity",
        }
    }
}
