use std::fmt;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "kebab-case")]
pub enum AnalysisType {
    Quick,
    #[default]
    Comprehensive,
    SecurityFocused,
}

impl AnalysisType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisType::Quick => "quick",
            AnalysisType::Comprehensive => "comprehensive",
            AnalysisType::SecurityFocused => "security-focused",
        }
    }

    /// Extra instruction appended to the impact narrative prompt.
    pub fn narrative_focus(&self) -> &'static str {
        match self {
            AnalysisType::Quick => "Keep the analysis to a short paragraph.",
            AnalysisType::Comprehensive => "Cover stability, security and maintainability evenly.",
            AnalysisType::SecurityFocused => "Prioritise dependency and security exposure over other findings.",
        }
    }
}

impl fmt::Display for AnalysisType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
