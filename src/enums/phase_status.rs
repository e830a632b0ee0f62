use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseStatus {
    Ok,
    /// The phase finished but one of its external calls failed.
    Degraded,
    Error,
    /// The phase was not requested for this run.
    Skipped,
}

impl PhaseStatus {
    pub fn is_success(&self) -> bool {
        !matches!(self, PhaseStatus::Error)
    }
}
