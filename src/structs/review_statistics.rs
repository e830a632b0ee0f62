use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReviewStatistics {
    pub total_reviews: usize,
    pub completed_reviews: usize,
    pub pending_reviews: usize,
    pub completion_rate: f64,
}
