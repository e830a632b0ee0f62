use std::collections::BTreeMap;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MemoryStatistics {
    pub total_memories: usize,
    pub total_insights: usize,
    pub patterns_identified: usize,
    pub oldest_memory: Option<DateTime<Utc>>,
    pub newest_memory: Option<DateTime<Utc>>,
    pub severity_distribution: BTreeMap<String, usize>,
    pub average_impact_score: f64,
}
