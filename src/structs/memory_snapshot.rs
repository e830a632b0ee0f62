use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::structs::insight::Insight;
use crate::structs::memory_entry::MemoryEntry;
use crate::structs::memory_patterns::MemoryPatterns;

/// On-disk form of the memory bank.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemorySnapshot {
    #[serde(default)]
    pub memories: Vec<MemoryEntry>,
    #[serde(default)]
    pub patterns: MemoryPatterns,
    #[serde(default)]
    pub insights: Vec<Insight>,
    pub saved_at: DateTime<Utc>,
}
