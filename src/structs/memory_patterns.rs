use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use crate::structs::memory_entry::MemoryEntry;

/// Aggregates over every stored entry, maintained incrementally.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MemoryPatterns {
    pub severity_distribution: BTreeMap<String, usize>,
    pub average_impact_score: f64,
    pub total_analyses: usize,
    pub common_risks: BTreeMap<String, usize>,
}

impl MemoryPatterns {
    pub fn record(&mut self, entry: &MemoryEntry) {
        *self
            .severity_distribution
            .entry(entry.metadata.severity_label().to_string())
            .or_insert(0) += 1;

        let total = self.total_analyses as f64;
        self.average_impact_score =
            (self.average_impact_score * total + entry.metadata.impact_score) / (total + 1.0);
        self.total_analyses += 1;

        for risk in entry.key_risks() {
            *self.common_risks.entry(risk.clone()).or_insert(0) += 1;
        }
    }

    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a MemoryEntry>) -> Self {
        let mut patterns = Self::default();
        for entry in entries {
            patterns.record(entry);
        }
        patterns
    }

    /// Number of distinct pattern groups that hold any data.
    pub fn identified(&self) -> usize {
        let mut count = 0;
        if !self.severity_distribution.is_empty() {
            count += 1;
        }
        if self.total_analyses > 0 {
            count += 2;
        }
        if !self.common_risks.is_empty() {
            count += 1;
        }
        count
    }
}
