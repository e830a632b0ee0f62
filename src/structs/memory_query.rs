use crate::enums::severity_tier::SeverityTier;

#[derive(Debug, Clone, PartialEq)]
pub struct MemoryQuery {
    pub min_impact_score: Option<f64>,
    pub severity: Option<SeverityTier>,
    /// Matches entries carrying any of these tags.
    pub tags: Vec<String>,
    pub limit: usize,
}

impl Default for MemoryQuery {
    fn default() -> Self {
        Self {
            min_impact_score: None,
            severity: None,
            tags: Vec::new(),
            limit: 10,
        }
    }
}
