use serde::{Deserialize, Serialize};
use crate::enums::severity_tier::SeverityTier;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactAssessment {
    pub impact_score: f64,
    pub severity: SeverityTier,
    pub key_risks: Vec<String>,
    pub recommendations: Vec<String>,
    pub narrative: String,
}
