use std::fmt;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub const CRITICAL_THRESHOLD: f64 = 70.0;
pub const HIGH_THRESHOLD: f64 = 50.0;
pub const MEDIUM_THRESHOLD: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SeverityTier {
    Low,
    Medium,
    High,
    Critical,
}

impl SeverityTier {
    /// Breakpoints are exclusive lower bounds: exactly 70.0 is `High`.
    pub fn from_score(score: f64) -> Self {
        if score > CRITICAL_THRESHOLD {
            SeverityTier::Critical
        } else if score > HIGH_THRESHOLD {
            SeverityTier::High
        } else if score > MEDIUM_THRESHOLD {
            SeverityTier::Medium
        } else {
            SeverityTier::Low
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            SeverityTier::Low => 0,
            SeverityTier::Medium => 1,
            SeverityTier::High => 2,
            SeverityTier::Critical => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SeverityTier::Low => "low",
            SeverityTier::Medium => "medium",
            SeverityTier::High => "high",
            SeverityTier::Critical => "critical",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            SeverityTier::Low => "🟢",
            SeverityTier::Medium => "🟡",
            SeverityTier::High => "🟠",
            SeverityTier::Critical => "🔴",
        }
    }
}

impl fmt::Display for SeverityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoints_are_exclusive_lower_bounds() {
        assert_eq!(SeverityTier::from_score(70.0), SeverityTier::High);
        assert_eq!(SeverityTier::from_score(70.01), SeverityTier::Critical);
        assert_eq!(SeverityTier::from_score(50.0), SeverityTier::Medium);
        assert_eq!(SeverityTier::from_score(50.01), SeverityTier::High);
        assert_eq!(SeverityTier::from_score(30.0), SeverityTier::Low);
        assert_eq!(SeverityTier::from_score(30.01), SeverityTier::Medium);
        assert_eq!(SeverityTier::from_score(0.0), SeverityTier::Low);
        assert_eq!(SeverityTier::from_score(100.0), SeverityTier::Critical);
    }

    #[test]
    fn exit_codes_follow_tier_order() {
        let codes: Vec<i32> = [SeverityTier::Low, SeverityTier::Medium, SeverityTier::High, SeverityTier::Critical]
            .iter()
            .map(|tier| tier.exit_code())
            .collect();
        assert_eq!(codes, vec![0, 1, 2, 3]);
    }
}
