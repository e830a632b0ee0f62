use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::enums::ecosystem::Ecosystem;
use crate::enums::probe_status::ProbeStatus;
use crate::enums::vulnerability_severity::VulnerabilitySeverity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vulnerability {
    pub package: String,
    pub version: String,
    pub ecosystem: Ecosystem,
    pub cve_id: String,
    pub severity: VulnerabilitySeverity,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SeverityCounts {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl SeverityCounts {
    pub fn from_vulnerabilities(vulnerabilities: &[Vulnerability]) -> Self {
        let mut counts = Self::default();
        for vulnerability in vulnerabilities {
            match vulnerability.severity {
                VulnerabilitySeverity::Critical => counts.critical += 1,
                VulnerabilitySeverity::High => counts.high += 1,
                VulnerabilitySeverity::Medium => counts.medium += 1,
                VulnerabilitySeverity::Low => counts.low += 1,
            }
        }
        counts
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CveAnalysis {
    pub vulnerabilities: Vec<Vulnerability>,
    pub severity_counts: SeverityCounts,
    pub total_dependencies: usize,
    pub status: ProbeStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scanned_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CveAnalysis {
    pub fn failed(reason: &str) -> Self {
        Self {
            vulnerabilities: Vec::new(),
            severity_counts: SeverityCounts::default(),
            total_dependencies: 0,
            status: ProbeStatus::Error,
            scanned_at: None,
            error: Some(reason.to_string()),
        }
    }

    /// No manifest found is a valid empty scan, not an error.
    pub fn no_dependencies() -> Self {
        Self {
            vulnerabilities: Vec::new(),
            severity_counts: SeverityCounts::default(),
            total_dependencies: 0,
            status: ProbeStatus::NoData,
            scanned_at: Some(Utc::now()),
            error: None,
        }
    }

    pub fn critical_count(&self) -> usize {
        self.vulnerabilities
            .iter()
            .filter(|v| v.severity == VulnerabilitySeverity::Critical)
            .count()
    }
}
