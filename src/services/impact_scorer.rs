use crate::config::constants::{
    CHURN_RISK_THRESHOLD, CVE_POINTS_CAP, CVE_POINTS_PER_VULNERABILITY, CVE_WEIGHT,
    DOC_RECOMMENDATION_THRESHOLD, DOC_RISK_THRESHOLD, DOC_WEIGHT, GIT_WEIGHT,
};
use crate::enums::severity_tier::SeverityTier;
use crate::structs::impact_assessment::ImpactAssessment;
use crate::structs::probe_results::ProbeResults;

pub const NO_CRITICAL_RISKS: &str = "No critical risks identified";
pub const MAINTAIN_STANDARDS: &str = "Continue maintaining current standards";

/// Pure aggregation of the three probe results.
pub struct ImpactScorer;

impl ImpactScorer {

    /// `git_risk*0.3 + min(cves*20, 50)*0.4 + (1-coverage)*100*0.3`, rounded to 2 decimals.
    pub fn impact_score(git_risk: u32, vulnerability_count: usize, doc_coverage: f64) -> f64 {
        let cve_points = (vulnerability_count as f64 * CVE_POINTS_PER_VULNERABILITY).min(CVE_POINTS_CAP);
        let doc_gap = (1.0 - doc_coverage.clamp(0.0, 1.0)) * 100.0;

        let raw = f64::from(git_risk) * GIT_WEIGHT + cve_points * CVE_WEIGHT + doc_gap * DOC_WEIGHT;
        (raw * 100.0).round() / 100.0
    }

    pub fn key_risks(probes: &ProbeResults) -> Vec<String> {
        let mut risks = Vec::new();

        if probes.git.risk_score > CHURN_RISK_THRESHOLD {
            risks.push("High code churn detected - potential stability issues".to_string());
        }

        let critical = probes.cve.critical_count();
        if critical > 0 {
            risks.push(format!("Critical security vulnerabilities found: {}", critical));
        }

        if probes.doc.coverage < DOC_RISK_THRESHOLD {
            risks.push("Low documentation coverage - maintainability concern".to_string());
        }

        if risks.is_empty() {
            risks.push(NO_CRITICAL_RISKS.to_string());
        }
        risks
    }

    pub fn recommendations(probes: &ProbeResults) -> Vec<String> {
        let mut recommendations = Vec::new();

        let churn_files = probes.git.high_churn_files.len();
        if churn_files > 0 {
            recommendations.push(format!("Review and refactor {} high-churn files", churn_files));
        }

        let vulnerable = probes.cve.vulnerabilities.len();
        if vulnerable > 0 {
            recommendations.push(format!("Update {} vulnerable dependencies immediately", vulnerable));
        }

        if probes.doc.coverage < DOC_RECOMMENDATION_THRESHOLD {
            recommendations.push("Improve documentation coverage to at least 70%".to_string());
        }

        if recommendations.is_empty() {
            recommendations.push(MAINTAIN_STANDARDS.to_string());
        }
        recommendations
    }

    pub fn assess(probes: &ProbeResults, narrative: String) -> ImpactAssessment {
        let impact_score = Self::impact_score(
            probes.git.risk_score,
            probes.cve.vulnerabilities.len(),
            probes.doc.coverage,
        );

        ImpactAssessment {
            impact_score,
            severity: SeverityTier::from_score(impact_score),
            key_risks: Self::key_risks(probes),
            recommendations: Self::recommendations(probes),
            narrative,
        }
    }
}
