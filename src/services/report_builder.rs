use crate::structs::final_report::{ExecutiveSummary, FinalReport};
use crate::structs::impact_assessment::ImpactAssessment;
use crate::structs::probe_results::ProbeResults;

pub struct ReportBuilder;

impl ReportBuilder {
    pub fn build(probes: &ProbeResults, impact: &ImpactAssessment) -> FinalReport {
        FinalReport {
            executive_summary: ExecutiveSummary {
                impact_score: impact.impact_score,
                severity: impact.severity,
                total_issues: probes.total_issues(),
            },
            detailed_findings: probes.clone(),
            impact_assessment: impact.clone(),
            recommendations: impact.recommendations.clone(),
        }
    }
}
