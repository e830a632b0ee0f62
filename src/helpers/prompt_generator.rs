use crate::enums::analysis_type::AnalysisType;
use crate::errors::ArchaeologistResult;
use crate::prompts::impact_prompt::{IMPACT_PROMPT_HEADER, IMPACT_PROMPT_INSTRUCTIONS};
use crate::prompts::judge_prompt::{JUDGE_PROMPT_HEADER, JUDGE_PROMPT_INSTRUCTIONS};
use crate::prompts::refinement_prompt::{REFINEMENT_PROMPT_HEADER, REFINEMENT_PROMPT_INSTRUCTIONS};
use crate::structs::cve_analysis::SeverityCounts;
use crate::structs::final_report::FinalReport;
use crate::structs::probe_results::ProbeResults;
use crate::structs::review_feedback::ReviewFeedback;
use crate::structs::review_request::ReviewSummary;

fn severity_line(counts: &SeverityCounts) -> String {
    format!(
        "CRITICAL: {}, HIGH: {}, MEDIUM: {}, LOW: {}",
        counts.critical, counts.high, counts.medium, counts.low
    )
}

fn as_percent(coverage: f64) -> String {
    format!("{:.1}%", coverage * 100.0)
}

pub fn generate_impact_prompt(probes: &ProbeResults, analysis_type: AnalysisType) -> String {
    let mut prompt = String::from(IMPACT_PROMPT_HEADER);

    prompt.push_str(&format!(
        "\n\nGIT ANALYSIS:\n- Risk Score: {}/100\n- High Churn Files: {}\n",
        probes.git.risk_score,
        probes.git.high_churn_files.len()
    ));
    prompt.push_str(&format!(
        "\nSECURITY ANALYSIS:\n- Vulnerabilities: {}\n- Severity Distribution: {}\n",
        probes.cve.vulnerabilities.len(),
        severity_line(&probes.cve.severity_counts)
    ));
    prompt.push_str(&format!(
        "\nDOCUMENTATION ANALYSIS:\n- Coverage: {}\n- Total Files: {}\n",
        as_percent(probes.doc.coverage),
        probes.doc.total_files
    ));
    prompt.push_str(IMPACT_PROMPT_INSTRUCTIONS);
    prompt.push_str(&format!("\n{}", analysis_type.narrative_focus()));

    prompt
}

pub fn generate_judge_prompt(report: &FinalReport) -> String {
    let findings = &report.detailed_findings;
    let impact = &report.impact_assessment;
    let mut prompt = String::from(JUDGE_PROMPT_HEADER);

    prompt.push_str(&format!(
        "\n\nGit History Analysis:\n- Risk Score: {}/100\n- Total Commits: {}\n- High Churn Files: {}\n",
        findings.git.risk_score,
        findings.git.total_commits,
        findings.git.high_churn_files.len()
    ));
    prompt.push_str(&format!(
        "\nSecurity Analysis:\n- Total Dependencies: {}\n- Vulnerabilities Found: {}\n- Severity Distribution: {}\n",
        findings.cve.total_dependencies,
        findings.cve.vulnerabilities.len(),
        severity_line(&findings.cve.severity_counts)
    ));
    prompt.push_str(&format!(
        "\nDocumentation Analysis:\n- Coverage: {}\n- Total Files: {}\n- Documented Files: {}\n",
        as_percent(findings.doc.coverage),
        findings.doc.total_files,
        findings.doc.documented_files
    ));
    prompt.push_str(&format!(
        "\nImpact Assessment:\n- Impact Score: {}/100\n- Severity: {}\n- Key Risks: {}\n- Recommendations: {}\n",
        impact.impact_score,
        impact.severity,
        impact.key_risks.join("; "),
        impact.recommendations.join("; ")
    ));
    prompt.push_str(JUDGE_PROMPT_INSTRUCTIONS);

    prompt
}

pub fn generate_refinement_prompt(summary: &ReviewSummary, feedback: &ReviewFeedback) -> ArchaeologistResult<String> {
    Ok(format!(
        "{}\n\nORIGINAL FINDINGS:\n{}\n\nHUMAN FEEDBACK:\n{}\n{}",
        REFINEMENT_PROMPT_HEADER,
        serde_json::to_string_pretty(summary)?,
        serde_json::to_string_pretty(feedback)?,
        REFINEMENT_PROMPT_INSTRUCTIONS
    ))
}
