use terminal_size::{terminal_size, Width};
use crate::enums::probe_status::ProbeStatus;
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::memory_entry::MemoryEntry;

const DEFAULT_WIDTH: usize = 60;
const MAX_WIDTH: usize = 100;

pub struct SummaryPrinter {}

impl SummaryPrinter {

    fn separator(ch: char) -> String {
        let width = terminal_size()
            .map(|(Width(w), _)| (w as usize).min(MAX_WIDTH))
            .unwrap_or(DEFAULT_WIDTH);
        ch.to_string().repeat(width)
    }

    pub fn print_banner(repo_path: &str, analysis_type: &str) {
        println!("{}", Self::separator('='));
        println!("🏛️  Code Archaeologist");
        println!("📁 Repository: {}", repo_path);
        println!("🔎 Analysis:   {}", analysis_type);
        println!("{}", Self::separator('='));
    }

    pub fn print_summary(result: &AnalysisResult) {
        println!("\n{}", Self::separator('='));
        println!("📊 Analysis summary [{}]", result.correlation_id);
        println!("{}", Self::separator('='));

        if let Some(error) = &result.error {
            println!("❌ Analysis failed: {}", error);
            println!("⏱️  Duration: {:.2}s", result.duration_secs);
            return;
        }

        if let Some(impact) = &result.impact_assessment {
            println!("{} Severity: {} (impact score {:.1})", impact.severity.emoji(), impact.severity, impact.impact_score);
        }

        if let Some(probes) = &result.probe_results {
            println!("\n🔍 Probes:");
            Self::print_probe_line("Git history", probes.git.status, &format!(
                "risk {} / {} commits / {} high-churn files",
                probes.git.risk_score,
                probes.git.total_commits,
                probes.git.high_churn_files.len()
            ));
            Self::print_probe_line("Dependencies", probes.cve.status, &format!(
                "{} dependencies / {} vulnerabilities ({} critical)",
                probes.cve.total_dependencies,
                probes.cve.vulnerabilities.len(),
                probes.cve.critical_count()
            ));
            Self::print_probe_line("Documentation", probes.doc.status, &format!(
                "coverage {:.0}% / README {}",
                probes.doc.coverage * 100.0,
                if probes.doc.has_readme { "✅" } else { "❌" }
            ));
        }

        if let Some(impact) = &result.impact_assessment {
            println!("\n⚠️  Key risks:");
            for risk in &impact.key_risks {
                println!("   - {}", risk);
            }
            println!("\n💡 Recommendations:");
            for recommendation in &impact.recommendations {
                println!("   - {}", recommendation);
            }
        }

        if let Some(evaluation) = &result.evaluation {
            match &evaluation.error {
                Some(error) => println!("\n⚖️  Judge: {}", error),
                None => println!("\n⚖️  Judge score: {}/100", evaluation.overall_score),
            }
        }

        if let Some(review) = &result.human_review {
            match review.quality_score {
                Some(score) => println!("👥 Review {}: quality {:.1}", review.review_id, score),
                None => println!("👥 Review {}: {:?}", review.review_id, review.status),
            }
        }

        println!("\n⏱️  Duration: {:.2}s", result.duration_secs);
        for span in &result.phases {
            println!("   {:<14} {:<9} {}ms", span.phase.as_str(), format!("{:?}", span.status), span.duration_ms);
        }
        println!("{}", Self::separator('-'));
    }

    fn print_probe_line(name: &str, status: ProbeStatus, details: &str) {
        let icon = match status {
            ProbeStatus::Completed => "✅",
            ProbeStatus::NoData => "➖",
            ProbeStatus::Error => "❌",
        };
        println!("   {} {:<14} {}", icon, name, details);
    }

    pub fn print_history(entries: &[MemoryEntry]) {
        if entries.is_empty() {
            println!("📭 No stored analyses match the filters.");
            return;
        }

        println!("{}", Self::separator('='));
        println!("{:<20} {:<9} {:>6}  {:<15} {}", "TIMESTAMP", "SEVERITY", "SCORE", "TYPE", "REPOSITORY");
        println!("{}", Self::separator('-'));
        for entry in entries {
            println!(
                "{:<20} {:<9} {:>6.1}  {:<15} {}",
                entry.timestamp.format("%Y-%m-%d %H:%M:%S"),
                entry.metadata.severity_label(),
                entry.metadata.impact_score,
                entry.result.analysis_type.as_str(),
                entry.repo_path
            );
        }
        println!("{}", Self::separator('='));
        println!("📊 {} analyses", entries.len());
    }
}
