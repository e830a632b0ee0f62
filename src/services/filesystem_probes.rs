use std::path::Path;
use crate::services::dependency_scanner::DependencyScanner;
use crate::services::documentation_analyzer::DocumentationAnalyzer;
use crate::services::git_analyzer::GitHistoryAnalyzer;
use crate::structs::cve_analysis::CveAnalysis;
use crate::structs::doc_analysis::DocAnalysis;
use crate::structs::git_analysis::GitAnalysis;
use crate::traits::probe_suite::ProbeSuite;

/// Probes that read the working tree and shell out to `git`.
#[derive(Debug, Default, Clone, Copy)]
pub struct FilesystemProbes;

impl ProbeSuite for FilesystemProbes {
    fn git_history(&self, repo_path: &Path, lookback_days: u32) -> GitAnalysis {
        GitHistoryAnalyzer::analyze(repo_path, lookback_days)
    }

    fn dependencies(&self, repo_path: &Path, api_key: Option<&str>) -> CveAnalysis {
        DependencyScanner::scan(repo_path, api_key)
    }

    fn documentation(&self, repo_path: &Path) -> DocAnalysis {
        DocumentationAnalyzer::analyze(repo_path)
    }
}
