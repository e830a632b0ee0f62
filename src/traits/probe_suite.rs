use std::path::Path;
use crate::structs::cve_analysis::CveAnalysis;
use crate::structs::doc_analysis::DocAnalysis;
use crate::structs::git_analysis::GitAnalysis;

/// Blocking repository probes. Implementations report failures inside the
/// returned record and never panic.
pub trait ProbeSuite: Send + Sync {

    fn git_history(&self, repo_path: &Path, lookback_days: u32) -> GitAnalysis;

    fn dependencies(&self, repo_path: &Path, api_key: Option<&str>) -> CveAnalysis;

    fn documentation(&self, repo_path: &Path) -> DocAnalysis;
}
