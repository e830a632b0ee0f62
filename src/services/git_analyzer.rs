use std::collections::HashMap;
use std::path::Path;
use std::process::Command;
use chrono::{Duration, Utc};
use crate::config::constants::{CHURN_COMMIT_RATIO, MAX_REPORTED_CHURN_FILES, MIN_CHURN_THRESHOLD};
use crate::enums::probe_status::ProbeStatus;
use crate::errors::{ArchaeologistError, ArchaeologistResult};
use crate::structs::git_analysis::{ChurnFile, GitAnalysis};

const PROBE_NAME: &str = "git";

pub struct GitHistoryAnalyzer;

impl GitHistoryAnalyzer {

    pub fn analyze(repo_path: &Path, lookback_days: u32) -> GitAnalysis {
        match Self::try_analyze(repo_path, lookback_days) {
            Ok(analysis) => analysis,
            Err(e) => {
                log::warn!("⚠️ Git history probe failed for {}: {}", repo_path.display(), e);
                GitAnalysis::failed(&Self::failure_reason(&e), lookback_days)
            }
        }
    }

    fn failure_reason(error: &ArchaeologistError) -> String {
        match error {
            ArchaeologistError::ProbeError { reason, .. } => reason.clone(),
            other => format!("Analysis failed: {}", other),
        }
    }

    fn try_analyze(repo_path: &Path, lookback_days: u32) -> ArchaeologistResult<GitAnalysis> {
        if !repo_path.join(".git").exists() {
            return Err(ArchaeologistError::probe_error(PROBE_NAME, "Not a git repository"));
        }

        let since = Utc::now()
            .checked_sub_signed(Duration::days(i64::from(lookback_days)))
            .ok_or_else(|| {
                ArchaeologistError::probe_error(
                    PROBE_NAME,
                    &format!("Lookback window of {} days is out of range", lookback_days),
                )
            })?
            .format("%Y-%m-%d")
            .to_string();
        let since_arg = format!("--since={}", since);

        let count_output = Self::run_git(repo_path, &["rev-list", "--count", &since_arg, "HEAD"])?;
        let total_commits = count_output.trim().parse::<usize>().unwrap_or(0);

        if total_commits == 0 {
            log::debug!("📭 No commits in the last {} days", lookback_days);
            return Ok(GitAnalysis::no_commits(lookback_days));
        }

        let log_output = Self::run_git(
            repo_path,
            &["log", &since_arg, "--name-only", "--pretty=format:", "HEAD"],
        )?;

        let file_changes = count_file_changes(&log_output);
        let high_churn_files = select_high_churn(file_changes, total_commits);
        let risk_score = churn_risk_score(high_churn_files.len());

        log::debug!("📈 {} commits, {} high-churn files", total_commits, high_churn_files.len());

        Ok(GitAnalysis {
            risk_score,
            total_commits,
            high_churn_files: high_churn_files.into_iter().take(MAX_REPORTED_CHURN_FILES).collect(),
            lookback_days,
            status: ProbeStatus::Completed,
            message: None,
            analyzed_at: Some(Utc::now()),
            error: None,
        })
    }

    fn run_git(repo_path: &Path, args: &[&str]) -> ArchaeologistResult<String> {
        let output = Command::new("git")
            .arg("-C")
            .arg(repo_path)
            .args(args)
            .output()
            .map_err(|e| ArchaeologistError::probe_error(PROBE_NAME, &format!("Git command failed: {}", e)))?;

        if !output.status.success() {
            return Err(ArchaeologistError::probe_error(
                PROBE_NAME,
                &format!("Git command failed: {}", String::from_utf8_lossy(&output.stderr).trim()),
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Counts path occurrences in `git log --name-only` output, skipping dotfiles.
pub fn count_file_changes(log_output: &str) -> HashMap<String, usize> {
    let mut changes = HashMap::new();
    for line in log_output.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('.') {
            continue;
        }
        *changes.entry(line.to_string()).or_insert(0) += 1;
    }
    changes
}

/// Files changed in at least `max(3, 20% of commits)` commits, most changed first.
pub fn select_high_churn(file_changes: HashMap<String, usize>, total_commits: usize) -> Vec<ChurnFile> {
    let threshold = MIN_CHURN_THRESHOLD.max(total_commits as f64 * CHURN_COMMIT_RATIO);

    let mut files: Vec<ChurnFile> = file_changes
        .into_iter()
        .filter(|(_, changes)| *changes as f64 >= threshold)
        .map(|(file, changes)| ChurnFile { file, changes })
        .collect();

    files.sort_by(|a, b| b.changes.cmp(&a.changes).then_with(|| a.file.cmp(&b.file)));
    files
}

pub fn churn_risk_score(high_churn_count: usize) -> u32 {
    if high_churn_count == 0 {
        10
    } else {
        (30 + 10 * high_churn_count).min(100) as u32
    }
}
