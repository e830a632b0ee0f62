use std::time::Duration;

pub const DEFAULT_REPO_PATH: &str = ".";
pub const DEFAULT_HISTORY_LIMIT: usize = 10;
pub const CONFIG_DIR_NAME: &str = ".archaeologist";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const GOOGLE_API_KEY_ENV: &str = "GOOGLE_API_KEY";
pub const NVD_API_KEY_ENV: &str = "NVD_API_KEY";
pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

pub const EXIT_PIPELINE_ERROR: i32 = 4;
pub const EXIT_USER_INTERRUPT: i32 = 130;

pub const MAX_GIT_LOOKBACK_DAYS: u32 = 36_500;
pub const MAX_REVIEW_HISTORY: usize = 100;
pub const MAX_TIMER_SAMPLES: usize = 1_000;

pub const MAX_REPORTED_CHURN_FILES: usize = 10;
pub const MAX_REPORTED_UNDOCUMENTED_FILES: usize = 10;
pub const MIN_CHURN_THRESHOLD: f64 = 3.0;
pub const CHURN_COMMIT_RATIO: f64 = 0.2;

pub const CHURN_RISK_THRESHOLD: u32 = 50;
pub const DOC_RISK_THRESHOLD: f64 = 0.5;
pub const DOC_RECOMMENDATION_THRESHOLD: f64 = 0.7;
pub const CVE_POINTS_PER_VULNERABILITY: f64 = 20.0;
pub const CVE_POINTS_CAP: f64 = 50.0;
pub const GIT_WEIGHT: f64 = 0.3;
pub const CVE_WEIGHT: f64 = 0.4;
pub const DOC_WEIGHT: f64 = 0.3;

pub const NARRATIVE_UNAVAILABLE: &str = "AI analysis unavailable";
pub const JUDGE_WEIGHT: f64 = 0.7;
pub const REVIEWER_WEIGHT: f64 = 0.3;
pub const TOP_REVIEW_RECOMMENDATIONS: usize = 3;

pub const README_CANDIDATES: &[&str] = &["README.md", "README.rst", "README.txt", "README"];
pub const DOC_EXCLUDED_DIRS: &[&str] = &["venv", "env", ".venv", ".git", "__pycache__", "node_modules", "target"];

pub fn timeout_duration(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}
