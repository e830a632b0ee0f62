use std::path::PathBuf;
use clap::Subcommand;
use crate::config::constants::{DEFAULT_HISTORY_LIMIT, DEFAULT_REPO_PATH};
use crate::enums::analysis_type::AnalysisType;
use crate::enums::severity_tier::SeverityTier;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the full analysis pipeline against a repository
    Analyze {
        #[clap(long, default_value = DEFAULT_REPO_PATH)]
        repo_path: String,
        #[clap(long, value_enum, default_value_t = AnalysisType::Comprehensive)]
        analysis_type: AnalysisType,
        #[clap(short, long)]
        output: Option<PathBuf>,
        #[clap(short, long)]
        verbose: bool,
        #[clap(long)]
        json_only: bool,
        #[clap(long)]
        human_review: bool,
        #[clap(short, long)]
        tags: Vec<String>,
        #[clap(short, long)]
        config: Option<PathBuf>,
    },
    /// List analyses stored in the memory snapshot
    History {
        #[clap(short, long)]
        repo: Option<String>,
        #[clap(short, long, value_enum)]
        severity: Option<SeverityTier>,
        #[clap(short, long, default_value_t = DEFAULT_HISTORY_LIMIT)]
        limit: usize,
        #[clap(long)]
        json: bool,
        #[clap(short, long)]
        config: Option<PathBuf>,
    },
}
