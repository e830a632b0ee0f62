use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use crate::config::config_manager::ConfigManager;
use crate::config::constants::{EXIT_PIPELINE_ERROR, EXIT_USER_INTERRUPT};
use crate::enums::analysis_type::AnalysisType;
use crate::enums::commands::Commands;
use crate::enums::severity_tier::SeverityTier;
use serde::Serialize;
use crate::errors::{ArchaeologistError, ArchaeologistResult, ResultExt};
use crate::logger::logging::init_logging;
use crate::logger::summary_printer::SummaryPrinter;
use crate::services::ai_providers::gemini::GeminiProvider;
use crate::services::filesystem_probes::FilesystemProbes;
use crate::services::memory_bank::MemoryBank;
use crate::services::orchestrator::Orchestrator;
use crate::structs::analysis_request::AnalysisRequest;
use crate::structs::shared_state::SharedState;

struct AnalyzeArgs {
    repo_path: String,
    analysis_type: AnalysisType,
    output: Option<PathBuf>,
    json_only: bool,
    human_review: bool,
    tags: Vec<String>,
    config: Option<PathBuf>,
}

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new() -> Self {
        Self {
            start_time: None,
        }
    }

    /// Returns the process exit code.
    pub async fn run_command(&mut self, command: Commands) -> i32 {
        self.start_time = Some(Instant::now());

        let verbose = matches!(command, Commands::Analyze { verbose: true, .. });
        init_logging(verbose);

        let result = match command {
            Commands::Analyze { repo_path, analysis_type, output, verbose: _, json_only, human_review, tags, config } => {
                self.analyze_command(AnalyzeArgs {
                    repo_path,
                    analysis_type,
                    output,
                    json_only,
                    human_review,
                    tags,
                    config,
                })
                .await
            }
            Commands::History { repo, severity, limit, json, config } => {
                self.history_command(repo, severity, limit, json, config)
            }
        };

        if let Some(start) = self.start_time {
            log::info!("⏱️  Command completed in {:.2}s", start.elapsed().as_secs_f64());
        }

        match result {
            Ok(code) => code,
            Err(e) => {
                eprintln!("❌ {}", e.user_message());
                if verbose {
                    eprintln!("{}", e.technical_details());
                }
                EXIT_PIPELINE_ERROR
            }
        }
    }

    async fn analyze_command(&self, args: AnalyzeArgs) -> ArchaeologistResult<i32> {
        let config = ConfigManager::load(args.config.as_deref())?;

        let provider = GeminiProvider::from_config(&config.ai)?;
        if !provider.has_api_key() {
            log::warn!(
                "⚠️ {} is not set, narrative and judge output will be degraded",
                config.ai.api_key_env
            );
        }

        let shared = SharedState::from_config(&config);
        let orchestrator = Orchestrator::new(&config, Arc::new(FilesystemProbes), Arc::new(provider), &shared);

        let repo_path = Self::resolve_repo_path(&args.repo_path);
        let request = AnalysisRequest::new(repo_path.clone())
            .with_analysis_type(args.analysis_type)
            .with_human_review(args.human_review)
            .with_tags(args.tags);

        if !args.json_only {
            SummaryPrinter::print_banner(&repo_path.display().to_string(), args.analysis_type.as_str());
        }

        let result = tokio::select! {
            result = orchestrator.analyze_repository(request) => result,
            _ = tokio::signal::ctrl_c() => {
                eprintln!("\n🛑 Analysis interrupted");
                return Ok(EXIT_USER_INTERRUPT);
            }
        };

        if let Some(output) = &args.output {
            Self::write_output(output, &*result).with_context("--output")?;
            log::info!("💾 Results written to {}", output.display());
        }

        if args.json_only {
            println!("{}", serde_json::to_string_pretty(&*result)?);
        } else {
            SummaryPrinter::print_summary(&result);
        }

        Ok(result.exit_code())
    }

    fn history_command(
        &self,
        repo: Option<String>,
        severity: Option<SeverityTier>,
        limit: usize,
        json: bool,
        config: Option<PathBuf>,
    ) -> ArchaeologistResult<i32> {
        let config = ConfigManager::load(config.as_deref())?;

        let Some(storage_path) = config.memory.storage_path else {
            eprintln!("📭 No memory snapshot configured. Set memory.storage_path in the config file.");
            return Ok(0);
        };

        let bank = MemoryBank::new(Some(storage_path));
        let mut entries = match repo {
            Some(repo) => bank.retrieve_by_repo(&Self::resolve_repo_path(&repo).display().to_string()),
            None => bank.retrieve_recent(bank.len()),
        };
        if let Some(severity) = severity {
            entries.retain(|entry| entry.metadata.severity == Some(severity));
        }
        entries.truncate(limit);

        if json {
            println!("{}", serde_json::to_string_pretty(&entries)?);
        } else {
            SummaryPrinter::print_history(&entries);
        }

        Ok(0)
    }

    /// Stored paths are canonical so `history --repo` matches however the path was typed.
    fn resolve_repo_path(raw: &str) -> PathBuf {
        fs::canonicalize(raw).unwrap_or_else(|_| PathBuf::from(raw))
    }

    fn write_output<T: Serialize>(path: &Path, result: &T) -> ArchaeologistResult<()> {
        let display = path.display().to_string();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| ArchaeologistError::storage_error(&display, "create output directory", &e.to_string()))?;
        }

        let json = serde_json::to_string_pretty(result)?;
        fs::write(path, json).map_err(|e| ArchaeologistError::storage_error(&display, "write results", &e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn output_writer_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reports").join("nightly").join("result.json");

        CommandRunner::write_output(&path, &json!({"status": "success"})).unwrap();

        let written: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["status"], "success");
    }

    #[test]
    fn output_writer_failure_names_the_flag() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "file").unwrap();

        let result = CommandRunner::write_output(&blocker.join("result.json"), &json!({})).with_context("--output");

        match result {
            Err(ArchaeologistError::StorageError { operation, .. }) => {
                assert_eq!(operation, "--output -> create output directory");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
