//! Shared fixtures for the integration tests: canned probe results and
//! hand-written providers.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use async_trait::async_trait;
use chrono::Utc;

use archaeologist::enums::ai_provider_error::AiProviderError;
use archaeologist::enums::analysis_type::AnalysisType;
use archaeologist::enums::ecosystem::Ecosystem;
use archaeologist::enums::probe_status::ProbeStatus;
use archaeologist::enums::run_status::RunStatus;
use archaeologist::enums::severity_tier::SeverityTier;
use archaeologist::enums::vulnerability_severity::VulnerabilitySeverity;
use archaeologist::helpers::id_generator;
use archaeologist::services::orchestrator::Orchestrator;
use archaeologist::structs::analysis_result::AnalysisResult;
use archaeologist::structs::config::config::Config;
use archaeologist::structs::cve_analysis::{CveAnalysis, SeverityCounts, Vulnerability};
use archaeologist::structs::doc_analysis::DocAnalysis;
use archaeologist::structs::generation_options::GenerationOptions;
use archaeologist::structs::git_analysis::{ChurnFile, GitAnalysis};
use archaeologist::structs::impact_assessment::ImpactAssessment;
use archaeologist::structs::shared_state::SharedState;
use archaeologist::traits::ai_provider::AiProvider;
use archaeologist::traits::probe_suite::ProbeSuite;

pub const NARRATIVE: &str = "Churn in the scheduler and an outdated Django release dominate the risk.";

pub const JUDGE_RESPONSE: &str = "OVERALL_SCORE: 82

COMPLETENESS: 85
ACCURACY: 80
ACTIONABILITY: 78
CLARITY: 88

STRENGTHS:
- Covers all three probes
- Prioritises the critical CVE

WEAKNESSES:
- Churn files are not ranked by owner

RECOMMENDATIONS:
- Add remediation estimates
";

pub const REFINEMENT: &str = "Refined: scheduler churn confirmed by reviewer.";

/// Git risk 60, two vulnerabilities (one critical), documentation coverage 0.4.
#[derive(Clone)]
pub struct StubProbes {
    pub git: GitAnalysis,
    pub cve: CveAnalysis,
    pub doc: DocAnalysis,
}

impl StubProbes {
    pub fn fixture() -> Self {
        let vulnerabilities = vec![
            vulnerability("django", "2.2.0", VulnerabilitySeverity::Critical),
            vulnerability("requests", "2.25.0", VulnerabilitySeverity::High),
        ];

        Self {
            git: GitAnalysis {
                risk_score: 60,
                total_commits: 40,
                high_churn_files: vec![
                    ChurnFile { file: "src/scheduler.py".to_string(), changes: 14 },
                    ChurnFile { file: "src/api.py".to_string(), changes: 11 },
                    ChurnFile { file: "src/models.py".to_string(), changes: 9 },
                ],
                lookback_days: 90,
                status: ProbeStatus::Completed,
                message: None,
                analyzed_at: Some(Utc::now()),
                error: None,
            },
            cve: CveAnalysis {
                severity_counts: SeverityCounts::from_vulnerabilities(&vulnerabilities),
                vulnerabilities,
                total_dependencies: 12,
                status: ProbeStatus::Completed,
                scanned_at: Some(Utc::now()),
                error: None,
            },
            doc: DocAnalysis {
                coverage: 0.4,
                has_readme: true,
                total_files: 5,
                documented_files: 2,
                undocumented_files: Vec::new(),
                function_coverage: 0.5,
                class_coverage: 1.0,
                total_functions: 10,
                total_classes: 2,
                status: ProbeStatus::Completed,
                analyzed_at: Some(Utc::now()),
                error: None,
            },
        }
    }
}

impl ProbeSuite for StubProbes {
    fn git_history(&self, _repo_path: &Path, _lookback_days: u32) -> GitAnalysis {
        self.git.clone()
    }

    fn dependencies(&self, _repo_path: &Path, _api_key: Option<&str>) -> CveAnalysis {
        self.cve.clone()
    }

    fn documentation(&self, _repo_path: &Path) -> DocAnalysis {
        self.doc.clone()
    }
}

/// Panics inside the blocking git probe.
pub struct PanickingProbes;

impl ProbeSuite for PanickingProbes {
    fn git_history(&self, _repo_path: &Path, _lookback_days: u32) -> GitAnalysis {
        panic!("git probe exploded");
    }

    fn dependencies(&self, _repo_path: &Path, _api_key: Option<&str>) -> CveAnalysis {
        CveAnalysis::no_dependencies()
    }

    fn documentation(&self, _repo_path: &Path) -> DocAnalysis {
        DocAnalysis::no_source_files(false)
    }
}

/// The documentation probe outlives any short timeout.
pub struct SlowDocProbes {
    pub inner: StubProbes,
    pub delay: Duration,
}

impl ProbeSuite for SlowDocProbes {
    fn git_history(&self, repo_path: &Path, lookback_days: u32) -> GitAnalysis {
        self.inner.git_history(repo_path, lookback_days)
    }

    fn dependencies(&self, repo_path: &Path, api_key: Option<&str>) -> CveAnalysis {
        self.inner.dependencies(repo_path, api_key)
    }

    fn documentation(&self, repo_path: &Path) -> DocAnalysis {
        std::thread::sleep(self.delay);
        self.inner.documentation(repo_path)
    }
}

/// Answers each call site with a canned response, keyed on the prompt text.
#[derive(Default)]
pub struct ScriptedProvider {
    pub calls: AtomicUsize,
}

impl ScriptedProvider {
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AiProvider for ScriptedProvider {
    async fn generate(&self, prompt: &str, _options: &GenerationOptions) -> Result<String, AiProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if prompt.contains("OVERALL_SCORE") {
            Ok(JUDGE_RESPONSE.to_string())
        } else if prompt.contains("human reviewer feedback") {
            Ok(REFINEMENT.to_string())
        } else {
            Ok(NARRATIVE.to_string())
        }
    }

    fn model_name(&self) -> &str {
        "scripted"
    }
}

pub struct FailingProvider;

#[async_trait]
impl AiProvider for FailingProvider {
    async fn generate(&self, _prompt: &str, _options: &GenerationOptions) -> Result<String, AiProviderError> {
        Err(AiProviderError::NetworkError("connection refused".to_string()))
    }

    fn model_name(&self) -> &str {
        "failing"
    }
}

pub fn vulnerability(package: &str, version: &str, severity: VulnerabilitySeverity) -> Vulnerability {
    Vulnerability {
        package: package.to_string(),
        version: version.to_string(),
        ecosystem: Ecosystem::Pypi,
        cve_id: format!("CVE-TEST-{}", package.to_uppercase()),
        severity,
        description: "test vulnerability".to_string(),
    }
}

pub fn orchestrator(
    probes: impl ProbeSuite + 'static,
    provider: Arc<dyn AiProvider>,
    shared: &SharedState,
) -> Orchestrator {
    orchestrator_with_config(&Config::default(), probes, provider, shared)
}

pub fn orchestrator_with_config(
    config: &Config,
    probes: impl ProbeSuite + 'static,
    provider: Arc<dyn AiProvider>,
    shared: &SharedState,
) -> Orchestrator {
    Orchestrator::new(config, Arc::new(probes), provider, shared)
}

/// A successful run with only the impact assessment filled in.
pub fn scored_result(repo_path: &str, impact_score: f64, key_risks: &[&str]) -> AnalysisResult {
    AnalysisResult {
        status: RunStatus::Success,
        analysis_type: AnalysisType::Comprehensive,
        repo_path: repo_path.to_string(),
        timestamp: Utc::now(),
        correlation_id: id_generator::correlation_id(),
        session_id: id_generator::session_id(),
        duration_secs: 0.5,
        probe_results: None,
        impact_assessment: Some(ImpactAssessment {
            impact_score,
            severity: SeverityTier::from_score(impact_score),
            key_risks: key_risks.iter().map(|risk| risk.to_string()).collect(),
            recommendations: Vec::new(),
            narrative: String::new(),
        }),
        report: None,
        evaluation: None,
        human_review: None,
        phases: Vec::new(),
        error: None,
    }
}
