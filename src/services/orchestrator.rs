use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};
use chrono::Utc;
use serde_json::json;
use tokio::task::{JoinError, JoinHandle};
use crate::config::constants::NARRATIVE_UNAVAILABLE;
use crate::enums::message_role::MessageRole;
use crate::enums::phase_status::PhaseStatus;
use crate::enums::pipeline_phase::PipelinePhase;
use crate::enums::probe_status::ProbeStatus;
use crate::enums::review_status::ReviewStatus;
use crate::enums::run_status::RunStatus;
use crate::errors::ArchaeologistResult;
use crate::helpers::id_generator;
use crate::helpers::prompt_generator::generate_impact_prompt;
use crate::services::human_review_loop::HumanReviewLoop;
use crate::services::impact_scorer::ImpactScorer;
use crate::services::llm_judge::LlmJudge;
use crate::services::memory_bank::MemoryBank;
use crate::services::metrics_collector::MetricsCollector;
use crate::services::quality_aggregator::QualityAggregator;
use crate::services::phase_tracer::PhaseTracer;
use crate::services::report_builder::ReportBuilder;
use crate::services::session_store::{JsonMap, SessionStore};
use crate::structs::analysis_request::AnalysisRequest;
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::config::config::Config;
use crate::structs::cve_analysis::CveAnalysis;
use crate::structs::doc_analysis::DocAnalysis;
use crate::structs::evaluation_record::EvaluationRecord;
use crate::structs::final_report::FinalReport;
use crate::structs::generation_options::GenerationOptions;
use crate::structs::git_analysis::GitAnalysis;
use crate::structs::human_review_outcome::HumanReviewOutcome;
use crate::structs::impact_assessment::ImpactAssessment;
use crate::structs::phase_span::PhaseSpan;
use crate::structs::probe_results::ProbeResults;
use crate::structs::shared_state::SharedState;
use crate::traits::ai_provider::AiProvider;
use crate::traits::probe_suite::ProbeSuite;

struct PipelineOutput {
    probes: ProbeResults,
    impact: ImpactAssessment,
    report: FinalReport,
    evaluation: EvaluationRecord,
    human_review: Option<HumanReviewOutcome>,
}

/// Drives one analysis run through every phase and records the result.
pub struct Orchestrator {
    probes: Arc<dyn ProbeSuite>,
    provider: Arc<dyn AiProvider>,
    sessions: Arc<SessionStore>,
    memory: Arc<MemoryBank>,
    metrics: Arc<MetricsCollector>,
    quality: Arc<QualityAggregator>,
    tracer: PhaseTracer,
    judge: LlmJudge,
    review_loop: HumanReviewLoop,
    narrative_options: GenerationOptions,
    lookback_days: u32,
    nvd_api_key: Option<String>,
    probe_timeout: Option<Duration>,
}

impl Orchestrator {
    pub fn new(
        config: &Config,
        probes: Arc<dyn ProbeSuite>,
        provider: Arc<dyn AiProvider>,
        shared: &SharedState,
    ) -> Self {
        Self {
            judge: LlmJudge::new(Arc::clone(&provider), config.ai.judge_options()),
            review_loop: HumanReviewLoop::new(Arc::clone(&provider), config.ai.review_options()),
            tracer: PhaseTracer::new(Arc::clone(&shared.metrics)),
            narrative_options: config.ai.narrative_options(),
            lookback_days: config.probes.git_lookback_days,
            nvd_api_key: config.probes.nvd_api_key(),
            probe_timeout: config.probes.probe_timeout(),
            probes,
            provider,
            sessions: Arc::clone(&shared.sessions),
            memory: Arc::clone(&shared.memory),
            metrics: Arc::clone(&shared.metrics),
            quality: Arc::clone(&shared.quality),
        }
    }

    pub fn review_loop(&self) -> &HumanReviewLoop {
        &self.review_loop
    }

    /// Never fails: anything escaping a phase becomes a result with `status = error`.
    pub async fn analyze_repository(&self, request: AnalysisRequest) -> Arc<AnalysisResult> {
        let correlation_id = id_generator::correlation_id();
        let started = Instant::now();
        let repo_path = request.repo_path.display().to_string();

        log::info!("[{}] 🚀 Starting {} analysis of {}", correlation_id, request.analysis_type, repo_path);

        let session = self.sessions.create_session(JsonMap::from([
            ("repo_path".to_string(), json!(repo_path)),
            ("analysis_type".to_string(), json!(request.analysis_type.as_str())),
            ("correlation_id".to_string(), json!(correlation_id)),
        ]));
        self.sessions.add_message(
            &session.id,
            MessageRole::User,
            &format!("Analyze {} ({})", repo_path, request.analysis_type),
            JsonMap::new(),
        );

        let mut phases = Vec::new();
        let outcome = self.run_phases(&request, &correlation_id, &mut phases).await;
        let elapsed = started.elapsed();

        let result = match outcome {
            Ok(output) => AnalysisResult {
                status: RunStatus::Success,
                analysis_type: request.analysis_type,
                repo_path: repo_path.clone(),
                timestamp: Utc::now(),
                correlation_id: correlation_id.clone(),
                session_id: session.id.clone(),
                duration_secs: elapsed.as_secs_f64(),
                probe_results: Some(output.probes),
                impact_assessment: Some(output.impact),
                report: Some(output.report),
                evaluation: Some(output.evaluation),
                human_review: output.human_review,
                phases,
                error: None,
            },
            Err(e) => {
                log::error!("[{}] ❌ Analysis failed: {}", correlation_id, e);
                AnalysisResult {
                    status: RunStatus::Error,
                    analysis_type: request.analysis_type,
                    repo_path: repo_path.clone(),
                    timestamp: Utc::now(),
                    correlation_id: correlation_id.clone(),
                    session_id: session.id.clone(),
                    duration_secs: elapsed.as_secs_f64(),
                    probe_results: None,
                    impact_assessment: None,
                    report: None,
                    evaluation: None,
                    human_review: None,
                    phases,
                    error: Some(e.user_message()),
                }
            }
        };

        self.metrics.record_duration("pipeline", elapsed);
        self.metrics.increment(if result.is_success() { "pipeline.success" } else { "pipeline.error" });
        self.quality.record(&result);

        let result = Arc::new(result);
        self.remember(&result, &request);
        self.attach_to_session(&session.id, &result);

        log::info!(
            "[{}] ✅ Analysis finished with status {:?} in {:.2}s",
            correlation_id,
            result.status,
            result.duration_secs
        );

        result
    }

    async fn run_phases(
        &self,
        request: &AnalysisRequest,
        correlation_id: &str,
        phases: &mut Vec<PhaseSpan>,
    ) -> ArchaeologistResult<PipelineOutput> {
        log::info!("[{}] 🔍 Phase 1: Running repository probes", correlation_id);
        let span = self.tracer.start(PipelinePhase::Probing, correlation_id);
        let probes = match self.run_probes(&request.repo_path).await {
            Ok(probes) => probes,
            Err(e) => {
                phases.push(span.finish(PhaseStatus::Error));
                return Err(e);
            }
        };
        let probe_failed = [probes.git.status, probes.cve.status, probes.doc.status].contains(&ProbeStatus::Error);
        phases.push(span.finish(if probe_failed { PhaseStatus::Degraded } else { PhaseStatus::Ok }));

        log::info!("[{}] 🧮 Phase 2: Scoring impact", correlation_id);
        let span = self.tracer.start(PipelinePhase::Aggregation, correlation_id);
        let mut impact = ImpactScorer::assess(&probes, String::new());
        phases.push(span.finish(PhaseStatus::Ok));
        log::info!("[{}] 📊 Impact score {} ({})", correlation_id, impact.impact_score, impact.severity);

        log::info!("[{}] 🤖 Phase 3: Generating impact narrative", correlation_id);
        let span = self.tracer.start(PipelinePhase::Narrative, correlation_id);
        let prompt = generate_impact_prompt(&probes, request.analysis_type);
        let narrative_status = match self.provider.generate(&prompt, &self.narrative_options).await {
            Ok(text) => {
                impact.narrative = text;
                PhaseStatus::Ok
            }
            Err(e) => {
                log::warn!("[{}] ⚠️ Impact narrative failed: {}", correlation_id, e);
                impact.narrative = NARRATIVE_UNAVAILABLE.to_string();
                PhaseStatus::Degraded
            }
        };
        phases.push(span.finish(narrative_status));

        log::info!("[{}] 📝 Phase 4: Building report", correlation_id);
        let span = self.tracer.start(PipelinePhase::Reporting, correlation_id);
        let report = ReportBuilder::build(&probes, &impact);
        phases.push(span.finish(PhaseStatus::Ok));

        log::info!("[{}] ⚖️ Phase 5: Evaluating report", correlation_id);
        let span = self.tracer.start(PipelinePhase::Evaluation, correlation_id);
        let evaluation = self.judge.evaluate(&report).await;
        phases.push(span.finish(if evaluation.is_error() { PhaseStatus::Degraded } else { PhaseStatus::Ok }));

        let human_review = if request.human_review {
            log::info!("[{}] 👥 Phase 6: Human review", correlation_id);
            let span = self.tracer.start(PipelinePhase::HumanReview, correlation_id);
            let outcome = self.run_human_review(&probes, &impact, evaluation.overall_score).await;
            phases.push(span.finish(if outcome.status == ReviewStatus::Error { PhaseStatus::Error } else { PhaseStatus::Ok }));
            Some(outcome)
        } else {
            phases.push(self.tracer.skip(PipelinePhase::HumanReview, correlation_id));
            None
        };

        Ok(PipelineOutput {
            probes,
            impact,
            report,
            evaluation,
            human_review,
        })
    }

    async fn run_probes(&self, repo_path: &Path) -> ArchaeologistResult<ProbeResults> {
        let lookback_days = self.lookback_days;

        let git_task = {
            let probes = Arc::clone(&self.probes);
            let path = repo_path.to_path_buf();
            tokio::task::spawn_blocking(move || probes.git_history(&path, lookback_days))
        };
        let cve_task = {
            let probes = Arc::clone(&self.probes);
            let path = repo_path.to_path_buf();
            let api_key = self.nvd_api_key.clone();
            tokio::task::spawn_blocking(move || probes.dependencies(&path, api_key.as_deref()))
        };
        let doc_task = {
            let probes = Arc::clone(&self.probes);
            let path = repo_path.to_path_buf();
            tokio::task::spawn_blocking(move || probes.documentation(&path))
        };

        let (git, cve, doc) = tokio::join!(
            Self::await_probe(git_task, self.probe_timeout, "git"),
            Self::await_probe(cve_task, self.probe_timeout, "dependency"),
            Self::await_probe(doc_task, self.probe_timeout, "documentation"),
        );

        Ok(ProbeResults {
            git: git?.unwrap_or_else(|reason| GitAnalysis::failed(&reason, lookback_days)),
            cve: cve?.unwrap_or_else(|reason| CveAnalysis::failed(&reason)),
            doc: doc?.unwrap_or_else(|reason| DocAnalysis::failed(&reason)),
        })
    }

    /// A timeout is reported as the probe's own failure; the blocking task is left to finish.
    async fn await_probe<T>(
        handle: JoinHandle<T>,
        limit: Option<Duration>,
        probe: &str,
    ) -> Result<Result<T, String>, JoinError> {
        match limit {
            Some(limit) => match tokio::time::timeout(limit, handle).await {
                Ok(joined) => joined.map(Ok),
                Err(_) => {
                    log::warn!("⏰ {} probe timed out after {}s", probe, limit.as_secs());
                    Ok(Err(format!("{} probe timed out after {}s", probe, limit.as_secs())))
                }
            },
            None => handle.await.map(Ok),
        }
    }

    async fn run_human_review(&self, probes: &ProbeResults, impact: &ImpactAssessment, judge_score: u32) -> HumanReviewOutcome {
        let request = self.review_loop.request_review(probes, impact, None);
        let feedback = self.review_loop.simulate_review(&request);
        self.review_loop.process_feedback(&request.review_id, feedback, judge_score).await
    }

    fn remember(&self, result: &AnalysisResult, request: &AnalysisRequest) {
        let mut tags = vec![request.analysis_type.as_str().to_string()];
        tags.extend(request.tags.iter().cloned());

        match self.memory.store_analysis(result, tags) {
            Ok(id) => log::debug!("[{}] 🧠 Stored memory {}", result.correlation_id, id),
            Err(e) => log::error!("[{}] ❌ Failed to persist memory snapshot: {}", result.correlation_id, e),
        }
    }

    fn attach_to_session(&self, session_id: &str, result: &Arc<AnalysisResult>) {
        let state = JsonMap::from([
            ("status".to_string(), json!(result.status)),
            ("impact_score".to_string(), json!(result.impact_score())),
        ]);
        self.sessions.update_session(session_id, state, Some(Arc::clone(result)));

        let summary = match (&result.error, result.severity()) {
            (Some(error), _) => format!("Analysis failed: {}", error),
            (None, Some(severity)) => format!(
                "Impact score {} ({})",
                result.impact_score().unwrap_or_default(),
                severity
            ),
            (None, None) => "Analysis completed".to_string(),
        };
        self.sessions.add_message(
            session_id,
            MessageRole::Assistant,
            &summary,
            JsonMap::from([("correlation_id".to_string(), json!(result.correlation_id))]),
        );
    }
}
