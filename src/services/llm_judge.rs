use std::sync::Arc;
use chrono::Utc;
use crate::helpers::prompt_generator::generate_judge_prompt;
use crate::services::evaluation_parser::parse_evaluation;
use crate::structs::evaluation_record::EvaluationRecord;
use crate::structs::final_report::FinalReport;
use crate::structs::generation_options::GenerationOptions;
use crate::traits::ai_provider::AiProvider;

/// Scores a finished report with a second model call.
pub struct LlmJudge {
    provider: Arc<dyn AiProvider>,
    options: GenerationOptions,
}

impl LlmJudge {
    pub fn new(provider: Arc<dyn AiProvider>, options: GenerationOptions) -> Self {
        Self { provider, options }
    }

    pub fn judge_model(&self) -> String {
        self.options
            .model
            .clone()
            .unwrap_or_else(|| self.provider.model_name().to_string())
    }

    /// Never fails: a provider error yields a zero-score record carrying the error.
    pub async fn evaluate(&self, report: &FinalReport) -> EvaluationRecord {
        let prompt = generate_judge_prompt(report);

        match self.provider.generate(&prompt, &self.options).await {
            Ok(response) => {
                let mut record = parse_evaluation(&response);
                record.evaluated_at = Some(Utc::now());
                record.judge_model = Some(self.judge_model());
                record
            }
            Err(e) => {
                log::warn!("⚠️ Judge evaluation failed: {}", e);
                let mut record = EvaluationRecord::failed(&e.to_string());
                record.evaluated_at = Some(Utc::now());
                record
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::ai_provider_error::AiProviderError;
    use crate::enums::judge_dimension::JudgeDimension;
    use crate::enums::probe_status::ProbeStatus;
    use crate::services::impact_scorer::ImpactScorer;
    use crate::services::report_builder::ReportBuilder;
    use crate::structs::cve_analysis::CveAnalysis;
    use crate::structs::doc_analysis::DocAnalysis;
    use crate::structs::git_analysis::GitAnalysis;
    use crate::structs::probe_results::ProbeResults;
    use crate::traits::ai_provider::MockAiProvider;

    fn sample_report() -> FinalReport {
        let mut git = GitAnalysis::no_commits(90);
        git.status = ProbeStatus::Completed;
        let probes = ProbeResults {
            git,
            cve: CveAnalysis::no_dependencies(),
            doc: DocAnalysis::no_source_files(true),
        };
        let impact = ImpactScorer::assess(&probes, "narrative".to_string());
        ReportBuilder::build(&probes, &impact)
    }

    fn judge_options() -> GenerationOptions {
        GenerationOptions::new(0.3, 2000).with_model("judge-model".to_string())
    }

    #[tokio::test]
    async fn parsed_response_is_stamped_with_judge_model() {
        let mut provider = MockAiProvider::new();
        provider
            .expect_generate()
            .withf(|prompt, options| {
                prompt.contains("OVERALL_SCORE: [0-100]")
                    && options.max_output_tokens == 2000
                    && options.model.as_deref() == Some("judge-model")
            })
            .times(1)
            .returning(|_, _| Ok("OVERALL_SCORE: 77\nCLARITY: 60\nSTRENGTHS:\n- concise".to_string()));

        let judge = LlmJudge::new(Arc::new(provider), judge_options());
        let record = judge.evaluate(&sample_report()).await;

        assert_eq!(record.overall_score, 77);
        assert_eq!(record.dimension(JudgeDimension::Clarity), Some(60));
        assert_eq!(record.strengths, vec!["concise"]);
        assert_eq!(record.judge_model.as_deref(), Some("judge-model"));
        assert!(record.evaluated_at.is_some());
        assert!(record.error.is_none());
    }

    #[tokio::test]
    async fn provider_failure_becomes_zero_score_record() {
        let mut provider = MockAiProvider::new();
        provider
            .expect_generate()
            .returning(|_, _| Err(AiProviderError::NetworkError("connection reset".to_string())));

        let judge = LlmJudge::new(Arc::new(provider), judge_options());
        let record = judge.evaluate(&sample_report()).await;

        assert_eq!(record.overall_score, 0);
        assert!(record.dimension_scores.is_empty());
        assert!(record.is_error());
        assert!(record.error.as_deref().unwrap_or_default().starts_with("Evaluation failed: "));
    }

    #[test]
    fn judge_model_falls_back_to_provider_model() {
        let mut provider = MockAiProvider::new();
        provider.expect_model_name().return_const("provider-model".to_string());

        let judge = LlmJudge::new(Arc::new(provider), GenerationOptions::new(0.3, 2000));
        assert_eq!(judge.judge_model(), "provider-model");
    }
}
