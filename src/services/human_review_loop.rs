use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};
use chrono::Utc;
use crate::config::constants::{JUDGE_WEIGHT, MAX_REVIEW_HISTORY, REVIEWER_WEIGHT, TOP_REVIEW_RECOMMENDATIONS};
use crate::enums::question_type::QuestionType;
use crate::enums::review_status::ReviewStatus;
use crate::helpers::id_generator;
use crate::helpers::prompt_generator::generate_refinement_prompt;
use crate::structs::generation_options::GenerationOptions;
use crate::structs::human_review_outcome::HumanReviewOutcome;
use crate::structs::impact_assessment::ImpactAssessment;
use crate::structs::probe_results::ProbeResults;
use crate::structs::review_feedback::{ReviewAnswer, ReviewFeedback};
use crate::structs::review_question::ReviewQuestion;
use crate::structs::review_request::{KeyFindings, ReviewRequest, ReviewSummary};
use crate::structs::review_statistics::ReviewStatistics;
use crate::traits::ai_provider::AiProvider;

const MAX_RATING: f64 = 5.0;

/// Simulated reviewer sign-off followed by a refinement call.
///
/// Only the most recent `MAX_REVIEW_HISTORY` requests are kept.
pub struct HumanReviewLoop {
    provider: Arc<dyn AiProvider>,
    options: GenerationOptions,
    history: Mutex<Vec<ReviewRequest>>,
}

impl HumanReviewLoop {
    pub fn new(provider: Arc<dyn AiProvider>, options: GenerationOptions) -> Self {
        Self {
            provider,
            options,
            history: Mutex::new(Vec::new()),
        }
    }

    fn history(&self) -> MutexGuard<'_, Vec<ReviewRequest>> {
        self.history.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn request_review(
        &self,
        probes: &ProbeResults,
        impact: &ImpactAssessment,
        focus_areas: Option<Vec<String>>,
    ) -> ReviewRequest {
        let request = ReviewRequest {
            review_id: id_generator::review_id(),
            timestamp: Utc::now(),
            summary: Self::review_summary(probes, impact),
            focus_areas: focus_areas.unwrap_or_else(|| vec!["all".to_string()]),
            questions: Self::review_questions(),
            status: ReviewStatus::PendingReview,
        };

        let mut history = self.history();
        if history.len() >= MAX_REVIEW_HISTORY {
            let excess = history.len() + 1 - MAX_REVIEW_HISTORY;
            history.drain(..excess);
        }
        history.push(request.clone());
        request
    }

    fn review_summary(probes: &ProbeResults, impact: &ImpactAssessment) -> ReviewSummary {
        ReviewSummary {
            overall_severity: impact.severity,
            impact_score: impact.impact_score,
            key_findings: KeyFindings {
                git_risk: probes.git.risk_score,
                vulnerabilities: probes.cve.vulnerabilities.len(),
                documentation_coverage: probes.doc.coverage,
            },
            top_recommendations: impact
                .recommendations
                .iter()
                .take(TOP_REVIEW_RECOMMENDATIONS)
                .cloned()
                .collect(),
        }
    }

    pub fn review_questions() -> Vec<ReviewQuestion> {
        vec![
            ReviewQuestion::new("q1", "Do the identified high-churn files align with known problem areas?", QuestionType::YesNoComment),
            ReviewQuestion::new("q2", "Are the security vulnerabilities correctly prioritized?", QuestionType::YesNoComment),
            ReviewQuestion::new("q3", "Do the recommendations seem actionable and practical?", QuestionType::Rating1To5),
            ReviewQuestion::new("q4", "Are there any false positives in the findings?", QuestionType::YesNoList),
            ReviewQuestion::new("q5", "What additional context should the system consider?", QuestionType::FreeText),
        ]
    }

    /// Canned approving feedback used when no human is in the loop.
    pub fn simulate_review(&self, _request: &ReviewRequest) -> ReviewFeedback {
        let answers = BTreeMap::from([
            ("q1".to_string(), ReviewAnswer::new("yes", Some("Findings align with team knowledge of problem areas"))),
            ("q2".to_string(), ReviewAnswer::new("yes", Some("Security priorities look correct"))),
            ("q3".to_string(), ReviewAnswer::new("4", Some("Recommendations are practical and actionable"))),
            ("q4".to_string(), ReviewAnswer::new("no", None)),
            ("q5".to_string(), ReviewAnswer::new("Consider recent refactoring efforts in core modules", None)),
        ]);

        ReviewFeedback {
            answers,
            overall_rating: 4,
            approved: true,
            reviewer: "automated_simulation".to_string(),
        }
    }

    pub async fn process_feedback(&self, review_id: &str, feedback: ReviewFeedback, judge_score: u32) -> HumanReviewOutcome {
        let summary = self
            .history()
            .iter()
            .find(|review| review.review_id == review_id)
            .map(|review| review.summary.clone());

        let Some(summary) = summary else {
            return HumanReviewOutcome::failed(review_id, "Review not found");
        };

        let refined = match generate_refinement_prompt(&summary, &feedback) {
            Ok(prompt) => self.provider.generate(&prompt, &self.options).await.map_err(|e| e.to_string()),
            Err(e) => Err(e.to_string()),
        };

        match refined {
            Ok(refinement) => {
                self.set_status(review_id, ReviewStatus::Completed);
                HumanReviewOutcome {
                    status: ReviewStatus::Completed,
                    review_id: review_id.to_string(),
                    quality_score: Some(blended_quality_score(judge_score, feedback.overall_rating)),
                    feedback: Some(feedback),
                    refinement: Some(refinement),
                    processed_at: Some(Utc::now()),
                    error: None,
                }
            }
            Err(reason) => {
                log::warn!("⚠️ Review refinement failed for {}: {}", review_id, reason);
                self.set_status(review_id, ReviewStatus::Error);
                HumanReviewOutcome::failed(review_id, &reason)
            }
        }
    }

    fn set_status(&self, review_id: &str, status: ReviewStatus) {
        if let Some(review) = self.history().iter_mut().find(|review| review.review_id == review_id) {
            review.status = status;
        }
    }

    pub fn statistics(&self) -> ReviewStatistics {
        let history = self.history();
        if history.is_empty() {
            return ReviewStatistics::default();
        }

        let completed = history.iter().filter(|r| r.status == ReviewStatus::Completed).count();
        let pending = history.iter().filter(|r| r.status == ReviewStatus::PendingReview).count();

        ReviewStatistics {
            total_reviews: history.len(),
            completed_reviews: completed,
            pending_reviews: pending,
            completion_rate: completed as f64 / history.len() as f64,
        }
    }
}

/// `judge*0.7 + (rating/5*100)*0.3`; the judge score alone when there is no rating.
pub fn blended_quality_score(judge_score: u32, rating: u8) -> f64 {
    if rating == 0 {
        return f64::from(judge_score);
    }
    let reviewer_score = (f64::from(rating).min(MAX_RATING) / MAX_RATING) * 100.0;
    let blended = f64::from(judge_score) * JUDGE_WEIGHT + reviewer_score * REVIEWER_WEIGHT;
    (blended * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::ai_provider_error::AiProviderError;
    use crate::enums::severity_tier::SeverityTier;
    use crate::structs::cve_analysis::CveAnalysis;
    use crate::structs::doc_analysis::DocAnalysis;
    use crate::structs::git_analysis::GitAnalysis;
    use crate::traits::ai_provider::MockAiProvider;

    fn inputs() -> (ProbeResults, ImpactAssessment) {
        let probes = ProbeResults {
            git: GitAnalysis::no_commits(90),
            cve: CveAnalysis::no_dependencies(),
            doc: DocAnalysis::no_source_files(false),
        };
        let impact = ImpactAssessment {
            impact_score: 33.0,
            severity: SeverityTier::Medium,
            key_risks: vec!["Low documentation coverage - maintainability concern".to_string()],
            recommendations: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            narrative: String::new(),
        };
        (probes, impact)
    }

    #[test]
    fn blended_score_weights_judge_and_reviewer() {
        assert_eq!(blended_quality_score(80, 4), 80.0);
        assert_eq!(blended_quality_score(70, 5), 79.0);
        assert_eq!(blended_quality_score(65, 0), 65.0);
    }

    #[test]
    fn request_has_five_questions_and_top_three_recommendations() {
        let review_loop = HumanReviewLoop::new(Arc::new(MockAiProvider::new()), GenerationOptions::new(0.4, 100));
        let (probes, impact) = inputs();

        let request = review_loop.request_review(&probes, &impact, None);

        assert_eq!(request.questions.len(), 5);
        assert_eq!(request.questions[2].question_type, QuestionType::Rating1To5);
        assert_eq!(request.summary.top_recommendations, vec!["a", "b", "c"]);
        assert_eq!(request.focus_areas, vec!["all"]);
        assert_eq!(review_loop.statistics().pending_reviews, 1);
    }

    #[test]
    fn history_keeps_only_recent_requests() {
        let review_loop = HumanReviewLoop::new(Arc::new(MockAiProvider::new()), GenerationOptions::new(0.4, 100));
        let (probes, impact) = inputs();

        let first = review_loop.request_review(&probes, &impact, None);
        for _ in 0..MAX_REVIEW_HISTORY {
            review_loop.request_review(&probes, &impact, None);
        }

        assert_eq!(review_loop.statistics().total_reviews, MAX_REVIEW_HISTORY);
        assert!(review_loop.history().iter().all(|review| review.review_id != first.review_id));
    }

    #[tokio::test]
    async fn processed_feedback_completes_the_review() {
        let mut provider = MockAiProvider::new();
        provider
            .expect_generate()
            .withf(|prompt, options| prompt.contains("HUMAN FEEDBACK") && (options.temperature - 0.4).abs() < f32::EPSILON)
            .returning(|_, _| Ok("{\"validated_findings\": []}".to_string()));
        let review_loop = HumanReviewLoop::new(Arc::new(provider), GenerationOptions::new(0.4, 100));
        let (probes, impact) = inputs();

        let request = review_loop.request_review(&probes, &impact, None);
        let feedback = review_loop.simulate_review(&request);
        let outcome = review_loop.process_feedback(&request.review_id, feedback, 80).await;

        assert_eq!(outcome.status, ReviewStatus::Completed);
        assert_eq!(outcome.quality_score, Some(80.0));
        assert!(outcome.refinement.is_some());
        assert_eq!(review_loop.statistics().completed_reviews, 1);
    }

    #[tokio::test]
    async fn refinement_failure_is_contained() {
        let mut provider = MockAiProvider::new();
        provider
            .expect_generate()
            .returning(|_, _| Err(AiProviderError::ApiError("quota".to_string())));
        let review_loop = HumanReviewLoop::new(Arc::new(provider), GenerationOptions::new(0.4, 100));
        let (probes, impact) = inputs();

        let request = review_loop.request_review(&probes, &impact, None);
        let feedback = review_loop.simulate_review(&request);
        let outcome = review_loop.process_feedback(&request.review_id, feedback, 80).await;

        assert_eq!(outcome.status, ReviewStatus::Error);
        assert!(outcome.error.unwrap_or_default().contains("quota"));
    }

    #[tokio::test]
    async fn unknown_review_id_is_an_error_outcome() {
        let review_loop = HumanReviewLoop::new(Arc::new(MockAiProvider::new()), GenerationOptions::new(0.4, 100));
        let (probes, impact) = inputs();
        let request = review_loop.request_review(&probes, &impact, None);
        let feedback = review_loop.simulate_review(&request);

        let outcome = review_loop.process_feedback("review_missing", feedback, 50).await;

        assert_eq!(outcome.error.as_deref(), Some("Review not found"));
    }
}
