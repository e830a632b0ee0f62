use std::sync::{Mutex, MutexGuard};
use crate::enums::judge_dimension::JudgeDimension;
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::quality_summary::QualitySummary;

#[derive(Default)]
struct QualityTotals {
    analyses: usize,
    quality: f64,
    completeness: f64,
    accuracy: f64,
    actionability: f64,
    clarity: f64,
    duration_secs: f64,
    min_duration_secs: Option<f64>,
    max_duration_secs: Option<f64>,
    issues: usize,
    vulnerabilities: usize,
    rating: f64,
    rated: usize,
}

/// Running quality totals across runs. Only successful runs are counted.
#[derive(Default)]
pub struct QualityAggregator {
    totals: Mutex<QualityTotals>,
}

impl QualityAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, QualityTotals> {
        self.totals.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// The reviewed quality score wins over the bare judge score when present.
    pub fn record(&self, result: &AnalysisResult) {
        if !result.is_success() {
            return;
        }

        let evaluation = result.evaluation.as_ref();
        let dimension = |d: JudgeDimension| f64::from(evaluation.and_then(|e| e.dimension(d)).unwrap_or(0));
        let judge_score = f64::from(evaluation.map_or(0, |e| e.overall_score));
        let review = result.human_review.as_ref();
        let quality = review.and_then(|r| r.quality_score).unwrap_or(judge_score);
        let rating = review
            .and_then(|r| r.feedback.as_ref())
            .map(|f| f.overall_rating)
            .filter(|rating| *rating > 0);

        let mut totals = self.lock();
        totals.analyses += 1;
        totals.quality += quality;
        totals.completeness += dimension(JudgeDimension::Completeness);
        totals.accuracy += dimension(JudgeDimension::Accuracy);
        totals.actionability += dimension(JudgeDimension::Actionability);
        totals.clarity += dimension(JudgeDimension::Clarity);

        let duration = result.duration_secs;
        totals.duration_secs += duration;
        totals.min_duration_secs = Some(totals.min_duration_secs.map_or(duration, |min| min.min(duration)));
        totals.max_duration_secs = Some(totals.max_duration_secs.map_or(duration, |max| max.max(duration)));

        totals.issues += result.report.as_ref().map_or(0, |r| r.executive_summary.total_issues);
        totals.vulnerabilities += result.probe_results.as_ref().map_or(0, |p| p.cve.vulnerabilities.len());

        if let Some(rating) = rating {
            totals.rating += f64::from(rating);
            totals.rated += 1;
        }
    }

    pub fn summary(&self) -> QualitySummary {
        let totals = self.lock();
        if totals.analyses == 0 {
            return QualitySummary::default();
        }

        let n = totals.analyses as f64;
        QualitySummary {
            total_analyses: totals.analyses,
            average_quality: totals.quality / n,
            average_completeness: totals.completeness / n,
            average_accuracy: totals.accuracy / n,
            average_actionability: totals.actionability / n,
            average_clarity: totals.clarity / n,
            average_duration_secs: totals.duration_secs / n,
            min_duration_secs: totals.min_duration_secs,
            max_duration_secs: totals.max_duration_secs,
            total_issues: totals.issues,
            total_vulnerabilities: totals.vulnerabilities,
            average_issues_per_analysis: totals.issues as f64 / n,
            average_rating: if totals.rated == 0 { 0.0 } else { totals.rating / totals.rated as f64 },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_aggregator_reports_zeroes() {
        let summary = QualityAggregator::new().summary();
        assert_eq!(summary, QualitySummary::default());
        assert_eq!(summary.min_duration_secs, None);
    }
}
