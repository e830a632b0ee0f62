use std::collections::BTreeMap;
use crate::enums::judge_dimension::JudgeDimension;
use crate::structs::evaluation_record::EvaluationRecord;

const OVERALL_SCORE_FIELD: &str = "OVERALL_SCORE:";
const COMPLETENESS_FIELD: &str = "COMPLETENESS:";
const ACCURACY_FIELD: &str = "ACCURACY:";
const ACTIONABILITY_FIELD: &str = "ACTIONABILITY:";
const CLARITY_FIELD: &str = "CLARITY:";
const STRENGTHS_MARKER: &str = "STRENGTHS:";
const WEAKNESSES_MARKER: &str = "WEAKNESSES:";
const RECOMMENDATIONS_MARKER: &str = "RECOMMENDATIONS:";
const ITEM_PREFIX: &str = "- ";
const MAX_SCORE: u32 = 100;

const DIMENSION_FIELDS: &[(&str, JudgeDimension)] = &[
    (COMPLETENESS_FIELD, JudgeDimension::Completeness),
    (ACCURACY_FIELD, JudgeDimension::Accuracy),
    (ACTIONABILITY_FIELD, JudgeDimension::Actionability),
    (CLARITY_FIELD, JudgeDimension::Clarity),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Strengths,
    Weaknesses,
    Recommendations,
}

/// Line cursor over a judge response. Never fails: unknown or malformed lines are skipped.
pub struct EvaluationParser {
    lines: Vec<String>,
    current: usize,
    section: Option<Section>,
}

impl EvaluationParser {
    pub fn new(input: &str) -> Self {
        Self {
            lines: input.lines().map(|s| s.trim().to_string()).collect(),
            current: 0,
            section: None,
        }
    }

    pub fn parse(&mut self) -> EvaluationRecord {
        let mut overall: Option<u32> = None;
        let mut dimensions: BTreeMap<JudgeDimension, u32> = BTreeMap::new();
        let mut strengths = Vec::new();
        let mut weaknesses = Vec::new();
        let mut recommendations = Vec::new();

        while !self.is_eof() {
            let line = self.current_line();

            if let Some(value) = Self::field_value(line, OVERALL_SCORE_FIELD) {
                overall = Self::parse_score(value);
            } else if let Some((dimension, value)) = Self::dimension_value(line) {
                if let Some(score) = Self::parse_score(value) {
                    dimensions.insert(dimension, score);
                }
            } else if line == STRENGTHS_MARKER {
                self.section = Some(Section::Strengths);
            } else if line == WEAKNESSES_MARKER {
                self.section = Some(Section::Weaknesses);
            } else if line == RECOMMENDATIONS_MARKER {
                self.section = Some(Section::Recommendations);
            } else if let Some(item) = line.strip_prefix(ITEM_PREFIX) {
                let item = item.trim().to_string();
                match self.section {
                    Some(Section::Strengths) => strengths.push(item),
                    Some(Section::Weaknesses) => weaknesses.push(item),
                    Some(Section::Recommendations) => recommendations.push(item),
                    None => {}
                }
            }

            self.advance();
        }

        let overall_score = match overall {
            Some(score) if score > 0 => score,
            _ => Self::mean_of(&dimensions).unwrap_or(0),
        };

        EvaluationRecord {
            overall_score,
            dimension_scores: dimensions,
            strengths,
            weaknesses,
            recommendations,
            ..EvaluationRecord::default()
        }
    }

    fn field_value<'a>(line: &'a str, field: &str) -> Option<&'a str> {
        line.strip_prefix(field)
            .map(|rest| rest.split(':').next().unwrap_or_default())
    }

    fn dimension_value(line: &str) -> Option<(JudgeDimension, &str)> {
        DIMENSION_FIELDS
            .iter()
            .find_map(|(field, dimension)| Self::field_value(line, field).map(|value| (*dimension, value)))
    }

    fn parse_score(value: &str) -> Option<u32> {
        value.trim().parse::<u32>().ok().map(|score| score.min(MAX_SCORE))
    }

    /// Truncated mean, `None` when no dimension parsed.
    fn mean_of(dimensions: &BTreeMap<JudgeDimension, u32>) -> Option<u32> {
        if dimensions.is_empty() {
            return None;
        }
        let sum: u32 = dimensions.values().sum();
        Some(sum / dimensions.len() as u32)
    }

    fn current_line(&self) -> &str {
        self.lines.get(self.current).map(|s| s.as_str()).unwrap_or("")
    }

    fn advance(&mut self) {
        if self.current < self.lines.len() {
            self.current += 1;
        }
    }

    fn is_eof(&self) -> bool {
        self.current >= self.lines.len()
    }
}

pub fn parse_evaluation(input: &str) -> EvaluationRecord {
    EvaluationParser::new(input).parse()
}
