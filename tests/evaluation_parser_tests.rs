use archaeologist::enums::judge_dimension::JudgeDimension;
use archaeologist::services::evaluation_parser::parse_evaluation;

use crate::common::JUDGE_RESPONSE;

#[test]
fn well_formed_response_round_trips() {
    let record = parse_evaluation(JUDGE_RESPONSE);

    assert_eq!(record.overall_score, 82);
    assert_eq!(record.dimension(JudgeDimension::Completeness), Some(85));
    assert_eq!(record.dimension(JudgeDimension::Accuracy), Some(80));
    assert_eq!(record.dimension(JudgeDimension::Actionability), Some(78));
    assert_eq!(record.dimension(JudgeDimension::Clarity), Some(88));
    assert_eq!(
        record.strengths,
        vec!["Covers all three probes".to_string(), "Prioritises the critical CVE".to_string()]
    );
    assert_eq!(record.weaknesses, vec!["Churn files are not ranked by owner".to_string()]);
    assert_eq!(record.recommendations, vec!["Add remediation estimates".to_string()]);
    assert!(!record.is_error());
}

#[test]
fn three_items_per_section() {
    let response = "\
OVERALL_SCORE: 85
COMPLETENESS: 90
ACCURACY: 80
ACTIONABILITY: 75
CLARITY: 95

STRENGTHS:
- Clear severity ranking
- Concrete file names
- Cites CVE identifiers

WEAKNESSES:
- No effort estimates
- Churn is not tied to owners
- Narrative repeats the numbers

RECOMMENDATIONS:
- Add remediation estimates
- Group findings by team
- Link CVEs to advisories
";
    let record = parse_evaluation(response);

    assert_eq!(record.overall_score, 85);
    assert_eq!(record.dimension(JudgeDimension::Completeness), Some(90));
    assert_eq!(record.dimension(JudgeDimension::Accuracy), Some(80));
    assert_eq!(record.dimension(JudgeDimension::Actionability), Some(75));
    assert_eq!(record.dimension(JudgeDimension::Clarity), Some(95));
    assert_eq!(record.strengths.len(), 3);
    assert_eq!(record.weaknesses.len(), 3);
    assert_eq!(record.recommendations.len(), 3);
    assert_eq!(record.recommendations[2], "Link CVEs to advisories");
}

#[test]
fn missing_overall_score_falls_back_to_dimension_mean() {
    let response = "COMPLETENESS: 90\nACCURACY: 80\nACTIONABILITY: 75\nCLARITY: 95\n";
    let record = parse_evaluation(response);

    // (90 + 80 + 75 + 95) / 4
    assert_eq!(record.overall_score, 85);

    let uneven = parse_evaluation("COMPLETENESS: 80\nACCURACY: 90\nACTIONABILITY: 85\nCLARITY: 86\n");
    // 341 / 4 truncated
    assert_eq!(uneven.overall_score, 85);
}

#[test]
fn zero_overall_score_is_also_backfilled() {
    let record = parse_evaluation("OVERALL_SCORE: 0\nCLARITY: 70\nACCURACY: 60");
    assert_eq!(record.overall_score, 65);
}

#[test]
fn malformed_response_yields_empty_record() {
    let record = parse_evaluation("The report looks fine to me.\n- stray bullet\nSCORE = high");

    assert_eq!(record.overall_score, 0);
    assert!(record.dimension_scores.is_empty());
    assert!(record.strengths.is_empty());
    assert!(record.weaknesses.is_empty());
    assert!(record.recommendations.is_empty());
}

#[test]
fn out_of_range_and_unparseable_scores() {
    let record = parse_evaluation("OVERALL_SCORE: 140\nCOMPLETENESS: lots\nCLARITY:  77 \n");

    assert_eq!(record.overall_score, 100);
    assert_eq!(record.dimension(JudgeDimension::Completeness), None);
    assert_eq!(record.dimension(JudgeDimension::Clarity), Some(77));
}
