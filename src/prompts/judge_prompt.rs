pub const JUDGE_PROMPT_HEADER: &str = r#"You are an expert code quality auditor evaluating a technical debt analysis report.

ANALYSIS RESULTS TO EVALUATE:"#;

pub const JUDGE_PROMPT_INSTRUCTIONS: &str = r#"
EVALUATION CRITERIA:
Rate each dimension on a scale of 0-100:

1. COMPLETENESS (0-100): Does the analysis cover all important aspects?
2. ACCURACY (0-100): Are the findings technically sound and precise?
3. ACTIONABILITY (0-100): Are recommendations clear and implementable?
4. CLARITY (0-100): Is the report well-structured and understandable?

Provide your evaluation in this EXACT format:

OVERALL_SCORE: [0-100]

COMPLETENESS: [0-100]
ACCURACY: [0-100]
ACTIONABILITY: [0-100]
CLARITY: [0-100]

STRENGTHS:
- [strength 1]
- [strength 2]
- [strength 3]

WEAKNESSES:
- [weakness 1]
- [weakness 2]

RECOMMENDATIONS:
- [recommendation 1]
- [recommendation 2]
"#;
