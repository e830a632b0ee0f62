pub const REFINEMENT_PROMPT_HEADER: &str = "Based on human reviewer feedback, refine the technical debt analysis.";

pub const REFINEMENT_PROMPT_INSTRUCTIONS: &str = r#"
Provide refined analysis incorporating the human feedback. Consider:
1. Validate or correct AI findings
2. Adjust priorities based on human context
3. Update recommendations based on feedback
4. Note any learning points for future analyses

Format response as JSON with:
- validated_findings: corrected findings
- priority_adjustments: any priority changes
- updated_recommendations: refined recommendations
- learning_points: insights for future analyses
"#;
