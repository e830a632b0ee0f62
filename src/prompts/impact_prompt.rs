pub const IMPACT_PROMPT_HEADER: &str = "Analyze the business impact of these technical debt findings:";

pub const IMPACT_PROMPT_INSTRUCTIONS: &str = r#"
Provide:
1. Overall impact score (0-100)
2. Severity level (low/medium/high/critical)
3. Top 3 key risks
4. Top 3 recommendations

Format as a brief analysis."#;
