pub mod impact_prompt;
pub mod judge_prompt;
pub mod refinement_prompt;
