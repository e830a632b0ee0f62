pub mod ai_provider_error;
pub mod analysis_type;
pub mod commands;
pub mod ecosystem;
pub mod judge_dimension;
pub mod message_role;
pub mod phase_status;
pub mod pipeline_phase;
pub mod probe_status;
pub mod question_type;
pub mod review_status;
pub mod run_status;
pub mod severity_tier;
pub mod vulnerability_severity;
