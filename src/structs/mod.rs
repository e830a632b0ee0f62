pub mod ai;
pub mod analysis_request;
pub mod analysis_result;
pub mod cli;
pub mod config;
pub mod conversation_message;
pub mod cve_analysis;
pub mod dependency;
pub mod doc_analysis;
pub mod evaluation_record;
pub mod file_doc_stats;
pub mod final_report;
pub mod generation_options;
pub mod git_analysis;
pub mod human_review_outcome;
pub mod impact_assessment;
pub mod insight;
pub mod memory_entry;
pub mod memory_patterns;
pub mod memory_query;
pub mod memory_snapshot;
pub mod memory_statistics;
pub mod metrics_summary;
pub mod phase_span;
pub mod probe_results;
pub mod quality_summary;
pub mod review_feedback;
pub mod review_question;
pub mod review_request;
pub mod review_statistics;
pub mod session;
pub mod session_statistics;
pub mod shared_state;
