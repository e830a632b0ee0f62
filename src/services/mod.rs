pub mod ai_providers;
pub mod dependency_scanner;
pub mod documentation_analyzer;
pub mod evaluation_parser;
pub mod filesystem_probes;
pub mod git_analyzer;
pub mod human_review_loop;
pub mod impact_scorer;
pub mod llm_judge;
pub mod memory_bank;
pub mod metrics_collector;
pub mod orchestrator;
pub mod phase_tracer;
pub mod quality_aggregator;
pub mod report_builder;
pub mod session_store;
