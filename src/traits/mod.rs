pub mod ai_provider;
pub mod probe_suite;
