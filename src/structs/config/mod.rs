pub mod ai_config;
pub mod config;
pub mod memory_config;
pub mod probe_config;
pub mod session_config;
