use serde::{Deserialize, Serialize};
use crate::structs::config::ai_config::AiConfig;
use crate::structs::config::memory_config::MemoryConfig;
use crate::structs::config::probe_config::ProbeConfig;
use crate::structs::config::session_config::SessionConfig;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub ai: AiConfig,

    #[serde(default)]
    pub probes: ProbeConfig,

    #[serde(default)]
    pub sessions: SessionConfig,

    #[serde(default)]
    pub memory: MemoryConfig,
}
