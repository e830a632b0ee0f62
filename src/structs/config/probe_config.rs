use std::time::Duration;
use serde::{Deserialize, Serialize};
use crate::config::constants::timeout_duration;
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProbeConfig {
    #[serde(default = "ConfigHelper::default_lookback_days")]
    pub git_lookback_days: u32,

    #[serde(default = "ConfigHelper::default_nvd_api_key_env")]
    pub nvd_api_key_env: String,

    /// Per-probe wall clock limit; `None` waits indefinitely.
    #[serde(default = "ConfigHelper::default_probe_timeout_secs")]
    pub probe_timeout_secs: Option<u64>,
}

impl ProbeConfig {
    pub fn nvd_api_key(&self) -> Option<String> {
        std::env::var(&self.nvd_api_key_env).ok().filter(|key| !key.trim().is_empty())
    }

    pub fn probe_timeout(&self) -> Option<Duration> {
        self.probe_timeout_secs.map(timeout_duration)
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            git_lookback_days: ConfigHelper::default_lookback_days(),
            nvd_api_key_env: ConfigHelper::default_nvd_api_key_env(),
            probe_timeout_secs: ConfigHelper::default_probe_timeout_secs(),
        }
    }
}
