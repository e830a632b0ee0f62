use crate::config::constants::{GEMINI_BASE_URL, GOOGLE_API_KEY_ENV, NVD_API_KEY_ENV};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_model() -> String {
        "gemini-2.0-flash".to_string()
    }

    pub fn default_max_tokens() -> u32 {
        8000
    }

    pub fn default_temperature() -> f32 {
        0.3
    }

    pub fn default_judge_model() -> String {
        "gemini-2.5-flash-lite".to_string()
    }

    pub fn default_judge_max_tokens() -> u32 {
        2000
    }

    pub fn default_judge_temperature() -> f32 {
        0.3
    }

    pub fn default_review_temperature() -> f32 {
        0.4
    }

    pub fn default_api_key_env() -> String {
        GOOGLE_API_KEY_ENV.to_string()
    }

    pub fn default_base_url() -> String {
        GEMINI_BASE_URL.to_string()
    }

    pub fn default_request_timeout_secs() -> u64 {
        120
    }

    pub fn default_lookback_days() -> u32 {
        90
    }

    pub fn default_nvd_api_key_env() -> String {
        NVD_API_KEY_ENV.to_string()
    }

    pub fn default_probe_timeout_secs() -> Option<u64> {
        Some(300)
    }

    pub fn default_max_sessions() -> usize {
        100
    }
}
