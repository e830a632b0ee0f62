use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;
use crate::structs::generation_options::GenerationOptions;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AiConfig {
    #[serde(default = "ConfigHelper::default_model")]
    pub model: String,

    #[serde(default = "ConfigHelper::default_max_tokens")]
    pub max_output_tokens: u32,

    #[serde(default = "ConfigHelper::default_temperature")]
    pub temperature: f32,

    #[serde(default = "ConfigHelper::default_judge_model")]
    pub judge_model: String,

    #[serde(default = "ConfigHelper::default_judge_max_tokens")]
    pub judge_max_output_tokens: u32,

    #[serde(default = "ConfigHelper::default_judge_temperature")]
    pub judge_temperature: f32,

    #[serde(default = "ConfigHelper::default_review_temperature")]
    pub review_temperature: f32,

    #[serde(default = "ConfigHelper::default_api_key_env")]
    pub api_key_env: String,

    #[serde(default = "ConfigHelper::default_base_url")]
    pub base_url: String,

    #[serde(default = "ConfigHelper::default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl AiConfig {
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env).ok().filter(|key| !key.trim().is_empty())
    }

    pub fn narrative_options(&self) -> GenerationOptions {
        GenerationOptions::new(self.temperature, self.max_output_tokens)
    }

    pub fn judge_options(&self) -> GenerationOptions {
        GenerationOptions::new(self.judge_temperature, self.judge_max_output_tokens)
            .with_model(self.judge_model.clone())
    }

    pub fn review_options(&self) -> GenerationOptions {
        GenerationOptions::new(self.review_temperature, self.max_output_tokens)
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            model: ConfigHelper::default_model(),
            max_output_tokens: ConfigHelper::default_max_tokens(),
            temperature: ConfigHelper::default_temperature(),
            judge_model: ConfigHelper::default_judge_model(),
            judge_max_output_tokens: ConfigHelper::default_judge_max_tokens(),
            judge_temperature: ConfigHelper::default_judge_temperature(),
            review_temperature: ConfigHelper::default_review_temperature(),
            api_key_env: ConfigHelper::default_api_key_env(),
            base_url: ConfigHelper::default_base_url(),
            request_timeout_secs: ConfigHelper::default_request_timeout_secs(),
        }
    }
}
