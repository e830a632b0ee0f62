use serde::{Deserialize, Serialize};
use crate::structs::generation_options::GenerationOptions;

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GeminiGenerationConfig {
    pub temperature: Option<f32>,
    pub max_output_tokens: Option<u32>,
    pub candidate_count: Option<u32>,
}

impl From<&GenerationOptions> for GeminiGenerationConfig {
    fn from(options: &GenerationOptions) -> Self {
        Self {
            temperature: Some(options.temperature),
            max_output_tokens: Some(options.max_output_tokens),
            candidate_count: Some(1),
        }
    }
}
