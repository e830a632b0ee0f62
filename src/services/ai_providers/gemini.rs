use std::time::Duration;
use async_trait::async_trait;
use reqwest::Client;
use crate::enums::ai_provider_error::AiProviderError;
use crate::structs::ai::gemini::gemini_content::GeminiContent;
use crate::structs::ai::gemini::gemini_generation_config::GeminiGenerationConfig;
use crate::structs::ai::gemini::gemini_request::GeminiRequest;
use crate::structs::ai::gemini::gemini_response::GeminiResponse;
use crate::structs::config::ai_config::AiConfig;
use crate::structs::generation_options::GenerationOptions;
use crate::traits::ai_provider::AiProvider;

#[derive(Clone)]
pub struct GeminiProvider {
    api_key: Option<String>,
    base_url: String,
    client: Client,
    model: String,
}

impl GeminiProvider {
    pub fn new(api_key: Option<String>, base_url: String, model: String, request_timeout: Duration) -> Result<Self, AiProviderError> {
        let client = Client::builder()
            .timeout(request_timeout)
            .build()
            .map_err(|e| AiProviderError::NetworkError(e.to_string()))?;

        Ok(Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            model,
        })
    }

    pub fn from_config(config: &AiConfig) -> Result<Self, AiProviderError> {
        Self::new(
            config.api_key(),
            config.base_url.clone(),
            config.model.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn get_request(&self, prompt: &str, options: &GenerationOptions) -> GeminiRequest {
        GeminiRequest {
            contents: vec![GeminiContent::user(prompt)],
            generation_config: Some(GeminiGenerationConfig::from(options)),
        }
    }

    fn map_status_error(status: reqwest::StatusCode, error_text: String) -> AiProviderError {
        match status.as_u16() {
            400 => AiProviderError::ApiError(format!("Bad request: {}", error_text)),
            401 => AiProviderError::AuthenticationError(error_text),
            403 => AiProviderError::ApiError(format!("Forbidden: {}", error_text)),
            429 => AiProviderError::ApiError(format!("Rate limit exceeded: {}", error_text)),
            _ => AiProviderError::ApiError(format!("HTTP {}: {}", status, error_text)),
        }
    }
}

#[async_trait]
impl AiProvider for GeminiProvider {

    async fn generate(&self, prompt: &str, options: &GenerationOptions) -> Result<String, AiProviderError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            AiProviderError::AuthenticationError("no API key configured for text generation".to_string())
        })?;

        let model = options.model.as_deref().unwrap_or(&self.model);
        let url = format!("{}/models/{}:generateContent", self.base_url, model);
        log::debug!("📦 Request model: {} (max {} tokens)", model, options.max_output_tokens);

        let response = self.client
            .post(&url)
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", api_key)
            .json(&self.get_request(prompt, options))
            .send()
            .await
            .map_err(|e| AiProviderError::NetworkError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            return Err(Self::map_status_error(status, error_text));
        }

        let body: GeminiResponse = response.json().await
            .map_err(|e| AiProviderError::SerializationError(e.to_string()))?;

        body.first_text()
            .map(|text| text.to_string())
            .ok_or_else(|| AiProviderError::EmptyResponse("No content in response".to_string()))
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
