use async_trait::async_trait;
use crate::enums::ai_provider_error::AiProviderError;
use crate::structs::generation_options::GenerationOptions;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AiProvider: Send + Sync {

    async fn generate(&self, prompt: &str, options: &GenerationOptions) -> Result<String, AiProviderError>;

    fn model_name(&self) -> &str;
}
