use super::text_generator::{GenerationError, TextGenerator};
use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use backoff::{ExponentialBackoff, ExponentialBackoffBuilder};
use std::sync::Arc;
use std::time::Duration;

/// Gemini story generation through the OpenAI-compatible chat completions API
pub struct GeminiTextRepository {
    client: Arc<Client<OpenAIConfig>>,
    model: String,
}

impl GeminiTextRepository {
    pub fn new(client: Arc<Client<OpenAIConfig>>, model: String) -> Self {
        Self { client, model }
    }

    /// Build a client for the given endpoint and key
    ///
    /// Each generation is a single attempt: rate limits surface as errors
    /// instead of being retried while the studio waits.
    pub fn from_credentials(api_base: &str, api_key: &str, model: String) -> Self {
        let config = OpenAIConfig::new()
            .with_api_base(api_base)
            .with_api_key(api_key);
        let client = Client::with_config(config).with_backoff(single_attempt());
        Self::new(Arc::new(client), model)
    }
}

fn single_attempt() -> ExponentialBackoff {
    ExponentialBackoffBuilder::new()
        .with_max_elapsed_time(Some(Duration::ZERO))
        .build()
}

#[async_trait]
impl TextGenerator for GeminiTextRepository {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let start_time = std::time::Instant::now();

        tracing::info!(
            model = %self.model,
            prompt_length = prompt.len(),
            "Calling Gemini generation API"
        );

        let message: ChatCompletionRequestMessage = ChatCompletionRequestUserMessageArgs::default()
            .content(prompt)
            .build()
            .map_err(|e| GenerationError::Request(e.to_string()))?
            .into();

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(vec![message])
            .build()
            .map_err(|e| GenerationError::Request(e.to_string()))?;

        let response = self.client.chat().create(request).await.map_err(|e| {
            tracing::error!(
                error = %e,
                model = %self.model,
                "Gemini generation API call failed"
            );
            GenerationError::Request(e.to_string())
        })?;

        let text = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or(GenerationError::EmptyResponse)?;

        tracing::info!(
            model = %self.model,
            story_length = text.len(),
            duration_ms = start_time.elapsed().as_millis() as u64,
            "Story generated"
        );

        Ok(text)
    }
}
