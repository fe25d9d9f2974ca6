use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("generation request failed: {0}")]
    Request(String),
    #[error("generation response contained no text")]
    EmptyResponse,
}

/// Capability for turning a prompt into narrative text.
/// Abstracts the underlying language model provider (Gemini, OpenAI, ...)
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Send the prompt to the model and return the generated text
    ///
    /// # Errors
    /// Returns error on transport or provider failure, or if the model
    /// answered without any text
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}
