use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    #[error("synthesis request failed: {0}")]
    Request(String),
    #[error("synthesis provider returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("synthesis response did not contain an audio url")]
    MissingAudioUrl,
}

/// Capability for turning story text into a playable audio resource.
///
/// Implementations return a URL the client can bind into an audio element;
/// the audio itself is hosted by the provider.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(&self, text: &str) -> Result<String, SynthesisError>;
}
