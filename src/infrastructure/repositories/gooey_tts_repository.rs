use super::speech_synthesizer::{SpeechSynthesizer, SynthesisError};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
struct GooeyTtsRequest<'a> {
    text_prompt: &'a str,
    tts_provider: &'a str,
    elevenlabs_voice_id: &'a str,
}

/// Gooey answers either with the audio url at the top level or inside the
/// `output` envelope of its v2 API
#[derive(Debug, Deserialize)]
struct GooeyTtsResponse {
    audio_url: Option<String>,
    output: Option<GooeyTtsOutput>,
}

#[derive(Debug, Deserialize)]
struct GooeyTtsOutput {
    audio_url: Option<String>,
}

impl GooeyTtsResponse {
    fn into_audio_url(self) -> Option<String> {
        self.audio_url
            .or_else(|| self.output.and_then(|output| output.audio_url))
            .filter(|url| !url.is_empty())
    }
}

/// Gooey TextToSpeech implementation of the speech synthesizer
pub struct GooeyTtsRepository {
    http_client: reqwest::Client,
    endpoint: String,
    api_key: String,
    tts_provider: String,
    voice_id: String,
}

impl GooeyTtsRepository {
    pub fn new(endpoint: String, api_key: String, tts_provider: String, voice_id: String) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            endpoint,
            api_key,
            tts_provider,
            voice_id,
        }
    }
}

#[async_trait]
impl SpeechSynthesizer for GooeyTtsRepository {
    async fn synthesize(&self, text: &str) -> Result<String, SynthesisError> {
        let start_time = std::time::Instant::now();

        tracing::info!(
            provider = %self.tts_provider,
            voice = %self.voice_id,
            text_length = text.len(),
            text_preview = %text.chars().take(200).collect::<String>(),
            "Calling Gooey TTS API"
        );

        let payload = GooeyTtsRequest {
            text_prompt: text,
            tts_provider: &self.tts_provider,
            elevenlabs_voice_id: &self.voice_id,
        };

        let response = self
            .http_client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| SynthesisError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SynthesisError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let audio_url = response
            .json::<GooeyTtsResponse>()
            .await
            .map_err(|e| SynthesisError::Request(format!("invalid response body: {}", e)))?
            .into_audio_url()
            .ok_or(SynthesisError::MissingAudioUrl)?;

        tracing::info!(
            audio_url = %audio_url,
            duration_ms = start_time.elapsed().as_millis() as u64,
            "Gooey TTS audio ready"
        );

        Ok(audio_url)
    }
}
