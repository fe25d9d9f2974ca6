use super::error::StoryServiceError;
use super::model::StoryRequestParameters;
use super::prompt::{build_story_prompt, clean_for_speech};
use crate::infrastructure::repositories::{SpeechSynthesizer, TextGenerator};
use async_trait::async_trait;
use moka::future::Cache;
use std::sync::Arc;
use std::time::Duration;

pub struct StoryService {
    generator: Arc<dyn TextGenerator>,
    synthesizer: Arc<dyn SpeechSynthesizer>,
    audio_cache: Option<Cache<String, String>>,
}

impl StoryService {
    pub fn new(
        generator: Arc<dyn TextGenerator>,
        synthesizer: Arc<dyn SpeechSynthesizer>,
        audio_cache_enabled: bool,
    ) -> Self {
        let audio_cache = if audio_cache_enabled {
            Some(
                Cache::builder()
                    .max_capacity(100)
                    .time_to_idle(Duration::from_secs(30 * 60)) // refreshed on access
                    .build(),
            )
        } else {
            None
        };

        Self {
            generator,
            synthesizer,
            audio_cache,
        }
    }
}

#[async_trait]
pub trait StoryServiceApi: Send + Sync {
    /// Generate a bedtime story for the given form parameters
    async fn generate_story(
        &self,
        params: &StoryRequestParameters,
    ) -> Result<String, StoryServiceError>;

    /// Synthesize the story to speech and return the audio url
    async fn synthesize(&self, story: &str) -> Result<String, StoryServiceError>;
}

#[async_trait]
impl StoryServiceApi for StoryService {
    async fn generate_story(
        &self,
        params: &StoryRequestParameters,
    ) -> Result<String, StoryServiceError> {
        let prompt = build_story_prompt(params);

        tracing::info!(
            main_character = %params.main_character,
            age = %params.age,
            theme = %params.theme,
            mood = %params.mood,
            "Story generation request"
        );

        self.generator
            .generate(&prompt)
            .await
            .map_err(|e| StoryServiceError::Dependency(e.to_string()))
    }

    async fn synthesize(&self, story: &str) -> Result<String, StoryServiceError> {
        let text = clean_for_speech(story);
        if text.is_empty() {
            return Err(StoryServiceError::Invalid(
                "Story text cannot be empty".to_string(),
            ));
        }

        if let Some(cache) = &self.audio_cache {
            if let Some(audio_url) = cache.get(&text).await {
                tracing::info!(
                    audio_url = %audio_url,
                    "Audio cache hit - returning cached url"
                );
                return Ok(audio_url);
            }
        }

        let audio_url = self
            .synthesizer
            .synthesize(&text)
            .await
            .map_err(|e| StoryServiceError::Dependency(e.to_string()))?;

        if let Some(cache) = &self.audio_cache {
            cache.insert(text, audio_url.clone()).await;
        }

        Ok(audio_url)
    }
}
