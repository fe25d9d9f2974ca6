use async_trait::async_trait;
use bedtime_stories::infrastructure::repositories::{
    GenerationError, SpeechSynthesizer, SynthesisError, TextGenerator,
};
use parking_lot::Mutex;
use std::collections::VecDeque;

pub const DEFAULT_STORY: &str = "Once upon a time, Mia sailed to the moon and learned to share.";

/// Stands in for Gemini: replays queued answers, then a default story
#[derive(Default)]
pub struct FakeGenerator {
    responses: Mutex<VecDeque<Result<String, GenerationError>>>,
    prompts: Mutex<Vec<String>>,
}

impl FakeGenerator {
    pub fn answer(&self, story: &str) {
        self.responses.lock().push_back(Ok(story.to_string()));
    }

    pub fn fail(&self, message: &str) {
        self.responses
            .lock()
            .push_back(Err(GenerationError::Request(message.to_string())));
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().clone()
    }
}

#[async_trait]
impl TextGenerator for FakeGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        self.prompts.lock().push(prompt.to_string());
        self.responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| Ok(DEFAULT_STORY.to_string()))
    }
}

/// Stands in for Gooey: numbered audio urls unless told to fail
#[derive(Default)]
pub struct FakeSynthesizer {
    failures: Mutex<VecDeque<u16>>,
    texts: Mutex<Vec<String>>,
}

impl FakeSynthesizer {
    pub fn fail_next(&self, status: u16) {
        self.failures.lock().push_back(status);
    }

    pub fn texts(&self) -> Vec<String> {
        self.texts.lock().clone()
    }
}

#[async_trait]
impl SpeechSynthesizer for FakeSynthesizer {
    async fn synthesize(&self, text: &str) -> Result<String, SynthesisError> {
        let call = {
            let mut texts = self.texts.lock();
            texts.push(text.to_string());
            texts.len()
        };

        if let Some(status) = self.failures.lock().pop_front() {
            return Err(SynthesisError::Status {
                status,
                body: "provider error".to_string(),
            });
        }

        Ok(format!("https://audio.test/story-{}.mp3", call))
    }
}
