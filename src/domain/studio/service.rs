use super::model::StudioState;
use crate::domain::library::{LibraryServiceApi, LibraryServiceError, SavedStoryRecord};
use crate::domain::story::{StoryRequestParameters, StoryServiceApi};
use std::sync::Arc;
use tokio::sync::Mutex;

/// The story studio: form state, generation, narration and saving.
///
/// Remote failures are logged and swallowed; callers only ever see the
/// resulting state. The state lock is never held across a remote call.
pub struct StoryStudio {
    story_service: Arc<dyn StoryServiceApi>,
    library: Arc<dyn LibraryServiceApi>,
    state: Mutex<StudioState>,
}

impl StoryStudio {
    pub fn new(story_service: Arc<dyn StoryServiceApi>, library: Arc<dyn LibraryServiceApi>) -> Self {
        Self {
            story_service,
            library,
            state: Mutex::new(StudioState::default()),
        }
    }

    pub async fn state(&self) -> StudioState {
        self.state.lock().await.clone()
    }

    pub async fn update_settings(&self, settings: StoryRequestParameters) -> StudioState {
        let mut state = self.state.lock().await;
        state.settings = settings;
        state.clone()
    }

    pub async fn set_title(&self, title: String) -> StudioState {
        let mut state = self.state.lock().await;
        state.title = title;
        state.clone()
    }

    pub async fn saved_stories(&self) -> Vec<SavedStoryRecord> {
        self.library.list_stories().await
    }

    /// Generate a new story from the current settings.
    ///
    /// Runs on its own task so a dropped request cannot leave the studio
    /// stuck in the loading state.
    pub async fn generate_story(self: &Arc<Self>) -> StudioState {
        let studio = Arc::clone(self);
        match tokio::spawn(async move { studio.run_generation().await }).await {
            Ok(state) => state,
            Err(e) => {
                tracing::error!(error = %e, "Story generation task failed");
                let mut state = self.state.lock().await;
                state.is_loading = false;
                state.clone()
            }
        }
    }

    /// Narrate the current story
    pub async fn generate_audio(self: &Arc<Self>) -> StudioState {
        let studio = Arc::clone(self);
        match tokio::spawn(async move { studio.run_synthesis().await }).await {
            Ok(state) => state,
            Err(e) => {
                tracing::error!(error = %e, "Audio generation task failed");
                self.state().await
            }
        }
    }

    /// Save the current story under the current title, then clear the title.
    ///
    /// A missing title or story makes this a no-op.
    pub async fn save_story(&self) -> Result<StudioState, LibraryServiceError> {
        let (title, story, settings) = {
            let state = self.state.lock().await;
            (state.title.clone(), state.story.clone(), state.settings.clone())
        };

        let saved = self
            .library
            .save_story(&title, &story, &settings.main_character, settings.theme)
            .await?;

        let mut state = self.state.lock().await;
        if saved.is_some() && state.title == title {
            state.title.clear();
        }
        Ok(state.clone())
    }

    async fn run_generation(&self) -> StudioState {
        let settings = {
            let mut state = self.state.lock().await;
            if state.is_loading {
                tracing::debug!("Story generation already in progress");
                return state.clone();
            }
            state.is_loading = true;
            state.settings.clone()
        };

        let result = self.story_service.generate_story(&settings).await;

        let mut state = self.state.lock().await;
        match result {
            Ok(story) => {
                state.story = story;
                state.audio_url = None;
                state.story_revision += 1;
            }
            Err(e) => {
                tracing::error!(error = %e, "Error generating story");
            }
        }
        state.is_loading = false;
        state.clone()
    }

    async fn run_synthesis(&self) -> StudioState {
        let (story, revision) = {
            let state = self.state.lock().await;
            if !state.has_story() {
                tracing::debug!("No story to narrate");
                return state.clone();
            }
            (state.story.clone(), state.story_revision)
        };

        let result = self.story_service.synthesize(&story).await;

        let mut state = self.state.lock().await;
        match result {
            Ok(audio_url) if state.story_revision == revision => {
                state.audio_url = Some(audio_url);
            }
            Ok(audio_url) => {
                tracing::debug!(
                    audio_url = %audio_url,
                    "Discarding audio for a story that has since been replaced"
                );
            }
            Err(e) => {
                tracing::error!(error = %e, "Error generating audio");
            }
        }
        state.clone()
    }
}
