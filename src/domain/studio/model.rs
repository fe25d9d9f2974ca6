use crate::domain::story::StoryRequestParameters;
use serde::{Deserialize, Serialize};

/// Transient state of the story studio form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudioState {
    pub settings: StoryRequestParameters,
    /// Last generated story, empty until the first successful generation
    pub story: String,
    /// Audio for `story`, cleared whenever the story is replaced
    pub audio_url: Option<String>,
    /// Title the story will be saved under
    pub title: String,
    pub is_loading: bool,
    /// Bumped on every story replacement; audio for an older revision is dropped
    #[serde(skip)]
    pub story_revision: u64,
}

impl StudioState {
    pub fn has_story(&self) -> bool {
        !self.story.is_empty()
    }
}
