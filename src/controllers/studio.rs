use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::domain::{
    story::{StoryOptions, StoryRequestParameters},
    studio::{StoryStudio, StudioState},
};

/// Request for PUT /api/studio/title
#[derive(Debug, Serialize, Deserialize)]
pub struct TitleRequest {
    pub title: String,
}

pub struct StudioController {
    studio: Arc<StoryStudio>,
}

impl StudioController {
    pub fn new(studio: Arc<StoryStudio>) -> Self {
        Self { studio }
    }

    /// GET /api/studio - Current form, story and audio
    pub async fn get_state(State(controller): State<Arc<StudioController>>) -> Json<StudioState> {
        Json(controller.studio.state().await)
    }

    /// GET /api/studio/options - Theme and mood choices
    pub async fn get_options() -> Json<StoryOptions> {
        Json(StoryOptions::all())
    }

    /// PUT /api/studio/settings - Replace the story parameters
    pub async fn update_settings(
        State(controller): State<Arc<StudioController>>,
        Json(settings): Json<StoryRequestParameters>,
    ) -> Json<StudioState> {
        Json(controller.studio.update_settings(settings).await)
    }

    /// PUT /api/studio/title - Set the title used by the next save
    pub async fn set_title(
        State(controller): State<Arc<StudioController>>,
        Json(request): Json<TitleRequest>,
    ) -> Json<StudioState> {
        Json(controller.studio.set_title(request.title).await)
    }

    /// POST /api/studio/generate - Generate a story from the current settings
    ///
    /// Generation failures are logged, the response is the unchanged state.
    pub async fn generate(State(controller): State<Arc<StudioController>>) -> Json<StudioState> {
        Json(controller.studio.generate_story().await)
    }

    /// POST /api/studio/audio - Narrate the current story
    ///
    /// Synthesis failures are logged, the response carries no audio url.
    pub async fn generate_audio(
        State(controller): State<Arc<StudioController>>,
    ) -> Json<StudioState> {
        Json(controller.studio.generate_audio().await)
    }
}
