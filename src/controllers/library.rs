use axum::{extract::State, Json};
use std::sync::Arc;

use crate::{
    domain::{library::SavedStoryRecord, studio::{StoryStudio, StudioState}},
    error::AppResult,
};

pub struct LibraryController {
    studio: Arc<StoryStudio>,
}

impl LibraryController {
    pub fn new(studio: Arc<StoryStudio>) -> Self {
        Self { studio }
    }

    /// GET /api/library - Saved stories, oldest first
    pub async fn list_stories(
        State(controller): State<Arc<LibraryController>>,
    ) -> Json<Vec<SavedStoryRecord>> {
        Json(controller.studio.saved_stories().await)
    }

    /// POST /api/library - Save the current story under the current title
    ///
    /// Without a title or a story nothing is saved and the state comes back
    /// unchanged.
    pub async fn save_story(
        State(controller): State<Arc<LibraryController>>,
    ) -> AppResult<Json<StudioState>> {
        let state = controller.studio.save_story().await?;
        Ok(Json(state))
    }
}
