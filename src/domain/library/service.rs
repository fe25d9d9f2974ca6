use super::error::LibraryServiceError;
use super::model::{decode_collection, encode_collection, SavedStoryRecord};
use crate::domain::story::Theme;
use crate::infrastructure::repositories::StoryStore;
use anyhow::Context;
use async_trait::async_trait;
use chrono::{DateTime, Local};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Story library: the persisted collection plus its in-memory copy
pub struct LibraryService {
    store: Arc<dyn StoryStore>,
    stories: RwLock<Vec<SavedStoryRecord>>,
}

impl LibraryService {
    /// Read the persisted collection once; failures degrade to an empty library
    pub async fn mount(store: Arc<dyn StoryStore>) -> Self {
        let raw = match store.load().await {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(error = %e, "Could not read story library, starting empty");
                None
            }
        };
        let stories = decode_collection(raw.as_deref());

        tracing::info!(story_count = stories.len(), "Story library loaded");

        Self {
            store,
            stories: RwLock::new(stories),
        }
    }
}

#[async_trait]
pub trait LibraryServiceApi: Send + Sync {
    /// Saved stories in insertion order
    async fn list_stories(&self) -> Vec<SavedStoryRecord>;

    /// Append a story and persist the whole collection
    ///
    /// Returns `None` without touching the store when the title or the
    /// content is empty.
    async fn save_story(
        &self,
        title: &str,
        content: &str,
        character: &str,
        theme: Theme,
    ) -> Result<Option<SavedStoryRecord>, LibraryServiceError>;

    async fn check_store(&self) -> Result<(), LibraryServiceError>;
}

#[async_trait]
impl LibraryServiceApi for LibraryService {
    async fn list_stories(&self) -> Vec<SavedStoryRecord> {
        self.stories.read().await.clone()
    }

    async fn save_story(
        &self,
        title: &str,
        content: &str,
        character: &str,
        theme: Theme,
    ) -> Result<Option<SavedStoryRecord>, LibraryServiceError> {
        if title.is_empty() || content.is_empty() {
            tracing::debug!(
                has_title = !title.is_empty(),
                has_content = !content.is_empty(),
                "Save skipped: title and story are both required"
            );
            return Ok(None);
        }

        // Held across the write so concurrent saves cannot drop each other
        let mut stories = self.stories.write().await;

        let last_id = stories.last().map(|story| story.id);
        let record = new_record(Local::now(), last_id, title, content, character, theme);

        let mut updated = stories.clone();
        updated.push(record.clone());

        let serialized =
            encode_collection(&updated).context("Failed to serialize story library")?;
        self.store.save(&serialized).await?;

        *stories = updated;

        tracing::info!(
            story_id = record.id,
            title = %record.title,
            story_count = stories.len(),
            "Story saved"
        );

        Ok(Some(record))
    }

    async fn check_store(&self) -> Result<(), LibraryServiceError> {
        self.store.check().await?;
        Ok(())
    }
}

/// Ids are save timestamps in milliseconds, bumped past the previous id so
/// two saves within one millisecond stay distinct
fn new_record(
    now: DateTime<Local>,
    last_id: Option<i64>,
    title: &str,
    content: &str,
    character: &str,
    theme: Theme,
) -> SavedStoryRecord {
    let timestamp = now.timestamp_millis();
    let id = match last_id {
        Some(last) if last >= timestamp => last + 1,
        _ => timestamp,
    };

    SavedStoryRecord {
        id,
        title: title.to_string(),
        content: content.to_string(),
        character: character.to_string(),
        theme: theme.as_str().to_string(),
        date: now.format("%-m/%-d/%Y").to_string(),
    }
}
