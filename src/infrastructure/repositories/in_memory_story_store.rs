use super::story_store::{StoreError, StoryStore};
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Process-local store, used when no database is configured and in tests
#[derive(Default)]
pub struct InMemoryStoryStore {
    entry: RwLock<Option<String>>,
}

impl InMemoryStoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing raw entry (possibly malformed)
    pub fn with_entry(entry: impl Into<String>) -> Self {
        Self {
            entry: RwLock::new(Some(entry.into())),
        }
    }

    /// Current raw entry
    pub async fn snapshot(&self) -> Option<String> {
        self.entry.read().await.clone()
    }
}

#[async_trait]
impl StoryStore for InMemoryStoryStore {
    async fn load(&self) -> Result<Option<String>, StoreError> {
        Ok(self.entry.read().await.clone())
    }

    async fn save(&self, serialized: &str) -> Result<(), StoreError> {
        *self.entry.write().await = Some(serialized.to_string());
        Ok(())
    }
}
