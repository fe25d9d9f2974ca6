use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// A single named, client-local entry holding the serialized story library.
///
/// The store deals in raw text only: encoding and decoding of the collection
/// belongs to the library service, so a malformed entry is a decoding concern
/// and never a store error.
#[async_trait]
pub trait StoryStore: Send + Sync {
    /// Read the entry; `None` when nothing was ever saved
    async fn load(&self) -> Result<Option<String>, StoreError>;

    /// Overwrite the entry with a new serialized collection
    async fn save(&self, serialized: &str) -> Result<(), StoreError>;

    /// Readiness probe used by the health endpoint
    async fn check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
