use crate::error::AppError;
use crate::infrastructure::repositories::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum LibraryServiceError {
    #[error("storage error: {0}")]
    Storage(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<StoreError> for LibraryServiceError {
    fn from(err: StoreError) -> Self {
        LibraryServiceError::Storage(err.to_string())
    }
}

impl From<LibraryServiceError> for AppError {
    fn from(err: LibraryServiceError) -> Self {
        match err {
            LibraryServiceError::Storage(msg) => AppError::Storage(msg),
            LibraryServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
