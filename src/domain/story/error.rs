#[derive(Debug, thiserror::Error)]
pub enum StoryServiceError {
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error("invalid input: {0}")]
    Invalid(String),
}
