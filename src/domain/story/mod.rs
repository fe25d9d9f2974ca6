pub mod error;
pub mod model;
pub mod prompt;
pub mod service;

pub use error::StoryServiceError;
pub use model::{Mood, StoryOption, StoryOptions, StoryRequestParameters, Theme};
pub use prompt::{build_story_prompt, clean_for_speech};
pub use service::{StoryService, StoryServiceApi};
