pub mod model;
pub mod service;

pub use model::StudioState;
pub use service::StoryStudio;
