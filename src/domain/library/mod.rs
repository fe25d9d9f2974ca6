pub mod error;
pub mod model;
pub mod service;

pub use error::LibraryServiceError;
pub use model::{decode_collection, encode_collection, SavedStoryRecord};
pub use service::{LibraryService, LibraryServiceApi};
