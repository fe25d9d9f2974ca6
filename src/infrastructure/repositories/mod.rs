pub mod gemini_text_repository;
pub mod gooey_tts_repository;
pub mod in_memory_story_store;
pub mod postgres_story_store;
pub mod speech_synthesizer;
pub mod story_store;
pub mod text_generator;

pub use gemini_text_repository::GeminiTextRepository;
pub use gooey_tts_repository::GooeyTtsRepository;
pub use in_memory_story_store::InMemoryStoryStore;
pub use postgres_story_store::PostgresStoryStore;
pub use speech_synthesizer::{SpeechSynthesizer, SynthesisError};
pub use story_store::{StoreError, StoryStore};
pub use text_generator::{GenerationError, TextGenerator};
