use serde::{Deserialize, Serialize};

/// A story the user chose to keep.
///
/// Field names match the browser `bedtimeStories` entry, so collections
/// exported from it decode unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedStoryRecord {
    /// Milliseconds since the Unix epoch at save time
    pub id: i64,
    pub title: String,
    pub content: String,
    pub character: String,
    pub theme: String,
    /// Save date as `M/D/YYYY`
    pub date: String,
}

/// Decode a persisted collection.
///
/// Absent or malformed data yields an empty collection, it is never an error.
pub fn decode_collection(raw: Option<&str>) -> Vec<SavedStoryRecord> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    match serde_json::from_str::<Vec<SavedStoryRecord>>(raw) {
        Ok(stories) => stories,
        Err(e) => {
            tracing::warn!(
                error = %e,
                entry_length = raw.len(),
                "Persisted story library is malformed, starting empty"
            );
            Vec::new()
        }
    }
}

pub fn encode_collection(stories: &[SavedStoryRecord]) -> Result<String, serde_json::Error> {
    serde_json::to_string(stories)
}
