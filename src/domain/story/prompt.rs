use super::model::StoryRequestParameters;
use regex::Regex;
use std::sync::LazyLock;

static MARKDOWN_MARKERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*#+\s*|\*+|_{2,}").expect("valid markdown pattern"));
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

/// Build the generation prompt for a bedtime story
pub fn build_story_prompt(params: &StoryRequestParameters) -> String {
    format!(
        "Create a bedtime story in 500 or less characters for a {age} year old child.\n\
         The main character is named {name}.\n\
         The story should be {theme} themed and have a {mood} mood.\n\
         Make it engaging and end with a good moral lesson.",
        age = params.age,
        name = params.main_character,
        theme = params.theme,
        mood = params.mood,
    )
}

/// Prepare generated story text for speech synthesis
///
/// Models tend to answer with light markdown (bold titles, headings); those
/// markers get read out loud, so they are stripped and whitespace collapsed.
pub fn clean_for_speech(text: &str) -> String {
    let without_markup = MARKDOWN_MARKERS.replace_all(text, "");
    WHITESPACE
        .replace_all(&without_markup, " ")
        .trim()
        .to_string()
}
