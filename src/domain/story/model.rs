use serde::{Deserialize, Serialize};

/// Story themes offered by the studio form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Adventure,
    Fantasy,
    Space,
    Animals,
    Friendship,
    Magic,
    Ocean,
}

impl Theme {
    pub const ALL: [Theme; 7] = [
        Theme::Adventure,
        Theme::Fantasy,
        Theme::Space,
        Theme::Animals,
        Theme::Friendship,
        Theme::Magic,
        Theme::Ocean,
    ];

    /// Wire value, as stored in saved stories and embedded in prompts
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Adventure => "adventure",
            Theme::Fantasy => "fantasy",
            Theme::Space => "space",
            Theme::Animals => "animals",
            Theme::Friendship => "friendship",
            Theme::Magic => "magic",
            Theme::Ocean => "ocean",
        }
    }

    /// Display label shown in the option list
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Adventure => "Adventure",
            Theme::Fantasy => "Fantasy",
            Theme::Space => "Space",
            Theme::Animals => "Animals",
            Theme::Friendship => "Friendship",
            Theme::Magic => "Magic",
            Theme::Ocean => "Ocean",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Story moods offered by the studio form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    #[default]
    Happy,
    Calm,
    Excited,
    Mysterious,
    Gentle,
}

impl Mood {
    pub const ALL: [Mood; 5] = [
        Mood::Happy,
        Mood::Calm,
        Mood::Excited,
        Mood::Mysterious,
        Mood::Gentle,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Calm => "calm",
            Mood::Excited => "excited",
            Mood::Mysterious => "mysterious",
            Mood::Gentle => "gentle",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Calm => "Calm",
            Mood::Excited => "Excited",
            Mood::Mysterious => "Mysterious",
            Mood::Gentle => "Gentle",
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Form input driving a story generation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryRequestParameters {
    #[serde(default)]
    pub main_character: String,
    /// Kept as text, the form never validates it
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub mood: Mood,
}

/// One entry of a select list: display label plus wire value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryOption {
    pub label: String,
    pub value: String,
}

/// Response for GET /api/studio/options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryOptions {
    pub themes: Vec<StoryOption>,
    pub moods: Vec<StoryOption>,
}

impl StoryOptions {
    pub fn all() -> Self {
        Self {
            themes: Theme::ALL
                .iter()
                .map(|theme| StoryOption {
                    label: theme.label().to_string(),
                    value: theme.as_str().to_string(),
                })
                .collect(),
            moods: Mood::ALL
                .iter()
                .map(|mood| StoryOption {
                    label: mood.label().to_string(),
                    value: mood.as_str().to_string(),
                })
                .collect(),
        }
    }
}
