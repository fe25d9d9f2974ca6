use serde::Deserialize;
use std::env;

pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/openai";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_GOOEY_TTS_URL: &str = "https://api.gooey.ai/v2/TextToSpeech?example_id=0pkn43u9";
pub const DEFAULT_TTS_PROVIDER: &str = "BARK";
pub const DEFAULT_ELEVENLABS_VOICE_ID: &str = "21m00Tcm4TlvDq8ikWAM";
pub const DEFAULT_STORE_KEY: &str = "bedtimeStories";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub log_format: LogFormat,
    /// Postgres backs the story library when set, otherwise it lives in memory
    pub database_url: Option<String>,
    pub store_key: String,
    // Story generation (Gemini, OpenAI-compatible endpoint)
    pub gemini_api_key: String,
    pub gemini_api_base: String,
    pub gemini_model: String,
    // Speech synthesis (Gooey)
    pub gooey_api_key: String,
    pub gooey_tts_url: String,
    pub tts_provider: String,
    pub elevenlabs_voice_id: String,
    pub audio_cache_enabled: bool,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,
            environment: match env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string())
                .as_str()
            {
                "production" => Environment::Production,
                _ => Environment::Development,
            },
            log_format: match env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .as_str()
            {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
            database_url: env::var("DATABASE_URL").ok().filter(|url| !url.is_empty()),
            store_key: env::var("STORE_KEY").unwrap_or_else(|_| DEFAULT_STORE_KEY.to_string()),
            gemini_api_key: env::var("GEMINI_API_KEY")
                .map_err(|_| "GEMINI_API_KEY must be set")?,
            gemini_api_base: env::var("GEMINI_API_BASE")
                .unwrap_or_else(|_| DEFAULT_GEMINI_API_BASE.to_string()),
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string()),
            gooey_api_key: env::var("GOOEY_API_KEY").map_err(|_| "GOOEY_API_KEY must be set")?,
            gooey_tts_url: env::var("GOOEY_TTS_URL")
                .unwrap_or_else(|_| DEFAULT_GOOEY_TTS_URL.to_string()),
            tts_provider: env::var("TTS_PROVIDER")
                .unwrap_or_else(|_| DEFAULT_TTS_PROVIDER.to_string()),
            elevenlabs_voice_id: env::var("ELEVENLABS_VOICE_ID")
                .unwrap_or_else(|_| DEFAULT_ELEVENLABS_VOICE_ID.to_string()),
            audio_cache_enabled: env::var("AUDIO_CACHE_ENABLED")
                .map(|s| s.to_lowercase() == "true")
                .unwrap_or(false),
        };

        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }
}
