use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use bedtime_stories::controllers::{library::LibraryController, studio::StudioController};
use bedtime_stories::domain::{library::LibraryService, story::StoryService, studio::StoryStudio};
use bedtime_stories::infrastructure::config::{Config, LogFormat};
use bedtime_stories::infrastructure::db::{check_connection, create_pool, run_migrations};
use bedtime_stories::infrastructure::http::{create_router, start_http_server};
use bedtime_stories::infrastructure::repositories::{
    GeminiTextRepository, GooeyTtsRepository, InMemoryStoryStore, PostgresStoryStore, StoryStore,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;

    init_logging(&config);

    tracing::info!(
        "Starting Bedtime Stories on {}:{}",
        config.host,
        config.port
    );

    // Story library store: Postgres when configured, process memory otherwise
    let store: Arc<dyn StoryStore> = match &config.database_url {
        Some(database_url) => {
            let pool = create_pool(database_url).await?;
            check_connection(&pool).await?;
            run_migrations(&pool).await?;
            tracing::info!(store_key = %config.store_key, "Story library backed by Postgres");
            Arc::new(PostgresStoryStore::new(Arc::new(pool), config.store_key.clone()))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, saved stories will not survive a restart");
            Arc::new(InMemoryStoryStore::new())
        }
    };

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Remote capabilities (credentials stay on the server)
    tracing::info!(
        model = %config.gemini_model,
        api_base = %config.gemini_api_base,
        "Instantiating story generator"
    );
    let generator = Arc::new(GeminiTextRepository::from_credentials(
        &config.gemini_api_base,
        &config.gemini_api_key,
        config.gemini_model.clone(),
    ));
    tracing::info!(
        provider = %config.tts_provider,
        voice = %config.elevenlabs_voice_id,
        "Instantiating speech synthesizer"
    );
    let synthesizer = Arc::new(GooeyTtsRepository::new(
        config.gooey_tts_url.clone(),
        config.gooey_api_key.clone(),
        config.tts_provider.clone(),
        config.elevenlabs_voice_id.clone(),
    ));

    // 2. Services
    tracing::info!("Instantiating services...");
    let story_service = Arc::new(StoryService::new(
        generator,
        synthesizer,
        config.audio_cache_enabled,
    ));
    let library_service = Arc::new(LibraryService::mount(store).await);
    let studio = Arc::new(StoryStudio::new(story_service, library_service.clone()));

    // 3. Controllers
    tracing::info!("Instantiating controllers...");
    let studio_controller = Arc::new(StudioController::new(studio.clone()));
    let library_controller = Arc::new(LibraryController::new(studio));

    if config.is_development() {
        tracing::debug!(audio_cache = config.audio_cache_enabled, "Development mode");
    }

    let app = create_router(library_service, studio_controller, library_controller);
    start_http_server(Arc::new(config), app).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "bedtime_stories=debug,tower_http=debug".into());

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
