use axum::{
    http::Uri,
    middleware,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::controllers::{health, library::LibraryController, studio::StudioController};
use crate::domain::library::LibraryService;
use crate::error::AppError;
use crate::infrastructure::config::Config;
use crate::infrastructure::middleware::request_id_middleware;

/// Build the application router with every route and layer
pub fn create_router(
    library_service: Arc<LibraryService>,
    studio_controller: Arc<StudioController>,
    library_controller: Arc<LibraryController>,
) -> Router {
    let studio_routes = Router::new()
        .route("/api/studio", get(StudioController::get_state))
        .route("/api/studio/options", get(StudioController::get_options))
        .route("/api/studio/settings", put(StudioController::update_settings))
        .route("/api/studio/title", put(StudioController::set_title))
        .route("/api/studio/generate", post(StudioController::generate))
        .route("/api/studio/audio", post(StudioController::generate_audio))
        .with_state(studio_controller);

    let library_routes = Router::new()
        .route(
            "/api/library",
            get(LibraryController::list_stories).post(LibraryController::save_story),
        )
        .with_state(library_controller);

    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(library_service)
        .merge(studio_routes)
        .merge(library_routes)
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                // The browser front end is served from another origin
                .layer(CorsLayer::permissive())
                .layer(middleware::from_fn(request_id_middleware)),
        )
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

/// Start the HTTP server and serve until shutdown
pub async fn start_http_server(
    config: Arc<Config>,
    app: Router,
) -> Result<(), Box<dyn std::error::Error>> {
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
