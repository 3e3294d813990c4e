use crate::{app_state::AppState, cors, handlers};
use axum::{
    Router,
    extract::Request,
    middleware::{self, Next},
    routing::get,
};
use tower_http::trace::TraceLayer;

/// Create the application router with all routes and middleware
///
/// This function is used by both main.rs and integration tests to ensure
/// the same server configuration is used in both production and tests.
pub fn create_app(app_state: AppState, allowed_origins: cors::AllowedOrigins) -> Router {
    use handlers::{health, not_found, video_url};

    let cors_layer = allowed_origins.cors_layer();

    Router::new()
        .route("/", get(health))
        .route("/api/video-url", get(video_url))
        // Fallback for 404 Not Found
        .fallback(not_found)
        // Add shared state
        .with_state(app_state)
        .layer(cors_layer)
        // Reject disallowed origins before CORS and routing (captures the allow-list)
        .layer(middleware::from_fn(move |request: Request, next: Next| {
            let allowed = allowed_origins.clone();
            async move { cors::origin_guard(allowed, request, next).await }
        }))
        // Add tracing
        .layer(TraceLayer::new_for_http())
}
