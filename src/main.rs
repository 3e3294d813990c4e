use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use vidurl::{AllowedOrigins, AppState, Config, S3Signer, UrlSigner, create_app, datastore};

#[tokio::main]
async fn main() {
    // Load .env first so RUST_LOG and the settings below can come from it
    let dotenv = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    match dotenv {
        Ok(path) => tracing::info!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => tracing::debug!("No .env file found"),
        Err(e) => tracing::warn!("Failed to read .env file: {}", e),
    }

    // Parse command line arguments and environment
    let config = Config::parse();

    // Warn about missing settings but keep starting
    if config.warn_if_incomplete() {
        tracing::info!(
            "Using bucket: {} ({})",
            config.bucket_name.as_deref().unwrap_or_default(),
            config.region.as_deref().unwrap_or_default()
        );
    }

    // Optional document store, never awaited on the request path
    let _datastore = datastore::spawn_connect(config.database_url.clone());

    let signer: Arc<dyn UrlSigner> = Arc::new(S3Signer::new(&config).await);
    let app_state = AppState::new(signer);
    let allowed_origins = AllowedOrigins::new(&config.allowed_origins);

    let app = create_app(app_state, allowed_origins);

    // Start server
    let addr = format!("{}:{}", config.host, config.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    tracing::info!("🚀 Backend running at http://localhost:{}", config.port);
    tracing::info!(
        "Example: curl 'http://localhost:{}/api/video-url?key=face-yoga/lesson-01-introduction-guide.mp4'",
        config.port
    );

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
