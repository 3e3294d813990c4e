// Library exports for integration tests
pub mod app_state;
pub mod config;
pub mod cors;
pub mod datastore;
pub mod handlers;
pub mod server;
pub mod service;
pub mod signer;
pub mod types;

// Re-export commonly used types
pub use app_state::AppState;
pub use config::Config;
pub use cors::AllowedOrigins;
pub use service::{SIGNED_URL_TTL, VideoUrlService};
pub use signer::{S3Signer, UrlSigner};
pub use types::{ApiError, ObjectKey, SignedUrl};

// Re-export server creation function
pub use server::create_app;
