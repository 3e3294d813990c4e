pub mod error;
mod models;

pub use error::ApiError;
pub use models::{ObjectKey, SignedUrl, VideoUrlQuery, VideoUrlResponse};
