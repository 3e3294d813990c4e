use crate::{service::VideoUrlService, signer::UrlSigner};
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub video_urls: VideoUrlService,
}

impl AppState {
    pub fn new(signer: Arc<dyn UrlSigner>) -> Self {
        Self {
            video_urls: VideoUrlService::new(signer),
        }
    }
}
