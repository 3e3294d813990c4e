use crate::types::{ObjectKey, SignedUrl, error::ApiError};
use std::time::Duration;

/// URL signer trait - implement this for different object stores
#[async_trait::async_trait]
pub trait UrlSigner: Send + Sync {
    /// Presign a GET of `key` valid for `expires_in` from now
    async fn presign_get(
        &self,
        key: &ObjectKey,
        expires_in: Duration,
    ) -> Result<SignedUrl, ApiError>;
}
