use crate::signer::UrlSigner;
use crate::types::{ObjectKey, SignedUrl, error::ApiError};
use std::sync::Arc;
use std::time::Duration;

/// Lifetime of every issued URL
pub const SIGNED_URL_TTL: Duration = Duration::from_secs(10 * 60);

/// Issues signed download URLs for video objects
#[derive(Clone)]
pub struct VideoUrlService {
    signer: Arc<dyn UrlSigner>,
}

impl VideoUrlService {
    pub fn new(signer: Arc<dyn UrlSigner>) -> Self {
        Self { signer }
    }

    /// Validate `key` and presign a GET for it.
    ///
    /// A missing or empty key fails with `InvalidRequest` without touching
    /// the signer. Any signer error is reported as `SigningFailure`.
    pub async fn issue_signed_url(&self, key: Option<&str>) -> Result<SignedUrl, ApiError> {
        let key = ObjectKey::parse(key)?;

        // No entitlement check yet: anyone who knows a key gets a URL.

        match self.signer.presign_get(&key, SIGNED_URL_TTL).await {
            Ok(signed) => {
                tracing::debug!("Issued URL for {} (expires {})", key, signed.expires_at);
                Ok(signed)
            }
            Err(ApiError::SigningFailure(msg)) => {
                tracing::error!("✗ Signed URL error for {}: {}", key, msg);
                Err(ApiError::SigningFailure(msg))
            }
            Err(other) => {
                tracing::error!("✗ Signed URL error for {}: {}", key, other);
                Err(ApiError::SigningFailure(other.to_string()))
            }
        }
    }
}
