use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use vidurl::{ApiError, ObjectKey, SignedUrl, UrlSigner};

/// Signer double that counts calls and either succeeds or fails with a fixed message
pub struct FakeSigner {
    calls: AtomicUsize,
    failure: Option<String>,
}

impl FakeSigner {
    pub fn ok() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            failure: None,
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            failure: Some(message.to_string()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl UrlSigner for FakeSigner {
    async fn presign_get(
        &self,
        key: &ObjectKey,
        expires_in: Duration,
    ) -> Result<SignedUrl, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match &self.failure {
            Some(message) => Err(ApiError::SigningFailure(message.clone())),
            None => Ok(SignedUrl {
                url: format!(
                    "https://fake.example/{}?X-Amz-Expires={}",
                    key,
                    expires_in.as_secs()
                ),
                expires_at: chrono::Utc::now() + expires_in,
            }),
        }
    }
}
