use crate::config::Config;
use crate::signer::backend::UrlSigner;
use crate::types::{ObjectKey, SignedUrl, error::ApiError};
use aws_sdk_s3::Client as S3Client;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::presigning::PresigningConfig;
use chrono::Utc;
use std::time::Duration;

/// Presigns GetObject requests against a single S3 bucket
pub struct S3Signer {
    client: S3Client,
    bucket: Option<String>,
    has_region: bool,
    has_credentials: bool,
}

impl S3Signer {
    /// Build a signer from the startup configuration.
    ///
    /// Missing settings are not rejected here: the client is built with
    /// whatever is available and each presign call fails on its own. Region
    /// and credentials come only from `config`, never from the AWS default
    /// provider chains.
    pub async fn new(config: &Config) -> Self {
        let region = config.region.clone().filter(|r| !r.is_empty());
        let has_region = region.is_some();

        let mut config_loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(region.map(aws_config::Region::new));

        // Set credentials if provided
        let has_credentials = match (
            config.access_key_id.clone().filter(|k| !k.is_empty()),
            config.secret_access_key.clone().filter(|k| !k.is_empty()),
        ) {
            (Some(key_id), Some(secret_key)) => {
                config_loader = config_loader.credentials_provider(
                    aws_sdk_s3::config::Credentials::new(key_id, secret_key, None, None, "static"),
                );
                true
            }
            _ => {
                config_loader = config_loader.no_credentials();
                false
            }
        };

        let sdk_config = config_loader.load().await;

        let mut s3_config_builder = aws_sdk_s3::config::Builder::from(&sdk_config)
            .force_path_style(config.force_path_style);

        // Set custom endpoint if provided
        if let Some(endpoint_url) = config.endpoint.clone() {
            s3_config_builder = s3_config_builder.endpoint_url(endpoint_url);
        }

        let client = S3Client::from_conf(s3_config_builder.build());

        Self {
            client,
            bucket: config.bucket_name.clone().filter(|b| !b.is_empty()),
            has_region,
            has_credentials,
        }
    }

    pub fn bucket(&self) -> Option<&str> {
        self.bucket.as_deref()
    }
}

#[async_trait::async_trait]
impl UrlSigner for S3Signer {
    async fn presign_get(
        &self,
        key: &ObjectKey,
        expires_in: Duration,
    ) -> Result<SignedUrl, ApiError> {
        let bucket = self.bucket.as_deref().ok_or_else(|| {
            ApiError::SigningFailure("S3 bucket name is not configured".to_string())
        })?;
        if !self.has_region {
            return Err(ApiError::SigningFailure(
                "AWS region is not configured".to_string(),
            ));
        }
        if !self.has_credentials {
            return Err(ApiError::SigningFailure(
                "AWS credentials are not configured".to_string(),
            ));
        }

        tracing::debug!("Presigning GET: bucket={}, key={}", bucket, key);

        let presigning_config = PresigningConfig::expires_in(expires_in).map_err(|e| {
            ApiError::SigningFailure(format!("Invalid presigning config: {}", e))
        })?;

        let issued_at = Utc::now();
        let presigned = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key.as_str())
            .presigned(presigning_config)
            .await
            .map_err(|e| ApiError::SigningFailure(DisplayErrorContext(&e).to_string()))?;

        Ok(SignedUrl {
            url: presigned.uri().to_string(),
            expires_at: issued_at + expires_in,
        })
    }
}
