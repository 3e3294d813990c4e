use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Method, Request, StatusCode},
};
use std::sync::Arc;
use tower::ServiceExt;
use vidurl::config::DEFAULT_ALLOWED_ORIGINS;
use vidurl::{AllowedOrigins, AppState, Config, S3Signer, UrlSigner, create_app};

use super::{TEST_ACCESS_KEY_ID, TEST_BUCKET, TEST_REGION, TEST_SECRET_ACCESS_KEY};

/// Storage settings for tests, built without reading the process environment
pub fn test_config() -> Config {
    Config {
        region: Some(TEST_REGION.to_string()),
        bucket_name: Some(TEST_BUCKET.to_string()),
        access_key_id: Some(TEST_ACCESS_KEY_ID.to_string()),
        secret_access_key: Some(TEST_SECRET_ACCESS_KEY.to_string()),
        ..Config::default()
    }
}

/// Test harness around the production router
///
/// Requests go through the ACTUAL create_app() router (CORS, origin guard,
/// tracing, routes) without binding a socket.
pub struct TestServer {
    app: Router,
}

/// Collected response from the router
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

impl TestServer {
    /// Start with any signer and the default origin allow-list
    pub fn with_signer(signer: Arc<dyn UrlSigner>) -> Self {
        let app = create_app(
            AppState::new(signer),
            AllowedOrigins::new(DEFAULT_ALLOWED_ORIGINS.split(',')),
        );
        Self { app }
    }

    /// Start with a real S3 signer using static test credentials.
    /// Presigning is computed locally, so no network access is needed.
    pub async fn with_s3_signer() -> Self {
        Self::with_s3_config(test_config()).await
    }

    /// Start with a real S3 signer built from `config`
    pub async fn with_s3_config(config: Config) -> Self {
        let signer: Arc<dyn UrlSigner> = Arc::new(S3Signer::new(&config).await);
        Self::with_signer(signer)
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Method::GET, uri, &[]).await
    }

    pub async fn send(&self, method: Method, uri: &str, headers: &[(&str, &str)]) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        let request = builder.body(Body::empty()).unwrap();

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        TestResponse {
            status,
            headers,
            body: String::from_utf8(bytes.to_vec()).unwrap(),
        }
    }
}
