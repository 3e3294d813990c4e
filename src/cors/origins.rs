use axum::http::{HeaderValue, Method, header};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Frontend origins allowed to call the API
#[derive(Clone, Debug)]
pub struct AllowedOrigins {
    origins: Arc<Vec<HeaderValue>>,
    any: bool,
}

impl AllowedOrigins {
    /// Build the allow-list. `*` allows every origin; entries that are not
    /// valid header values are skipped with a warning.
    pub fn new<I, S>(origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut any = false;
        let mut parsed = Vec::new();

        for origin in origins {
            let origin = origin.as_ref().trim().trim_end_matches('/');
            if origin.is_empty() {
                continue;
            }
            if origin == "*" {
                any = true;
                continue;
            }
            match HeaderValue::from_str(origin) {
                Ok(value) => parsed.push(value),
                Err(e) => tracing::warn!("Ignoring invalid allowed origin '{}': {}", origin, e),
            }
        }

        if any {
            tracing::warn!("CORS configured to allow all origins - not recommended for production");
        }

        Self {
            origins: Arc::new(parsed),
            any,
        }
    }

    pub fn contains(&self, origin: &HeaderValue) -> bool {
        self.any || self.origins.iter().any(|allowed| allowed == origin)
    }

    pub fn cors_layer(&self) -> CorsLayer {
        let allow_origin = if self.any {
            AllowOrigin::any()
        } else {
            AllowOrigin::list(self.origins.iter().cloned())
        };

        CorsLayer::new()
            .allow_origin(allow_origin)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
    }
}
