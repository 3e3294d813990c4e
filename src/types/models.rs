use percent_encoding::percent_decode_str;
use serde::Serialize;

use super::error::ApiError;

/// Path of a video object within the bucket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectKey(String);

impl ObjectKey {
    /// Accepts any non-empty key. No character or existence checks are made.
    pub fn parse(key: Option<&str>) -> Result<Self, ApiError> {
        match key {
            Some(k) if !k.is_empty() => Ok(Self(k.to_string())),
            _ => Err(ApiError::InvalidRequest(
                "Video key is required".to_string(),
            )),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A presigned GET URL and the instant it stops being valid
#[derive(Debug, Clone)]
pub struct SignedUrl {
    pub url: String,
    pub expires_at: chrono::DateTime<chrono::Utc>,
}

/// Query parameters for GET /api/video-url
#[derive(Debug, Default, PartialEq, Eq)]
pub struct VideoUrlQuery {
    pub key: Option<String>,
}

impl VideoUrlQuery {
    /// Parse the raw query string.
    ///
    /// Unknown parameters are ignored and `key` may appear at most once.
    /// A component whose percent escapes do not decode to UTF-8 is kept as
    /// its literal text rather than lossily substituted.
    pub fn from_raw(query: Option<&str>) -> Result<Self, ApiError> {
        let mut params = Self::default();

        for pair in query.unwrap_or_default().split('&').filter(|p| !p.is_empty()) {
            let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
            if decode_component(name) != "key" {
                continue;
            }
            if params.key.is_some() {
                return Err(ApiError::InvalidRequest(
                    "Only one video key may be given".to_string(),
                ));
            }
            params.key = Some(decode_component(value));
        }

        Ok(params)
    }
}

fn decode_component(component: &str) -> String {
    let component = component.replace('+', " ");
    let decoded = percent_decode_str(&component)
        .decode_utf8()
        .map(|d| d.into_owned());
    decoded.unwrap_or(component)
}

/// JSON body returned by GET /api/video-url
#[derive(Debug, Serialize)]
pub struct VideoUrlResponse {
    pub url: String,
}
