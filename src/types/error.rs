use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Errors returned to API clients
#[derive(Debug)]
pub enum ApiError {
    InvalidRequest(String),
    SigningFailure(String),
    OriginNotAllowed,
    NotFound,
}

/// JSON error body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::SigningFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::OriginNotAllowed => StatusCode::FORBIDDEN,
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::InvalidRequest(msg) => msg.clone(),
            ApiError::SigningFailure(_) => "Failed to generate video URL".to_string(),
            ApiError::OriginNotAllowed => "Origin not allowed".to_string(),
            ApiError::NotFound => "Not found".to_string(),
        }
    }

    // The underlying signer message is forwarded as-is for debugging.
    fn detail(&self) -> Option<String> {
        match self {
            ApiError::SigningFailure(msg) => Some(msg.clone()),
            _ => None,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.detail() {
            Some(detail) => write!(f, "{}: {}", self.message(), detail),
            None => f.write_str(&self.message()),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.message(),
            detail: self.detail(),
        };

        (self.status_code(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::InvalidRequest("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::SigningFailure("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::OriginNotAllowed.status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_signing_failure_body_carries_detail() {
        let body = ErrorResponse {
            error: ApiError::SigningFailure("bad creds".into()).message(),
            detail: ApiError::SigningFailure("bad creds".into()).detail(),
        };
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            serde_json::json!({
                "error": "Failed to generate video URL",
                "detail": "bad creds"
            })
        );
    }

    #[test]
    fn test_invalid_request_body_has_no_detail() {
        let err = ApiError::InvalidRequest("Video key is required".into());
        let body = ErrorResponse {
            error: err.message(),
            detail: err.detail(),
        };
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            serde_json::json!({ "error": "Video key is required" })
        );
    }
}
