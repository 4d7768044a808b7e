use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-specific errors
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("Empty explanation from model.")]
    EmptyCompletion,

    #[error("{0}")]
    Parse(String),

    #[error("{0}")]
    Schema(String),

    #[error("Upstream API error: {0}")]
    Upstream(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Validation answers with the schema layer's status; everything else
        // collapses to a flat 500 carrying the message as `detail`.
        let status = match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({ "detail": self.to_string() }));

        (status, body).into_response()
    }
}

/// Result type for endpoint handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_passthrough() {
        let err = ApiError::Validation("topic must not be empty".into());
        assert_eq!(err.to_string(), "topic must not be empty");
    }

    #[test]
    fn test_empty_completion_message() {
        assert_eq!(
            ApiError::EmptyCompletion.to_string(),
            "Empty explanation from model."
        );
    }

    #[test]
    fn test_upstream_message_includes_detail() {
        let err = ApiError::Upstream("401 Unauthorized".into());
        assert_eq!(err.to_string(), "Upstream API error: 401 Unauthorized");
    }
}
