//! API error type and its HTTP mapping

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Request body is not the expected JSON shape; carries the parse error
    #[error("{0}")]
    MalformedInput(String),

    #[error("{0} is missing in parameters")]
    MissingParameter(&'static str),

    #[error("Not found")]
    NotFound,

    #[error("Failed to encode products: {0}")]
    EncodingFailure(String),

    #[error("Unauthorized")]
    Unauthorized,
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::MalformedInput(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::MalformedInput(message) => (StatusCode::BAD_REQUEST, message).into_response(),
            ApiError::MissingParameter(_) => {
                (StatusCode::BAD_REQUEST, self.to_string()).into_response()
            }
            ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
            // The encoder's message stays in the logs
            ApiError::EncodingFailure(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to encode products",
            )
                .into_response(),
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED.into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (ApiError::MalformedInput("bad".into()), StatusCode::BAD_REQUEST),
            (ApiError::MissingParameter("Username"), StatusCode::BAD_REQUEST),
            (ApiError::NotFound, StatusCode::NOT_FOUND),
            (ApiError::EncodingFailure("nan".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (ApiError::Unauthorized, StatusCode::UNAUTHORIZED),
        ];

        for (error, status) in cases {
            assert_eq!(error.into_response().status(), status);
        }
    }

    #[test]
    fn test_parse_error_becomes_malformed_input() {
        let err = serde_json::from_str::<serde_json::Value>("not-json").unwrap_err();
        match ApiError::from(err) {
            ApiError::MalformedInput(message) => assert!(message.contains("expected")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
