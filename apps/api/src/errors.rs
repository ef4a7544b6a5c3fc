use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::scoring::parser::ParseError;
use crate::scoring::ranking::EmptyTableError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Every variant is local to one submission; none stop the server.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Empty scorecard: {0}")]
    EmptyTable(#[from] EmptyTableError),
}

impl AppError {
    /// Text shown to the user in the HTML banners and the JSON error envelope.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::Llm(msg) => format!("Error generating results: {msg}"),
            AppError::Parse(e) => format!("Could not read the scoring response: {e}"),
            AppError::EmptyTable(_) => {
                "The scoring response did not contain any scored headlines.".to_string()
            }
        }
    }

    /// Input problems are warnings; everything else is an error.
    pub fn is_warning(&self) -> bool {
        matches!(self, AppError::Validation(_))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                (StatusCode::BAD_GATEWAY, "LLM_ERROR")
            }
            AppError::Parse(e) => {
                tracing::error!("Parse error: {e}");
                (StatusCode::BAD_GATEWAY, "PARSE_ERROR")
            }
            AppError::EmptyTable(_) => (StatusCode::BAD_GATEWAY, "EMPTY_SCORECARD"),
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": self.user_message()
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let response = AppError::Validation("too few".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_llm_error_maps_to_bad_gateway() {
        let response = AppError::Llm("quota exceeded".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_only_validation_is_warning() {
        assert!(AppError::Validation("x".to_string()).is_warning());
        assert!(!AppError::Llm("x".to_string()).is_warning());
        assert!(!AppError::EmptyTable(EmptyTableError).is_warning());
    }

    #[test]
    fn test_llm_user_message_includes_cause() {
        let msg = AppError::Llm("connection refused".to_string()).user_message();
        assert!(msg.contains("connection refused"));
    }
}
