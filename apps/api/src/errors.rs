use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

pub const MISSING_FIELDS: &str = "Missing required fields";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// The body always carries a top-level `message` with the underlying error text.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("{0}")]
    Upstream(#[from] LlmError),

    #[error("{0}")]
    Parse(String),

    #[error("Database error: {0}")]
    Persistence(#[from] sqlx::Error),
}

/// Attached to every `AppError` response so response mappers can tell handler
/// failures apart from router-level rejections such as 404 and 405.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorCode(pub &'static str);

impl AppError {
    pub fn missing_fields() -> Self {
        AppError::Validation(MISSING_FIELDS.to_string())
    }

    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
            AppError::Upstream(_) => (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR"),
            AppError::Parse(_) => (StatusCode::BAD_GATEWAY, "PARSE_ERROR"),
            AppError::Persistence(_) => (StatusCode::INTERNAL_SERVER_ERROR, "PERSISTENCE_ERROR"),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        match &self {
            AppError::Upstream(e) => tracing::error!("Upstream AI error: {e}"),
            AppError::Parse(msg) => tracing::error!("AI response parse error: {msg}"),
            AppError::Persistence(e) => tracing::error!("Database error: {e}"),
            AppError::Validation(_) | AppError::Unauthorized => {}
        }

        let body = Json(json!({
            "code": code,
            "message": self.to_string()
        }));

        let mut response = (status, body).into_response();
        response.extensions_mut().insert(ErrorCode(code));
        response
    }
}

/// Response mapper for source-compatible deployments: every handler failure
/// is answered with 400. 401 comes from the auth layer and is left alone, as
/// are responses the router produced without an `AppError`.
pub async fn collapse_to_bad_request(mut response: Response) -> Response {
    let from_handler = response.extensions().get::<ErrorCode>().is_some();
    if from_handler && response.status() != StatusCode::UNAUTHORIZED {
        *response.status_mut() = StatusCode::BAD_REQUEST;
    }
    response
}
