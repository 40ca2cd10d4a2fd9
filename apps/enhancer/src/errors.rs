use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`;
/// the stdio transport maps the same variants onto MCP tool errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Execution failed: {0}")]
    ExecutionFailed(#[from] anyhow::Error),
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "INVALID_INPUT",
            AppError::UnknownTool(_) => "UNKNOWN_TOOL",
            AppError::ExecutionFailed(_) => "EXECUTION_FAILED",
        }
    }
}

/// Unreadable HTTP bodies (bad JSON, wrong content type) are input errors too.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidInput(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::InvalidInput(_) => {
                tracing::warn!("Rejected request: {self}");
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            AppError::UnknownTool(_) => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::ExecutionFailed(e) => {
                tracing::error!("Execution failed: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": self.code(),
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
