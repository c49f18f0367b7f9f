use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use docbrief_core::{AuthError, LlmError, PipelineError};

/// Client-facing error body: `{"detail": "..."}`.
#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
}

impl ApiError {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorBody {
                detail: self.detail,
            }),
        )
            .into_response()
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::DuplicateUser => Self::new(StatusCode::BAD_REQUEST, "User already exists"),
            AuthError::InvalidCredentials => {
                Self::new(StatusCode::UNAUTHORIZED, "Invalid credentials")
            }
            AuthError::InvalidToken => Self::new(StatusCode::UNAUTHORIZED, "Invalid token"),
            AuthError::Hash(_) | AuthError::Token(_) => {
                tracing::error!(error = %err, "auth internals failed");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }
}

impl From<PipelineError> for ApiError {
    fn from(err: PipelineError) -> Self {
        let status = match &err {
            PipelineError::Extraction(_) => StatusCode::UNPROCESSABLE_ENTITY,
            PipelineError::Llm(LlmError::MissingApiKey) => StatusCode::INTERNAL_SERVER_ERROR,
            // Transport and malformed-response failures are the provider's;
            // a single attempt, surfaced directly.
            PipelineError::Llm(_) => StatusCode::BAD_GATEWAY,
        };
        tracing::error!(error = %err, "summarization request failed");
        Self::new(status, err.to_string())
    }
}
