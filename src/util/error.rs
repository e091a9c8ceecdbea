use axum::{http::StatusCode, response::{IntoResponse, Response}};
use serde::Serialize;

/// Error surface of the submit endpoint. Every failure the layers classify
/// as terminal surfaces as a 500 with the wire contract
/// `{"success": false, "error": "..."}`.
#[derive(Debug)]
pub struct HandlerError {
    pub message: String,
}

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    error: String,
}

impl std::fmt::Display for HandlerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Internal: {}", self.message)
    }
}

impl std::error::Error for HandlerError {}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        let body = axum::Json(ErrorBody {
            success: false,
            error: self.message,
        });
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

#[derive(Debug, Clone)]
pub enum ServiceError {
    InternalError(String),
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceError::InternalError(msg) => write!(f, "Internal Error: {}", msg),
        }
    }
}

impl std::error::Error for ServiceError {}

// Allow conversion from RepositoryError to ServiceError
impl From<crate::repository::repository_error::RepositoryError> for ServiceError {
    fn from(err: crate::repository::repository_error::RepositoryError) -> Self {
        ServiceError::InternalError(err.to_string())
    }
}
