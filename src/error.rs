use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PackageError {
    #[error("Unknown workout type: {0}")]
    UnknownWorkoutType(String),
    #[error("{workout_type} expects {expected} values, got {actual}")]
    ArityMismatch {
        workout_type: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("Invalid {field} value {value}: {reason}")]
    InvalidValue {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Package {index}: {source}")]
    InvalidPackage {
        index: usize,
        #[source]
        source: PackageError,
    },
    #[error("Report not found: {0}")]
    NotFound(String),
    #[error("Invalid request: {0}")]
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::InvalidPackage { .. } | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}
