use axum::{
    response::{IntoResponse, Response},
    http::StatusCode,
};
use crate::errors::AppError;

// Every AppError is a server-side failure. The detail goes to the log, the
// client gets a generic 500.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Database(e) => tracing::error!(error = %e, "Database failure"),
            AppError::Session(e) => tracing::error!(error = %e, "Session store failure"),
            AppError::Hash(e) => tracing::error!(error = %e, "Password hashing failure"),
            AppError::Blocking(e) => tracing::error!(error = %e, "Blocking task failure"),
            AppError::Template { path, source } => {
                tracing::error!(path = %path, error = %source, "Failed to read template")
            }
        }

        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}
