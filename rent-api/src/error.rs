use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rent_core::CoreError;

/// Handler error. Bodies are plain text.
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    InternalServerError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        };

        (status, message).into_response()
    }
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::MissingPayload(_) => AppError::BadRequest(err.to_string()),
            CoreError::Persistence(_) => AppError::InternalServerError(err.to_string()),
        }
    }
}
