//! Translation of service failures into HTTP responses.

use super::dto::ErrorResponse;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::error;
use postboard_core::ServiceError;

const NOT_FOUND_CODE: &str = "Item Not Found";
const INTERNAL_CODE: &str = "Internal Server Error";

/// Error returned by route handlers.
#[derive(Debug)]
pub enum ApiError {
    /// 404 with the service's not-found message.
    NotFound(String),
    /// 500 for everything the service does not interpret.
    Internal(String),
}

impl From<ServiceError> for ApiError {
    fn from(value: ServiceError) -> Self {
        match value {
            ServiceError::NotFound => Self::NotFound(value.to_string()),
            ServiceError::Storage(_) => Self::Internal(value.to_string()),
        }
    }
}

impl From<rusqlite::Error> for ApiError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Internal(value.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            Self::NotFound(message) => (StatusCode::NOT_FOUND, NOT_FOUND_CODE, message),
            Self::Internal(message) => {
                error!("event=http_error module=http status=error error={message}");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_CODE, message)
            }
        };

        let body = ErrorResponse {
            code: code.to_string(),
            message,
        };
        (status, Json(body)).into_response()
    }
}
