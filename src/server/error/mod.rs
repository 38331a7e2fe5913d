//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error type returned by services and controllers. It wraps
//! configuration, database and media storage errors along with axum extractor rejections,
//! and implements `IntoResponse` so handlers can propagate failures with `?`.

pub mod config;
pub mod storage;

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, storage::StorageError},
};

/// Top-level application error type.
///
/// Client mistakes (`BadRequest`, `NotFound` and extractor rejections) are returned with
/// their message. Every other variant becomes a 500 with a generic body while the details
/// are logged server-side.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Media storage backend failed to write or remove a file.
    #[error(transparent)]
    StorageErr(#[from] StorageError),

    /// Request body was not valid JSON for the expected shape.
    #[error(transparent)]
    JsonRejection(#[from] JsonRejection),

    /// Query string could not be deserialized.
    #[error(transparent)]
    QueryRejection(#[from] QueryRejection),

    /// Request was not a readable multipart form.
    ///
    /// Answered with the rejection's own status.
    #[error(transparent)]
    MultipartRejection(#[from] MultipartRejection),

    /// A multipart field could not be read.
    ///
    /// Answered with the error's own status: 413 when the body limit is exceeded,
    /// otherwise 400.
    #[error(transparent)]
    MultipartErr(#[from] MultipartError),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error with custom message.
    ///
    /// The provided message is logged but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest`, JSON and query rejections
/// - Rejection status - For multipart errors, e.g. 413 when an upload exceeds the body limit
/// - 404 Not Found - For `NotFound`
/// - 500 Internal Server Error - For everything else
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::JsonRejection(err) => bad_request(err.body_text()),
            Self::QueryRejection(err) => bad_request(err.body_text()),
            Self::MultipartRejection(err) => {
                (err.status(), Json(ErrorDto { error: err.body_text() })).into_response()
            }
            Self::MultipartErr(err) => {
                (err.status(), Json(ErrorDto { error: err.body_text() })).into_response()
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

fn bad_request(message: String) -> Response {
    (StatusCode::BAD_REQUEST, Json(ErrorDto { error: message })).into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_client_errors_to_their_status() {
        assert_eq!(
            AppError::BadRequest("Missing event ID".to_string())
                .into_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::NotFound("Event not found".to_string())
                .into_response()
                .status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn hides_internal_failures_behind_500() {
        let err = AppError::DbErr(sea_orm::DbErr::Custom("disk full".to_string()));

        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
