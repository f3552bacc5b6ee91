use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use mongodb::error::ErrorKind;
use strum::Display;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BlogError {
    #[error("Database unreachable: {0}")]
    Connectivity(String),

    #[error("Invalid blog identifier: {0}")]
    InvalidIdentifier(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Storage(String),
}

/// Coarse classification of a [`BlogError`], stable across messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum BlogErrorKind {
    ConnectivityFailure,
    InvalidIdentifier,
    NotFound,
    ValidationFailure,
    StorageFailure,
}

impl BlogError {
    pub fn kind(&self) -> BlogErrorKind {
        match self {
            BlogError::Connectivity(_) => BlogErrorKind::ConnectivityFailure,
            BlogError::InvalidIdentifier(_) => BlogErrorKind::InvalidIdentifier,
            BlogError::NotFound(_) => BlogErrorKind::NotFound,
            BlogError::Validation(_) => BlogErrorKind::ValidationFailure,
            BlogError::Storage(_) => BlogErrorKind::StorageFailure,
        }
    }
}

pub type BlogResult<T> = Result<T, BlogError>;

/// Convert BlogError to AppError for standardized error responses
impl From<BlogError> for AppError {
    fn from(err: BlogError) -> Self {
        match err {
            BlogError::NotFound(msg) => AppError::NotFound(msg),
            BlogError::InvalidIdentifier(id) => {
                AppError::InvalidIdentifier(format!("'{}' is not a valid blog identifier", id))
            }
            BlogError::Validation(msg) => AppError::BadRequest(msg),
            BlogError::Connectivity(msg) => AppError::DatabaseUnavailable(msg),
            BlogError::Storage(msg) => AppError::Database(msg),
        }
    }
}

impl IntoResponse for BlogError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

/// Driver errors that mean the store could not be reached at all.
///
/// Rejected credentials are storage failures.
fn is_connectivity(kind: &ErrorKind) -> bool {
    matches!(
        kind,
        ErrorKind::ServerSelection { .. }
            | ErrorKind::Io(_)
            | ErrorKind::ConnectionPoolCleared { .. }
            | ErrorKind::DnsResolve { .. }
    )
}

impl From<mongodb::error::Error> for BlogError {
    fn from(err: mongodb::error::Error) -> Self {
        if is_connectivity(err.kind.as_ref()) {
            BlogError::Connectivity(err.to_string())
        } else {
            BlogError::Storage(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use std::io;

    #[test]
    fn test_io_errors_are_connectivity_failures() {
        let err = mongodb::error::Error::from(io::Error::new(
            io::ErrorKind::ConnectionRefused,
            "connection refused",
        ));
        assert_eq!(BlogError::from(err).kind(), BlogErrorKind::ConnectivityFailure);
    }

    #[test]
    fn test_decode_errors_are_storage_failures() {
        let decode_err =
            mongodb::bson::from_document::<crate::models::Blog>(mongodb::bson::doc! {})
                .unwrap_err();
        let err = mongodb::error::Error::from(decode_err);
        assert_eq!(BlogError::from(err).kind(), BlogErrorKind::StorageFailure);
    }

    #[test]
    fn test_custom_driver_errors_are_storage_failures() {
        let err = mongodb::error::Error::custom("unexpected reply");
        assert_eq!(BlogError::from(err).kind(), BlogErrorKind::StorageFailure);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(BlogErrorKind::ConnectivityFailure.to_string(), "connectivity_failure");
        assert_eq!(BlogErrorKind::NotFound.to_string(), "not_found");
    }

    #[test]
    fn test_http_status_mapping() {
        let cases = [
            (BlogError::NotFound("gone".into()), StatusCode::NOT_FOUND),
            (BlogError::InvalidIdentifier("xyz".into()), StatusCode::BAD_REQUEST),
            (BlogError::Validation("empty".into()), StatusCode::BAD_REQUEST),
            (BlogError::Connectivity("timeout".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (BlogError::Storage("write".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }
}
