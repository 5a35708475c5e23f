use axum::http::StatusCode;
use thiserror::Error;

/// Capability expected of caught failures handed to the error builders.
///
/// The `Display` rendering is the user-facing message; `kind` identifies the
/// failure category the way an exception class name would.
pub trait Failure: std::error::Error + Send + Sync {
    /// The HTTP status code embedded in the failure, if it carries one.
    fn status_code(&self) -> Option<StatusCode> {
        None
    }

    /// Short category identifier reported in the envelope's `error` field.
    fn kind(&self) -> &str;
}

/// HTTP-aware failure: carries the status code it wants reported.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HttpException {
    status: StatusCode,
    message: String,
}

impl HttpException {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl Failure for HttpException {
    fn status_code(&self) -> Option<StatusCode> {
        Some(self.status)
    }

    fn kind(&self) -> &str {
        "HttpException"
    }
}

/// Authorization failure with no embedded status code.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct AuthorizationException {
    message: String,
}

impl AuthorizationException {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Failure for AuthorizationException {
    fn kind(&self) -> &str {
        "AuthorizationException"
    }
}
