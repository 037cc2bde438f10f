//! HTTP error responses.
//!
//! Errors leave the API as a status code plus a short plain-text message.
//! The status is derived from [`ErrorKind`]; handlers choose the message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::error::{Error, ErrorKind};

/// An error response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Respond to `err` with its default status and `message`.
    ///
    /// The error is logged here, at the boundary: caller mistakes at `warn`,
    /// everything answered with a 5xx at `error`.
    pub fn from_error(err: &Error, message: impl Into<String>) -> Self {
        Self::with_status(status_for(err.kind()), err, message)
    }

    /// Respond to `err` with an explicit status.
    pub fn with_status(status: StatusCode, err: &Error, message: impl Into<String>) -> Self {
        let message = message.into();
        if status.is_server_error() {
            tracing::error!(error = %err, status = status.as_u16(), "{message}");
        } else {
            tracing::warn!(error = %err, status = status.as_u16(), "{message}");
        }
        Self::new(status, message)
    }
}

/// Default status code for each error kind.
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Validation | ErrorKind::NothingToUpdate | ErrorKind::UpstreamBadRequest => {
            StatusCode::BAD_REQUEST
        }
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Upstream | ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, self.message).into_response()
    }
}
