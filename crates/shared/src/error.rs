use thiserror::Error;

use crate::protocol::ErrorResponse;

/// Failure of a remote read or write, observed after the request left the
/// client. Field-level validation failures never become this type; they are
/// resolved before any network call.
#[derive(Debug, Clone, Error)]
pub enum ApiFailure {
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },
    #[error("network failure: {0}")]
    Network(String),
}

impl ApiFailure {
    /// Server-supplied message suitable for direct display, when one exists.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiFailure::Server { message, .. } if !message.is_empty() => Some(message),
            _ => None,
        }
    }
}

impl From<ErrorResponse> for ApiFailure {
    fn from(value: ErrorResponse) -> Self {
        ApiFailure::Server {
            status: value.status,
            message: value.data.error,
        }
    }
}
