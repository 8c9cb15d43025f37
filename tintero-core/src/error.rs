use serde_json::{Map, Value};
use thiserror::Error;

/// Convenience alias for results produced by the API client.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors that can occur while talking to the backend.
///
/// The taxonomy mirrors the three ways a request can go wrong: the
/// transport fails, the body cannot be decoded, or the backend answers
/// with a non-success status. A fourth variant covers a success-flagged
/// envelope that arrives without the payload the endpoint promises.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed (DNS, connection, TLS, ...).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not the JSON shape we expected.
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The backend answered with a non-success HTTP status.
    #[error("{message} (status {status})")]
    Api {
        /// HTTP status code, attached by the client.
        status: u16,
        /// Server-provided message, or a generic fallback.
        message: String,
        /// Per-field validation messages, in server order.
        errors: Option<Map<String, Value>>,
    },

    /// A success envelope arrived without its expected `data` payload.
    #[error("response missing expected payload: {0}")]
    MissingPayload(String),
}

impl ApiError {
    /// HTTP status code for [`ApiError::Api`] errors, `None` otherwise.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// First message of the first field in the validation `errors` map.
    ///
    /// Field order is the order the server sent; message order within a
    /// field is preserved as well.
    pub fn first_validation_message(&self) -> Option<&str> {
        match self {
            ApiError::Api {
                errors: Some(errors),
                ..
            } => errors.values().next()?.as_array()?.first()?.as_str(),
            _ => None,
        }
    }
}
