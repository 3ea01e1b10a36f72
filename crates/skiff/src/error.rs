//! Error types for engine API calls.

use bytes::Bytes;
use skiff_transport::TransportError;
use thiserror::Error;

/// Result type alias for engine API operations.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors returned by [`Engine`](crate::Engine) calls.
///
/// Two kinds carry API meaning: [`EngineError::MissingParameter`] is
/// raised locally before any network I/O, and [`EngineError::Remote`]
/// carries the daemon's verbatim response body for any non-2xx status.
/// Everything else is a local fault (socket, serialization) and is
/// propagated without retry.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A required parameter was not supplied.
    #[error("missing required parameter: {0}")]
    MissingParameter(&'static str),

    /// The daemon responded with a status outside 200-299.
    ///
    /// The body is kept verbatim; daemon errors are usually JSON with a
    /// `message` field, which [`EngineError::remote_message`] extracts.
    #[error("daemon responded with status {status}")]
    Remote {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: Bytes,
    },

    /// A parameter value cannot be carried in an HTTP header.
    #[error("invalid header value for parameter {0}")]
    InvalidHeader(&'static str),

    /// The request body could not be serialized to JSON.
    #[error("failed to serialize request body: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The response body could not be parsed as JSON.
    #[error("failed to parse response body: {0}")]
    Json(#[source] serde_json::Error),

    /// The daemon did not switch protocols on an upgrade request.
    #[error("daemon did not upgrade the connection (status {0})")]
    NotUpgraded(u16),

    /// Socket or HTTP-level failure.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl EngineError {
    /// Extracts the daemon's `message` field from a [`EngineError::Remote`]
    /// body, if the body is JSON of the documented shape.
    #[must_use]
    pub fn remote_message(&self) -> Option<String> {
        let Self::Remote { body, .. } = self else {
            return None;
        };
        let value: serde_json::Value = serde_json::from_slice(body).ok()?;
        value
            .get("message")
            .and_then(serde_json::Value::as_str)
            .map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_message_from_json_body() {
        let err = EngineError::Remote {
            status: 404,
            body: Bytes::from_static(br#"{"message":"No such container: abc"}"#),
        };
        assert_eq!(err.remote_message().as_deref(), Some("No such container: abc"));
    }

    #[test]
    fn remote_message_absent_for_opaque_body() {
        let err = EngineError::Remote {
            status: 500,
            body: Bytes::from_static(b"not json"),
        };
        assert_eq!(err.remote_message(), None);
    }

    #[test]
    fn missing_parameter_names_the_parameter() {
        let err = EngineError::MissingParameter("id");
        assert_eq!(err.to_string(), "missing required parameter: id");
    }
}
