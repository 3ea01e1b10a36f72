//! Error types for the engine transport.

use thiserror::Error;

/// Result type alias for transport operations.
pub type Result<T> = std::result::Result<T, TransportError>;

/// Errors that can occur while exchanging a request with the daemon.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The daemon address could not be parsed or is unusable here.
    #[error("invalid daemon address: {0}")]
    InvalidAddress(String),

    /// Connecting the socket failed.
    #[error("failed to connect to {addr}: {source}")]
    Connect {
        /// Address the connection was attempted against.
        addr: String,
        /// Underlying socket error.
        #[source]
        source: std::io::Error,
    },

    /// The HTTP/1.1 handshake failed.
    #[error("HTTP handshake failed: {0}")]
    Handshake(#[source] hyper::Error),

    /// The request could not be constructed.
    #[error("failed to build request: {0}")]
    Request(#[from] hyper::http::Error),

    /// Sending the request or receiving the response head failed.
    #[error("request failed: {0}")]
    Io(#[source] hyper::Error),

    /// Reading the response body failed.
    #[error("failed to read response body: {0}")]
    Body(#[source] hyper::Error),

    /// The connection upgrade promised by a 101 response failed.
    #[error("connection upgrade failed: {0}")]
    Upgrade(#[source] hyper::Error),
}
