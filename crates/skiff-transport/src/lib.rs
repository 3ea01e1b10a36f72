//! # skiff-transport
//!
//! HTTP transport for the skiff Docker Engine API client.
//!
//! Opens one connection per request against a Unix-socket or TCP daemon
//! address, performs a single HTTP/1.1 exchange, and hands back the
//! response — buffered, streamed, or upgraded. No retries, no timeout
//! policy, no connection pooling: every call is one best-effort attempt,
//! and reconnection is the caller's responsibility.

#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod addr;
pub mod conn;
pub mod error;

pub use addr::EngineAddr;
pub use conn::{collect_body, ChunkStream, Transport};
pub use error::{Result, TransportError};
