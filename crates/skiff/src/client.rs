//! Engine client: generic invocation of endpoint descriptors.

use bytes::Bytes;
use futures::Stream;
use http_body_util::Full;
use hyper::header::{self, HeaderMap, HeaderValue};
use hyper::upgrade::Upgraded;
use hyper::{Request, StatusCode};
use hyper_util::rt::TokioIo;
use skiff_transport::{collect_body, ChunkStream, Transport, TransportError};
use std::pin::Pin;
use std::task::{Context, Poll};
use tracing::{debug, trace};

use crate::config::EngineConfig;
use crate::endpoint::{build_request, Endpoint, RequestDescription};
use crate::error::{EngineError, Result};
use crate::params::Params;

/// Raw bidirectional stream handed back after a 101 upgrade.
pub type UpgradedIo = TokioIo<Upgraded>;

/// Client for the engine's HTTP API.
///
/// Holds only immutable configuration; every call is an independent
/// request/response exchange and callers may invoke concurrently
/// without coordination. Ordering between calls (create-then-start) is
/// the caller's responsibility.
#[derive(Debug, Clone)]
pub struct Engine {
    config: EngineConfig,
    transport: Transport,
}

impl Engine {
    /// Creates a client from an immutable configuration.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        let transport = Transport::new(config.addr().clone());
        Self { config, transport }
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Invokes an operation and buffers the response.
    ///
    /// Any status in 200-299 is a success; anything else becomes
    /// [`EngineError::Remote`] carrying the raw response body. Nothing
    /// is retried.
    ///
    /// # Errors
    ///
    /// Returns an error if a required parameter is missing (before any
    /// network I/O), the exchange fails, or the daemon responds with a
    /// non-2xx status.
    pub async fn invoke(&self, endpoint: &Endpoint, params: &Params) -> Result<EngineResponse> {
        let desc = build_request(endpoint, &self.config, params)?;
        debug!(
            op = endpoint.name,
            method = %desc.method,
            path = %desc.path_and_query,
            "invoking engine operation"
        );

        let req = self.http_request(desc, false)?;
        let response = self.transport.roundtrip(req).await?;
        let (parts, body) = response.into_parts();
        let body = collect_body(body).await?;
        trace!(
            op = endpoint.name,
            status = %parts.status,
            body_len = body.len(),
            "received response"
        );

        if parts.status.is_success() {
            Ok(EngineResponse {
                status: parts.status,
                headers: parts.headers,
                body,
            })
        } else {
            Err(EngineError::Remote {
                status: parts.status.as_u16(),
                body,
            })
        }
    }

    /// Invokes an operation and parses the successful response as JSON.
    ///
    /// # Errors
    ///
    /// As [`Engine::invoke`], plus a parse error if the body is not
    /// valid JSON.
    pub async fn invoke_json(
        &self,
        endpoint: &Endpoint,
        params: &Params,
    ) -> Result<serde_json::Value> {
        self.invoke(endpoint, params).await?.json()
    }

    /// Invokes a long-lived operation (logs, events, stats) and returns
    /// the response body as a live chunk stream.
    ///
    /// The stream's lifecycle — keep reading or drop the handle — is
    /// entirely the caller's. Multiplexed stdout/stderr framing inside
    /// the chunks is likewise the consumer's concern.
    ///
    /// # Errors
    ///
    /// As [`Engine::invoke`]; a non-2xx response is buffered into the
    /// error before returning.
    pub async fn invoke_stream(&self, endpoint: &Endpoint, params: &Params) -> Result<EngineStream> {
        let desc = build_request(endpoint, &self.config, params)?;
        debug!(
            op = endpoint.name,
            method = %desc.method,
            path = %desc.path_and_query,
            "invoking streaming operation"
        );

        let req = self.http_request(desc, false)?;
        let response = self.transport.roundtrip(req).await?;
        let (parts, body) = response.into_parts();

        if parts.status.is_success() {
            Ok(EngineStream {
                status: parts.status,
                headers: parts.headers,
                chunks: ChunkStream::new(body),
            })
        } else {
            let body = collect_body(body).await?;
            Err(EngineError::Remote {
                status: parts.status.as_u16(),
                body,
            })
        }
    }

    /// Invokes an operation that may hijack the connection (attach,
    /// exec start, session).
    ///
    /// On a 101 the upgraded bidirectional stream is handed back; a
    /// plain 2xx answer is returned as a chunk stream instead, matching
    /// daemons that reply without switching protocols.
    ///
    /// # Errors
    ///
    /// As [`Engine::invoke`], plus an upgrade error if the 101
    /// handshake fails to complete.
    pub async fn invoke_upgrade(&self, endpoint: &Endpoint, params: &Params) -> Result<Hijack> {
        let desc = build_request(endpoint, &self.config, params)?;
        debug!(
            op = endpoint.name,
            method = %desc.method,
            path = %desc.path_and_query,
            "invoking upgradable operation"
        );

        let req = self.http_request(desc, true)?;
        let response = self.transport.roundtrip(req).await?;

        if response.status() == StatusCode::SWITCHING_PROTOCOLS {
            let headers = response.headers().clone();
            let upgraded = hyper::upgrade::on(response)
                .await
                .map_err(TransportError::Upgrade)?;
            return Ok(Hijack::Upgraded {
                headers,
                io: TokioIo::new(upgraded),
            });
        }

        let (parts, body) = response.into_parts();
        if parts.status.is_success() {
            Ok(Hijack::Response(EngineStream {
                status: parts.status,
                headers: parts.headers,
                chunks: ChunkStream::new(body),
            }))
        } else {
            let body = collect_body(body).await?;
            Err(EngineError::Remote {
                status: parts.status.as_u16(),
                body,
            })
        }
    }

    fn http_request(&self, desc: RequestDescription, upgrade: bool) -> Result<Request<Full<Bytes>>> {
        let mut req = Request::builder()
            .method(desc.method)
            .uri(desc.path_and_query)
            .body(Full::new(desc.body))
            .map_err(TransportError::from)?;

        *req.headers_mut() = desc.headers;
        let host = HeaderValue::from_str(&self.transport.host_header())
            .map_err(|_| EngineError::InvalidHeader("Host"))?;
        req.headers_mut().insert(header::HOST, host);
        if upgrade {
            req.headers_mut()
                .insert(header::CONNECTION, HeaderValue::from_static("Upgrade"));
            req.headers_mut()
                .insert(header::UPGRADE, HeaderValue::from_static("tcp"));
        } else {
            req.headers_mut()
                .insert(header::CONNECTION, HeaderValue::from_static("close"));
        }
        Ok(req)
    }
}

/// Buffered response from a successful invocation.
#[derive(Debug)]
pub struct EngineResponse {
    /// Response status (always in 200-299).
    pub status: StatusCode,
    /// Response headers; HEAD-style operations carry their result here.
    pub headers: HeaderMap,
    /// Raw response body.
    pub body: Bytes,
}

impl EngineResponse {
    /// Parses the body as JSON; an empty body parses as `null`.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not valid JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        if self.body.is_empty() {
            return Ok(serde_json::Value::Null);
        }
        serde_json::from_slice(&self.body).map_err(EngineError::Json)
    }
}

/// Streamed response from a long-lived operation.
///
/// Yields raw body chunks as the daemon sends them.
pub struct EngineStream {
    /// Response status (always in 200-299).
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
    chunks: ChunkStream,
}

impl std::fmt::Debug for EngineStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EngineStream")
            .field("status", &self.status)
            .field("headers", &self.headers)
            .finish_non_exhaustive()
    }
}

impl Stream for EngineStream {
    type Item = Result<Bytes>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.chunks)
            .poll_next(cx)
            .map(|item| item.map(|chunk| chunk.map_err(EngineError::from)))
    }
}

/// Outcome of an upgradable invocation.
pub enum Hijack {
    /// The daemon switched protocols; raw bidirectional I/O.
    Upgraded {
        /// Headers from the 101 response (notably the stream content
        /// type, raw versus multiplexed).
        headers: HeaderMap,
        /// The hijacked connection.
        io: UpgradedIo,
    },
    /// The daemon answered without upgrading.
    Response(EngineStream),
}
