//! One-shot HTTP/1.1 exchanges with the engine daemon.
//!
//! Every call opens a fresh connection, performs the handshake, sends a
//! single request, and returns the response with its body still lazy.
//! This works for fixed-length responses as well as chunked streaming
//! responses like logs and events, and keeps the connection task alive
//! for HTTP upgrades (attach, exec).

use bytes::Bytes;
use http_body_util::{BodyExt, BodyStream, Full};
use hyper::body::Incoming;
use hyper::client::conn::http1;
use hyper::{Request, Response};
use hyper_util::rt::TokioIo;
use std::io;
use std::pin::Pin;
use std::task::{ready, Context, Poll};
use tokio::io::{AsyncRead, AsyncWrite, ReadBuf};
use tokio::net::TcpStream;
#[cfg(unix)]
use tokio::net::UnixStream;

use crate::addr::EngineAddr;
use crate::error::{Result, TransportError};

// =============================================================================
// IoStream — either flavour of daemon socket
// =============================================================================

enum IoStream {
    #[cfg(unix)]
    Unix(UnixStream),
    Tcp(TcpStream),
}

impl AsyncRead for IoStream {
    fn poll_read(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        match self.get_mut() {
            #[cfg(unix)]
            Self::Unix(s) => Pin::new(s).poll_read(cx, buf),
            Self::Tcp(s) => Pin::new(s).poll_read(cx, buf),
        }
    }
}

impl AsyncWrite for IoStream {
    fn poll_write(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &[u8],
    ) -> Poll<io::Result<usize>> {
        match self.get_mut() {
            #[cfg(unix)]
            Self::Unix(s) => Pin::new(s).poll_write(cx, buf),
            Self::Tcp(s) => Pin::new(s).poll_write(cx, buf),
        }
    }

    fn poll_flush(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        match self.get_mut() {
            #[cfg(unix)]
            Self::Unix(s) => Pin::new(s).poll_flush(cx),
            Self::Tcp(s) => Pin::new(s).poll_flush(cx),
        }
    }

    fn poll_shutdown(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        match self.get_mut() {
            #[cfg(unix)]
            Self::Unix(s) => Pin::new(s).poll_shutdown(cx),
            Self::Tcp(s) => Pin::new(s).poll_shutdown(cx),
        }
    }
}

// =============================================================================
// Transport
// =============================================================================

/// Transport to a single daemon address.
///
/// Holds only the address; connections are opened per call and no state
/// is retained between calls.
#[derive(Debug, Clone)]
pub struct Transport {
    addr: EngineAddr,
}

impl Transport {
    /// Creates a transport for the given daemon address.
    #[must_use]
    pub const fn new(addr: EngineAddr) -> Self {
        Self { addr }
    }

    /// Returns the daemon address.
    #[must_use]
    pub const fn addr(&self) -> &EngineAddr {
        &self.addr
    }

    /// Value to send as the HTTP `Host` header.
    #[must_use]
    pub fn host_header(&self) -> String {
        self.addr.host_header()
    }

    async fn connect(&self) -> Result<IoStream> {
        match &self.addr {
            #[cfg(unix)]
            EngineAddr::Unix(path) => {
                UnixStream::connect(path)
                    .await
                    .map(IoStream::Unix)
                    .map_err(|source| TransportError::Connect {
                        addr: self.addr.to_string(),
                        source,
                    })
            }
            #[cfg(not(unix))]
            EngineAddr::Unix(_) => Err(TransportError::InvalidAddress(
                "unix sockets are not supported on this platform".to_string(),
            )),
            EngineAddr::Tcp { host, port } => {
                TcpStream::connect((host.as_str(), *port))
                    .await
                    .map(IoStream::Tcp)
                    .map_err(|source| TransportError::Connect {
                        addr: self.addr.to_string(),
                        source,
                    })
            }
        }
    }

    /// Performs one HTTP/1.1 exchange and returns the response with its
    /// body unread.
    ///
    /// The connection task keeps running in the background so the body
    /// can be streamed lazily and 101 upgrades stay functional; it ends
    /// when the body (or upgraded stream) is dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if connecting, the handshake, or sending the
    /// request fails.
    pub async fn roundtrip(&self, req: Request<Full<Bytes>>) -> Result<Response<Incoming>> {
        let stream = self.connect().await?;
        let io = TokioIo::new(stream);

        let (mut sender, conn) = http1::Builder::new()
            .handshake(io)
            .await
            .map_err(TransportError::Handshake)?;

        tokio::spawn(async move {
            if let Err(e) = conn.with_upgrades().await {
                let msg = e.to_string().to_lowercase();
                if !msg.contains("canceled") && !msg.contains("incomplete") {
                    tracing::debug!("engine connection ended: {}", e);
                }
            }
        });

        tracing::debug!(method = %req.method(), path = %req.uri(), "sending request");

        sender.send_request(req).await.map_err(TransportError::Io)
    }
}

/// Collects a lazy response body into memory.
///
/// # Errors
///
/// Returns an error if reading the body fails.
pub async fn collect_body(body: Incoming) -> Result<Bytes> {
    Ok(body.collect().await.map_err(TransportError::Body)?.to_bytes())
}

// =============================================================================
// ChunkStream — lazy body as a stream of data chunks
// =============================================================================

/// Response body exposed as a stream of data chunks.
///
/// Used for long-lived endpoints (logs, events, stats). Any multiplexed
/// framing inside the chunks is the consumer's concern; this type only
/// surfaces raw bytes as the daemon sends them.
pub struct ChunkStream {
    inner: BodyStream<Incoming>,
}

impl ChunkStream {
    /// Wraps a lazy response body.
    #[must_use]
    pub fn new(body: Incoming) -> Self {
        Self {
            inner: BodyStream::new(body),
        }
    }
}

impl futures::Stream for ChunkStream {
    type Item = Result<Bytes>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        loop {
            match ready!(Pin::new(&mut self.inner).poll_next(cx)) {
                Some(Ok(frame)) => {
                    // Trailer frames are dropped; only data reaches the caller.
                    if let Ok(data) = frame.into_data() {
                        return Poll::Ready(Some(Ok(data)));
                    }
                }
                Some(Err(e)) => return Poll::Ready(Some(Err(TransportError::Body(e)))),
                None => return Poll::Ready(None),
            }
        }
    }
}
