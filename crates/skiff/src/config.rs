//! Client configuration.

use hyper::header::{HeaderMap, HeaderName, HeaderValue};
use skiff_transport::EngineAddr;

/// Configuration for an [`Engine`](crate::Engine) client.
///
/// Fixed at construction and never mutated afterwards; concurrent calls
/// share it read-only.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    addr: EngineAddr,
    api_version: Option<String>,
    default_headers: HeaderMap,
}

impl EngineConfig {
    /// Configuration for the given daemon address, no version prefix,
    /// no default headers.
    #[must_use]
    pub fn new(addr: EngineAddr) -> Self {
        Self {
            addr,
            api_version: None,
            default_headers: HeaderMap::new(),
        }
    }

    /// Pins every request to an API version via the URL path prefix.
    ///
    /// Accepts `"1.41"` or `"v1.41"`. Without a pinned version the
    /// daemon serves its current default version.
    #[must_use]
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        let version = version.into();
        let version = version.strip_prefix('v').unwrap_or(&version).to_string();
        self.api_version = Some(version);
        self
    }

    /// Adds a header sent with every request (overridable per call by a
    /// declared header parameter).
    #[must_use]
    pub fn with_default_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.default_headers.insert(name, value);
        self
    }

    /// Returns the daemon address.
    #[must_use]
    pub const fn addr(&self) -> &EngineAddr {
        &self.addr
    }

    /// Returns the pinned API version, if any.
    #[must_use]
    pub fn api_version(&self) -> Option<&str> {
        self.api_version.as_deref()
    }

    pub(crate) fn version_prefix(&self) -> String {
        self.api_version
            .as_deref()
            .map(|v| format!("/v{v}"))
            .unwrap_or_default()
    }

    pub(crate) const fn default_headers(&self) -> &HeaderMap {
        &self.default_headers
    }
}
