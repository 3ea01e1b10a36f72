//! Daemon address parsing.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::TransportError;

/// Default Unix socket the engine daemon listens on.
pub const DEFAULT_SOCKET: &str = "/var/run/docker.sock";

/// Default port for plain-TCP daemon addresses.
pub const DEFAULT_TCP_PORT: u16 = 2375;

/// Address of the container engine daemon.
///
/// Parsed once at client construction and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineAddr {
    /// Unix domain socket path.
    Unix(PathBuf),
    /// TCP host and port.
    Tcp {
        /// Hostname or IP address.
        host: String,
        /// Port number.
        port: u16,
    },
}

impl EngineAddr {
    /// Parses a daemon address.
    ///
    /// Accepts `unix://<path>`, a bare absolute path, or
    /// `tcp://host[:port]` / `http://host[:port]` (port defaults to
    /// [`DEFAULT_TCP_PORT`]).
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::InvalidAddress`] if the address is empty
    /// or uses an unrecognized scheme.
    pub fn parse(s: &str) -> Result<Self, TransportError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(TransportError::InvalidAddress(
                "daemon address must not be empty".to_string(),
            ));
        }

        if let Some(path) = s.strip_prefix("unix://") {
            if path.is_empty() {
                return Err(TransportError::InvalidAddress(
                    "unix address is missing a socket path".to_string(),
                ));
            }
            return Ok(Self::Unix(PathBuf::from(path)));
        }

        if s.starts_with('/') {
            return Ok(Self::Unix(PathBuf::from(s)));
        }

        let hostport = s
            .strip_prefix("tcp://")
            .or_else(|| s.strip_prefix("http://"));
        if let Some(hostport) = hostport {
            let hostport = hostport.trim_end_matches('/');
            let (host, port) = match hostport.rsplit_once(':') {
                Some((host, port)) => {
                    let port = port.parse().map_err(|_| {
                        TransportError::InvalidAddress(format!("invalid port in {s}"))
                    })?;
                    (host, port)
                }
                None => (hostport, DEFAULT_TCP_PORT),
            };
            if host.is_empty() {
                return Err(TransportError::InvalidAddress(format!(
                    "missing host in {s}"
                )));
            }
            return Ok(Self::Tcp {
                host: host.to_string(),
                port,
            });
        }

        Err(TransportError::InvalidAddress(format!(
            "unrecognized daemon address: {s}"
        )))
    }

    /// Value to send as the HTTP `Host` header for this address.
    ///
    /// Unix sockets have no authority; the engine accepts a placeholder.
    #[must_use]
    pub fn host_header(&self) -> String {
        match self {
            Self::Unix(_) => "localhost".to_string(),
            Self::Tcp { host, port } => format!("{host}:{port}"),
        }
    }
}

impl Default for EngineAddr {
    fn default() -> Self {
        Self::Unix(PathBuf::from(DEFAULT_SOCKET))
    }
}

impl fmt::Display for EngineAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unix(path) => write!(f, "unix://{}", path.display()),
            Self::Tcp { host, port } => write!(f, "tcp://{host}:{port}"),
        }
    }
}

impl FromStr for EngineAddr {
    type Err = TransportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_unix_scheme() {
        let addr = EngineAddr::parse("unix:///var/run/docker.sock").unwrap();
        assert_eq!(addr, EngineAddr::Unix(PathBuf::from("/var/run/docker.sock")));
    }

    #[test]
    fn parse_bare_path() {
        let addr = EngineAddr::parse("/tmp/engine.sock").unwrap();
        assert_eq!(addr, EngineAddr::Unix(PathBuf::from("/tmp/engine.sock")));
    }

    #[test]
    fn parse_tcp_with_port() {
        let addr = EngineAddr::parse("tcp://127.0.0.1:2376").unwrap();
        assert_eq!(
            addr,
            EngineAddr::Tcp {
                host: "127.0.0.1".to_string(),
                port: 2376
            }
        );
    }

    #[test]
    fn parse_http_defaults_port() {
        let addr = EngineAddr::parse("http://example.test").unwrap();
        assert_eq!(
            addr,
            EngineAddr::Tcp {
                host: "example.test".to_string(),
                port: DEFAULT_TCP_PORT
            }
        );
    }

    #[test]
    fn parse_empty_is_rejected() {
        assert!(matches!(
            EngineAddr::parse(""),
            Err(TransportError::InvalidAddress(_))
        ));
    }

    #[test]
    fn parse_bad_port_is_rejected() {
        assert!(matches!(
            EngineAddr::parse("tcp://host:notaport"),
            Err(TransportError::InvalidAddress(_))
        ));
    }

    #[test]
    fn default_is_local_socket() {
        assert_eq!(
            EngineAddr::default(),
            EngineAddr::Unix(PathBuf::from(DEFAULT_SOCKET))
        );
    }

    #[test]
    fn display_roundtrips() {
        for s in ["unix:///run/engine.sock", "tcp://localhost:2375"] {
            let addr = EngineAddr::parse(s).unwrap();
            assert_eq!(addr.to_string(), s);
        }
    }

    #[test]
    fn host_header_values() {
        assert_eq!(EngineAddr::default().host_header(), "localhost");
        let tcp = EngineAddr::parse("tcp://node1:2376").unwrap();
        assert_eq!(tcp.host_header(), "node1:2376");
    }
}
