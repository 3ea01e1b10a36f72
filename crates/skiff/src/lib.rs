//! # skiff
//!
//! Client for the Docker Engine HTTP API.
//!
//! Every remote operation is a stateless translation from a flat
//! parameter set to one HTTP request. Instead of one hand-written
//! function per endpoint, the full catalogue lives in
//! [`api`] as static [`Endpoint`](endpoint::Endpoint) records, and a
//! single generic procedure assembles and dispatches the request:
//!
//! ```text
//! Params ──► request builder ──► RequestDescription ──► transport ──► daemon
//!               (endpoint.rs)                        (skiff-transport)
//! ```
//!
//! There is no retry, timeout, or caching logic anywhere in the client;
//! each call is one best-effort exchange whose outcome is classified by
//! status code. Sequencing between calls (create-then-start) and the
//! lifecycle of streamed or hijacked connections belong to the caller.
//!
//! ## Usage
//!
//! ```no_run
//! use skiff::{api, Engine, EngineConfig, Params};
//!
//! # async fn run() -> skiff::Result<()> {
//! let engine = Engine::new(EngineConfig::default());
//!
//! // GET /containers/json?all=true
//! let containers = engine
//!     .invoke_json(&api::containers::LIST, &Params::new().set("all", true))
//!     .await?;
//!
//! // POST /containers/create with a JSON body
//! let created = engine
//!     .invoke_json(
//!         &api::containers::CREATE,
//!         &Params::new().set("body", serde_json::json!({"Image": "alpine"})),
//!     )
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Authentication
//!
//! Registry-facing operations forward an opaque credential in the
//! `X-Registry-Auth` header; see [`RegistryAuth`]. Nothing is stored or
//! validated locally.

#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod api;
pub mod auth;
pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod params;

pub use auth::RegistryAuth;
pub use client::{Engine, EngineResponse, EngineStream, Hijack, UpgradedIo};
pub use config::EngineConfig;
pub use error::{EngineError, Result};
pub use params::{ParamValue, Params};
pub use skiff_transport::EngineAddr;

/// API version the catalogue is generated against.
pub const API_VERSION: &str = "1.41";
