//! Endpoint descriptors and the generic request builder.
//!
//! Every remote operation is described by one static [`Endpoint`] record
//! (verb, path template, declared parameters). A single procedure,
//! [`build_request`], turns a record plus a [`Params`] set into a fully
//! resolved request description; there is no per-endpoint assembly code.

use bytes::Bytes;
use hyper::header::{self, HeaderMap, HeaderName, HeaderValue};
use hyper::Method;
use std::str::FromStr;

use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use crate::params::{ParamValue, Params};

/// Media types used by endpoint declarations.
pub mod media {
    /// JSON request/response payloads.
    pub const JSON: &str = "application/json";
    /// Endpoints that answer JSON on success and plain text otherwise.
    pub const JSON_OR_TEXT: &str = "application/json, text/plain";
    /// Plain text.
    pub const TEXT: &str = "text/plain";
    /// Opaque binary payloads.
    pub const BINARY: &str = "application/octet-stream";
    /// Tar archives (filesystem copy, image bundles, build context).
    pub const TAR: &str = "application/x-tar";
    /// The daemon's multiplexed stdout/stderr stream.
    pub const RAW_STREAM: &str = "application/vnd.docker.raw-stream";
}

/// Where a declared parameter is carried in the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// Substituted into a `{name}` path placeholder.
    Path,
    /// Query string entry.
    Query,
    /// HTTP header.
    Header,
    /// Request body (at most one per endpoint).
    Body,
}

/// One declared parameter of an endpoint.
#[derive(Debug, Clone, Copy)]
pub struct Param {
    /// Wire name (path placeholder, query key, header name, or the
    /// documented body parameter name).
    pub name: &'static str,
    /// Where the parameter is carried.
    pub location: Location,
    /// Whether omitting the parameter fails the call locally.
    pub required: bool,
    /// Default query value, pre-populated then overridden if supplied.
    pub default: Option<&'static str>,
}

impl Param {
    /// Path placeholder; always required.
    pub const fn path(name: &'static str) -> Self {
        Self {
            name,
            location: Location::Path,
            required: true,
            default: None,
        }
    }

    /// Optional query parameter.
    pub const fn query(name: &'static str) -> Self {
        Self {
            name,
            location: Location::Query,
            required: false,
            default: None,
        }
    }

    /// Required query parameter.
    pub const fn required_query(name: &'static str) -> Self {
        Self {
            name,
            location: Location::Query,
            required: true,
            default: None,
        }
    }

    /// Optional query parameter with a documented default.
    pub const fn query_default(name: &'static str, default: &'static str) -> Self {
        Self {
            name,
            location: Location::Query,
            required: false,
            default: Some(default),
        }
    }

    /// Optional header parameter.
    pub const fn header(name: &'static str) -> Self {
        Self {
            name,
            location: Location::Header,
            required: false,
            default: None,
        }
    }

    /// Required header parameter.
    pub const fn required_header(name: &'static str) -> Self {
        Self {
            name,
            location: Location::Header,
            required: true,
            default: None,
        }
    }

    /// Optional body parameter.
    pub const fn body(name: &'static str) -> Self {
        Self {
            name,
            location: Location::Body,
            required: false,
            default: None,
        }
    }

    /// Required body parameter.
    pub const fn required_body(name: &'static str) -> Self {
        Self {
            name,
            location: Location::Body,
            required: true,
            default: None,
        }
    }
}

/// Static description of one remote operation.
#[derive(Debug)]
pub struct Endpoint {
    /// Operation name, as the remote API documents it.
    pub name: &'static str,
    /// HTTP verb.
    pub method: Method,
    /// Path template with `{name}` placeholders.
    pub path: &'static str,
    /// Media type the operation responds with on success.
    pub accept: &'static str,
    /// Media type of a raw (non-JSON) request body.
    pub body_type: &'static str,
    /// Declared parameters.
    pub params: &'static [Param],
}

impl Endpoint {
    /// Whether a successful response carries JSON.
    #[must_use]
    pub fn expects_json(&self) -> bool {
        self.accept.starts_with(media::JSON)
    }

    fn params_at(&self, location: Location) -> impl Iterator<Item = &Param> {
        self.params.iter().filter(move |p| p.location == location)
    }
}

/// A fully resolved request, ready for the transport.
///
/// Constructed fresh per call and discarded after the exchange.
#[derive(Debug)]
pub struct RequestDescription {
    /// HTTP verb.
    pub method: Method,
    /// Origin-form URI: version prefix, substituted path, query string.
    pub path_and_query: String,
    /// Resolved headers (defaults, accept, header parameters,
    /// content type).
    pub headers: HeaderMap,
    /// Resolved body; empty means no body is sent.
    pub body: Bytes,
}

/// Resolves an endpoint descriptor and a parameter set into a request.
///
/// Validation is ordered path, query, header, body; the first missing
/// required parameter aborts the build, so no network I/O can happen
/// for an invalid call. The free-form query bag is merged last and wins
/// over declared parameters on key collision.
///
/// # Errors
///
/// Returns [`EngineError::MissingParameter`] for the first absent
/// required parameter, [`EngineError::InvalidHeader`] for a header
/// value that is not a legal HTTP header, and
/// [`EngineError::Serialize`] if a JSON body fails to serialize.
pub fn build_request(
    endpoint: &Endpoint,
    config: &EngineConfig,
    params: &Params,
) -> Result<RequestDescription> {
    // Path placeholders: exact, encoded substitution.
    let mut path = endpoint.path.to_string();
    for param in endpoint.params_at(Location::Path) {
        let value = params
            .get(param.name)
            .ok_or(EngineError::MissingParameter(param.name))?;
        let placeholder = format!("{{{}}}", param.name);
        let encoded = urlencoding::encode(&value.render()).into_owned();
        path = path.replace(&placeholder, &encoded);
    }

    // Query: defaults pre-populated, overridden when supplied, omitted
    // when absent.
    let mut query: Vec<(String, String)> = Vec::new();
    for param in endpoint.params_at(Location::Query) {
        match params.get(param.name) {
            Some(value) => query.push((param.name.to_string(), value.render())),
            None => match param.default {
                Some(default) => query.push((param.name.to_string(), default.to_string())),
                None if param.required => {
                    return Err(EngineError::MissingParameter(param.name));
                }
                None => {}
            },
        }
    }

    // Headers: per-client defaults first, then the endpoint's accept
    // type, then declared header parameters.
    let mut headers = config.default_headers().clone();
    headers.insert(
        header::ACCEPT,
        HeaderValue::from_static(endpoint.accept),
    );
    for param in endpoint.params_at(Location::Header) {
        match params.get(param.name) {
            Some(value) => {
                let name = HeaderName::from_str(param.name)
                    .map_err(|_| EngineError::InvalidHeader(param.name))?;
                let value = HeaderValue::from_str(&value.render())
                    .map_err(|_| EngineError::InvalidHeader(param.name))?;
                headers.insert(name, value);
            }
            None if param.required => {
                return Err(EngineError::MissingParameter(param.name));
            }
            None => {}
        }
    }

    // Body: at most one declared parameter. Structured values go out as
    // JSON; strings and raw payloads pass through verbatim with the
    // endpoint's declared media type.
    let mut body = Bytes::new();
    for param in endpoint.params_at(Location::Body) {
        match params.get(param.name) {
            Some(value) => {
                let content_type = match value {
                    ParamValue::Json(v) => {
                        body = Bytes::from(
                            serde_json::to_vec(v).map_err(EngineError::Serialize)?,
                        );
                        media::JSON
                    }
                    ParamValue::Bool(_) | ParamValue::Int(_) => {
                        body = Bytes::from(value.render());
                        media::JSON
                    }
                    ParamValue::Str(s) => {
                        body = Bytes::from(s.clone());
                        endpoint.body_type
                    }
                    ParamValue::Bytes(b) => {
                        body = b.clone();
                        endpoint.body_type
                    }
                };
                headers.insert(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static(content_type),
                );
            }
            None if param.required => {
                return Err(EngineError::MissingParameter(param.name));
            }
            None => {}
        }
    }

    // Free-form query bag, applied last; last write wins.
    for (name, value) in params.extra_query_pairs() {
        query.retain(|(existing, _)| existing != name);
        query.push((name.clone(), value.clone()));
    }

    let mut path_and_query = format!("{}{}", config.version_prefix(), path);
    if !query.is_empty() {
        let encoded: Vec<String> = query
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect();
        path_and_query.push('?');
        path_and_query.push_str(&encoded.join("&"));
    }

    Ok(RequestDescription {
        method: endpoint.method.clone(),
        path_and_query,
        headers,
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api;
    use serde_json::json;

    fn config() -> EngineConfig {
        EngineConfig::default()
    }

    #[test]
    fn list_without_parameters_hits_bare_path() {
        let desc = build_request(&api::containers::LIST, &config(), &Params::new()).unwrap();
        assert_eq!(desc.method, Method::GET);
        assert_eq!(desc.path_and_query, "/containers/json");
        assert!(desc.body.is_empty());
    }

    #[test]
    fn inspect_substitutes_path_placeholder() {
        let params = Params::new().set("id", "abc123");
        let desc = build_request(&api::containers::INSPECT, &config(), &params).unwrap();
        assert_eq!(desc.path_and_query, "/containers/abc123/json");
    }

    #[test]
    fn path_values_are_percent_encoded() {
        let params = Params::new().set("id", "a/b c?");
        let desc = build_request(&api::containers::INSPECT, &config(), &params).unwrap();
        assert_eq!(desc.path_and_query, "/containers/a%2Fb%20c%3F/json");
    }

    #[test]
    fn missing_path_parameter_fails_first() {
        // Rename requires both the path `id` and the query `name`; the
        // path check must win.
        let err = build_request(&api::containers::RENAME, &config(), &Params::new()).unwrap_err();
        assert!(matches!(err, EngineError::MissingParameter("id")));
    }

    #[test]
    fn missing_required_query_parameter_is_reported() {
        let params = Params::new().set("id", "abc");
        let err = build_request(&api::containers::RENAME, &config(), &params).unwrap_err();
        assert!(matches!(err, EngineError::MissingParameter("name")));
    }

    #[test]
    fn missing_version_on_update_is_reported() {
        let params = Params::new()
            .set("id", "svc1")
            .set("body", json!({"Name": "svc1"}));
        let err = build_request(&api::services::UPDATE, &config(), &params).unwrap_err();
        assert!(matches!(err, EngineError::MissingParameter("version")));
    }

    #[test]
    fn missing_required_header_is_reported() {
        let params = Params::new().set("name", "registry.test/app");
        let err = build_request(&api::images::PUSH, &config(), &params).unwrap_err();
        assert!(matches!(
            err,
            EngineError::MissingParameter("X-Registry-Auth")
        ));
    }

    #[test]
    fn missing_required_body_is_reported() {
        let err = build_request(&api::containers::CREATE, &config(), &Params::new()).unwrap_err();
        assert!(matches!(err, EngineError::MissingParameter("body")));
    }

    #[test]
    fn query_validation_precedes_body_validation() {
        // Node update requires both `version` (query) and `body`.
        let params = Params::new().set("id", "node1");
        let err = build_request(&api::nodes::UPDATE, &config(), &params).unwrap_err();
        assert!(matches!(err, EngineError::MissingParameter("version")));
    }

    #[test]
    fn declared_default_appears_in_query() {
        let params = Params::new().set("id", "abc");
        let desc = build_request(&api::containers::LOGS, &config(), &params).unwrap();
        assert_eq!(desc.path_and_query, "/containers/abc/logs?tail=all");
    }

    #[test]
    fn supplied_value_overrides_default() {
        let params = Params::new().set("id", "abc").set("tail", "50");
        let desc = build_request(&api::containers::LOGS, &config(), &params).unwrap();
        assert_eq!(desc.path_and_query, "/containers/abc/logs?tail=50");
    }

    #[test]
    fn stats_streams_by_default() {
        let params = Params::new().set("id", "abc");
        let desc = build_request(&api::containers::STATS, &config(), &params).unwrap();
        assert_eq!(desc.path_and_query, "/containers/abc/stats?stream=true");
    }

    #[test]
    fn absent_optional_parameters_are_omitted() {
        let desc = build_request(&api::images::LIST, &config(), &Params::new()).unwrap();
        assert_eq!(desc.path_and_query, "/images/json");
    }

    #[test]
    fn json_body_is_serialized_with_content_type() {
        let params = Params::new().set("body", json!({"Image": "alpine"}));
        let desc = build_request(&api::containers::CREATE, &config(), &params).unwrap();
        assert_eq!(desc.method, Method::POST);
        assert_eq!(
            desc.headers.get(header::CONTENT_TYPE).unwrap(),
            media::JSON
        );
        let body: serde_json::Value = serde_json::from_slice(&desc.body).unwrap();
        assert_eq!(body["Image"], "alpine");
    }

    #[test]
    fn raw_body_keeps_declared_media_type() {
        let params = Params::new()
            .set("id", "abc")
            .set("path", "/srv")
            .set("inputStream", Bytes::from_static(b"tarball"));
        let desc = build_request(&api::containers::PUT_ARCHIVE, &config(), &params).unwrap();
        assert_eq!(desc.headers.get(header::CONTENT_TYPE).unwrap(), media::TAR);
        assert_eq!(&desc.body[..], b"tarball");
        assert_eq!(
            desc.path_and_query,
            "/containers/abc/archive?path=%2Fsrv"
        );
    }

    #[test]
    fn header_parameter_is_set_verbatim() {
        let params = Params::new()
            .set("name", "registry.test/app")
            .set("X-Registry-Auth", "dG9rZW4=");
        let desc = build_request(&api::images::PUSH, &config(), &params).unwrap();
        assert_eq!(
            desc.headers.get("x-registry-auth").unwrap(),
            "dG9rZW4="
        );
    }

    #[test]
    fn extra_query_bag_adds_undeclared_parameter() {
        let params = Params::new().extra_query("experimental", "1");
        let desc = build_request(&api::containers::LIST, &config(), &params).unwrap();
        assert_eq!(desc.path_and_query, "/containers/json?experimental=1");
    }

    #[test]
    fn extra_query_bag_wins_collisions() {
        let params = Params::new()
            .set("id", "abc")
            .set("tail", "50")
            .extra_query("tail", "10");
        let desc = build_request(&api::containers::LOGS, &config(), &params).unwrap();
        assert_eq!(desc.path_and_query, "/containers/abc/logs?tail=10");
    }

    #[test]
    fn query_values_are_percent_encoded() {
        let params = Params::new().set("filters", json!({"status": ["paused"]}));
        let desc = build_request(&api::containers::LIST, &config(), &params).unwrap();
        assert_eq!(
            desc.path_and_query,
            "/containers/json?filters=%7B%22status%22%3A%5B%22paused%22%5D%7D"
        );
    }

    #[test]
    fn version_prefix_is_applied() {
        let config = EngineConfig::default().with_api_version("1.41");
        let desc = build_request(&api::system::PING, &config, &Params::new()).unwrap();
        assert_eq!(desc.path_and_query, "/v1.41/_ping");
    }

    #[test]
    fn accept_header_follows_the_declaration() {
        let params = Params::new().set("id", "abc");
        let desc = build_request(&api::containers::EXPORT, &config(), &params).unwrap();
        assert_eq!(
            desc.headers.get(header::ACCEPT).unwrap(),
            media::BINARY
        );
    }

    #[test]
    fn default_headers_are_carried_and_overridable() {
        let config = EngineConfig::default().with_default_header(
            HeaderName::from_static("x-trace"),
            HeaderValue::from_static("t-1"),
        );
        let desc = build_request(&api::containers::LIST, &config, &Params::new()).unwrap();
        assert_eq!(desc.headers.get("x-trace").unwrap(), "t-1");
    }

    #[test]
    fn boolean_and_integer_values_render_on_the_wire() {
        let params = Params::new().set("all", true).set("limit", 5);
        let desc = build_request(&api::containers::LIST, &config(), &params).unwrap();
        assert_eq!(desc.path_and_query, "/containers/json?all=true&limit=5");
    }
}
