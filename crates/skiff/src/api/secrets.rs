//! Swarm secret operations.

use hyper::Method;

use crate::endpoint::{media, Endpoint, Param};

/// List secrets.
pub const LIST: Endpoint = Endpoint {
    name: "SecretList",
    method: Method::GET,
    path: "/secrets",
    accept: media::JSON,
    body_type: media::JSON,
    params: &[Param::query("filters")],
};

/// Create a secret.
pub const CREATE: Endpoint = Endpoint {
    name: "SecretCreate",
    method: Method::POST,
    path: "/secrets/create",
    accept: media::JSON,
    body_type: media::JSON,
    params: &[Param::body("body")],
};

/// Return low-level information about a secret.
pub const INSPECT: Endpoint = Endpoint {
    name: "SecretInspect",
    method: Method::GET,
    path: "/secrets/{id}",
    accept: media::JSON,
    body_type: media::JSON,
    params: &[Param::path("id")],
};

/// Remove a secret.
pub const REMOVE: Endpoint = Endpoint {
    name: "SecretDelete",
    method: Method::DELETE,
    path: "/secrets/{id}",
    accept: media::JSON,
    body_type: media::JSON,
    params: &[Param::path("id")],
};

/// Update a secret; only label changes are accepted by the daemon.
pub const UPDATE: Endpoint = Endpoint {
    name: "SecretUpdate",
    method: Method::POST,
    path: "/secrets/{id}/update",
    accept: media::JSON_OR_TEXT,
    body_type: media::JSON,
    params: &[
        Param::path("id"),
        Param::required_query("version"),
        Param::body("body"),
    ],
};
