//! Swarm config operations.

use hyper::Method;

use crate::endpoint::{media, Endpoint, Param};

/// List configs.
pub const LIST: Endpoint = Endpoint {
    name: "ConfigList",
    method: Method::GET,
    path: "/configs",
    accept: media::JSON,
    body_type: media::JSON,
    params: &[Param::query("filters")],
};

/// Create a config.
pub const CREATE: Endpoint = Endpoint {
    name: "ConfigCreate",
    method: Method::POST,
    path: "/configs/create",
    accept: media::JSON,
    body_type: media::JSON,
    params: &[Param::body("body")],
};

/// Return low-level information about a config.
pub const INSPECT: Endpoint = Endpoint {
    name: "ConfigInspect",
    method: Method::GET,
    path: "/configs/{id}",
    accept: media::JSON,
    body_type: media::JSON,
    params: &[Param::path("id")],
};

/// Remove a config.
pub const REMOVE: Endpoint = Endpoint {
    name: "ConfigDelete",
    method: Method::DELETE,
    path: "/configs/{id}",
    accept: media::JSON,
    body_type: media::JSON,
    params: &[Param::path("id")],
};

/// Update a config; only label changes are accepted by the daemon.
pub const UPDATE: Endpoint = Endpoint {
    name: "ConfigUpdate",
    method: Method::POST,
    path: "/configs/{id}/update",
    accept: media::JSON_OR_TEXT,
    body_type: media::JSON,
    params: &[
        Param::path("id"),
        Param::required_query("version"),
        Param::body("body"),
    ],
};
