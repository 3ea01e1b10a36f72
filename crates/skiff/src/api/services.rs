//! Swarm service operations.

use hyper::Method;

use crate::endpoint::{media, Endpoint, Param};

/// List services.
pub const LIST: Endpoint = Endpoint {
    name: "ServiceList",
    method: Method::GET,
    path: "/services",
    accept: media::JSON_OR_TEXT,
    body_type: media::JSON,
    params: &[Param::query("filters"), Param::query("status")],
};

/// Create a service.
pub const CREATE: Endpoint = Endpoint {
    name: "ServiceCreate",
    method: Method::POST,
    path: "/services/create",
    accept: media::JSON,
    body_type: media::JSON,
    params: &[
        Param::header("X-Registry-Auth"),
        Param::required_body("body"),
    ],
};

/// Return low-level information about a service.
pub const INSPECT: Endpoint = Endpoint {
    name: "ServiceInspect",
    method: Method::GET,
    path: "/services/{id}",
    accept: media::JSON_OR_TEXT,
    body_type: media::JSON,
    params: &[Param::path("id"), Param::query("insertDefaults")],
};

/// Remove a service.
pub const REMOVE: Endpoint = Endpoint {
    name: "ServiceDelete",
    method: Method::DELETE,
    path: "/services/{id}",
    accept: media::JSON_OR_TEXT,
    body_type: media::JSON,
    params: &[Param::path("id")],
};

/// Update a service; `version` must match the current spec version.
pub const UPDATE: Endpoint = Endpoint {
    name: "ServiceUpdate",
    method: Method::POST,
    path: "/services/{id}/update",
    accept: media::JSON,
    body_type: media::JSON,
    params: &[
        Param::path("id"),
        Param::required_query("version"),
        Param::query_default("registryAuthFrom", "spec"),
        Param::query("rollback"),
        Param::header("X-Registry-Auth"),
        Param::required_body("body"),
    ],
};

/// Get service logs; only works for services with a supported logging
/// driver.
pub const LOGS: Endpoint = Endpoint {
    name: "ServiceLogs",
    method: Method::GET,
    path: "/services/{id}/logs",
    accept: media::JSON_OR_TEXT,
    body_type: media::JSON,
    params: &[
        Param::path("id"),
        Param::query("details"),
        Param::query("follow"),
        Param::query("stdout"),
        Param::query("stderr"),
        Param::query("since"),
        Param::query("timestamps"),
        Param::query_default("tail", "all"),
    ],
};
