//! Swarm node operations.

use hyper::Method;

use crate::endpoint::{media, Endpoint, Param};

/// List swarm nodes.
pub const LIST: Endpoint = Endpoint {
    name: "NodeList",
    method: Method::GET,
    path: "/nodes",
    accept: media::JSON_OR_TEXT,
    body_type: media::JSON,
    params: &[Param::query("filters")],
};

/// Return low-level information about a node.
pub const INSPECT: Endpoint = Endpoint {
    name: "NodeInspect",
    method: Method::GET,
    path: "/nodes/{id}",
    accept: media::JSON_OR_TEXT,
    body_type: media::JSON,
    params: &[Param::path("id")],
};

/// Remove a node from the swarm.
pub const REMOVE: Endpoint = Endpoint {
    name: "NodeDelete",
    method: Method::DELETE,
    path: "/nodes/{id}",
    accept: media::JSON_OR_TEXT,
    body_type: media::JSON,
    params: &[Param::path("id"), Param::query("force")],
};

/// Update a node; `version` must match the current node version.
pub const UPDATE: Endpoint = Endpoint {
    name: "NodeUpdate",
    method: Method::POST,
    path: "/nodes/{id}/update",
    accept: media::JSON_OR_TEXT,
    body_type: media::JSON,
    params: &[
        Param::path("id"),
        Param::required_query("version"),
        Param::body("body"),
    ],
};
