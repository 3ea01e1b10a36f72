//! Network operations.

use hyper::Method;

use crate::endpoint::{media, Endpoint, Param};

/// List networks.
pub const LIST: Endpoint = Endpoint {
    name: "NetworkList",
    method: Method::GET,
    path: "/networks",
    accept: media::JSON,
    body_type: media::JSON,
    params: &[Param::query("filters")],
};

/// Return low-level information about a network.
pub const INSPECT: Endpoint = Endpoint {
    name: "NetworkInspect",
    method: Method::GET,
    path: "/networks/{id}",
    accept: media::JSON,
    body_type: media::JSON,
    params: &[
        Param::path("id"),
        Param::query("verbose"),
        Param::query("scope"),
    ],
};

/// Remove a network.
pub const REMOVE: Endpoint = Endpoint {
    name: "NetworkDelete",
    method: Method::DELETE,
    path: "/networks/{id}",
    accept: media::JSON_OR_TEXT,
    body_type: media::JSON,
    params: &[Param::path("id")],
};

/// Create a network.
pub const CREATE: Endpoint = Endpoint {
    name: "NetworkCreate",
    method: Method::POST,
    path: "/networks/create",
    accept: media::JSON,
    body_type: media::JSON,
    params: &[Param::required_body("networkConfig")],
};

/// Connect a container to a network.
pub const CONNECT: Endpoint = Endpoint {
    name: "NetworkConnect",
    method: Method::POST,
    path: "/networks/{id}/connect",
    accept: media::JSON_OR_TEXT,
    body_type: media::JSON,
    params: &[Param::path("id"), Param::required_body("container")],
};

/// Disconnect a container from a network.
pub const DISCONNECT: Endpoint = Endpoint {
    name: "NetworkDisconnect",
    method: Method::POST,
    path: "/networks/{id}/disconnect",
    accept: media::JSON_OR_TEXT,
    body_type: media::JSON,
    params: &[Param::path("id"), Param::required_body("container")],
};

/// Delete unused networks.
pub const PRUNE: Endpoint = Endpoint {
    name: "NetworkPrune",
    method: Method::POST,
    path: "/networks/prune",
    accept: media::JSON,
    body_type: media::JSON,
    params: &[Param::query("filters")],
};
