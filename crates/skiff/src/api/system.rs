//! System operations.

use hyper::Method;

use crate::endpoint::{media, Endpoint, Param};

/// Validate registry credentials and obtain an identity token.
pub const AUTH: Endpoint = Endpoint {
    name: "SystemAuth",
    method: Method::POST,
    path: "/auth",
    accept: media::JSON,
    body_type: media::JSON,
    params: &[Param::body("authConfig")],
};

/// Get system-wide information.
pub const INFO: Endpoint = Endpoint {
    name: "SystemInfo",
    method: Method::GET,
    path: "/info",
    accept: media::JSON,
    body_type: media::JSON,
    params: &[],
};

/// Get daemon and API version information.
pub const VERSION: Endpoint = Endpoint {
    name: "SystemVersion",
    method: Method::GET,
    path: "/version",
    accept: media::JSON,
    body_type: media::JSON,
    params: &[],
};

/// Ping the daemon.
pub const PING: Endpoint = Endpoint {
    name: "SystemPing",
    method: Method::GET,
    path: "/_ping",
    accept: media::TEXT,
    body_type: media::JSON,
    params: &[],
};

/// Ping the daemon; the interesting output is the response headers.
pub const PING_HEAD: Endpoint = Endpoint {
    name: "SystemPingHead",
    method: Method::HEAD,
    path: "/_ping",
    accept: media::TEXT,
    body_type: media::JSON,
    params: &[],
};

/// Stream real-time daemon events until the connection is dropped.
pub const EVENTS: Endpoint = Endpoint {
    name: "SystemEvents",
    method: Method::GET,
    path: "/events",
    accept: media::JSON,
    body_type: media::JSON,
    params: &[
        Param::query("since"),
        Param::query("until"),
        Param::query("filters"),
    ],
};

/// Get data usage information (disk space per image/container/volume).
pub const DATA_USAGE: Endpoint = Endpoint {
    name: "SystemDataUsage",
    method: Method::GET,
    path: "/system/df",
    accept: media::JSON_OR_TEXT,
    body_type: media::JSON,
    params: &[],
};
