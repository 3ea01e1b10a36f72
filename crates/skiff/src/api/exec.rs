//! Exec operations.

use hyper::Method;

use crate::endpoint::{media, Endpoint, Param};

/// Create an exec instance in a running container.
pub const CREATE: Endpoint = Endpoint {
    name: "ContainerExec",
    method: Method::POST,
    path: "/containers/{id}/exec",
    accept: media::JSON,
    body_type: media::JSON,
    params: &[Param::path("id"), Param::required_body("execConfig")],
};

/// Start a previously created exec instance.
///
/// Unless detached, the daemon hijacks the connection for the command's
/// stdio.
pub const START: Endpoint = Endpoint {
    name: "ExecStart",
    method: Method::POST,
    path: "/exec/{id}/start",
    accept: media::RAW_STREAM,
    body_type: media::JSON,
    params: &[Param::path("id"), Param::body("execStartConfig")],
};

/// Resize the TTY of an exec instance.
pub const RESIZE: Endpoint = Endpoint {
    name: "ExecResize",
    method: Method::POST,
    path: "/exec/{id}/resize",
    accept: media::JSON_OR_TEXT,
    body_type: media::JSON,
    params: &[Param::path("id"), Param::query("h"), Param::query("w")],
};

/// Return low-level information about an exec instance.
pub const INSPECT: Endpoint = Endpoint {
    name: "ExecInspect",
    method: Method::GET,
    path: "/exec/{id}/json",
    accept: media::JSON,
    body_type: media::JSON,
    params: &[Param::path("id")],
};
