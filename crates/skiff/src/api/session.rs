//! Interactive session endpoint.

use hyper::Method;

use crate::endpoint::{media, Endpoint};

/// Start an interactive session with the daemon (used as a transport
/// for builder features). The connection is hijacked after the 101.
pub const START: Endpoint = Endpoint {
    name: "Session",
    method: Method::POST,
    path: "/session",
    accept: media::RAW_STREAM,
    body_type: media::JSON,
    params: &[],
};
