//! Registry distribution operations.

use hyper::Method;

use crate::endpoint::{media, Endpoint, Param};

/// Return image digest and platform information from a registry without
/// pulling the image.
pub const INSPECT: Endpoint = Endpoint {
    name: "DistributionInspect",
    method: Method::GET,
    path: "/distribution/{name}/json",
    accept: media::JSON,
    body_type: media::JSON,
    params: &[Param::path("name")],
};
