//! Volume operations.

use hyper::Method;

use crate::endpoint::{media, Endpoint, Param};

/// List volumes.
pub const LIST: Endpoint = Endpoint {
    name: "VolumeList",
    method: Method::GET,
    path: "/volumes",
    accept: media::JSON,
    body_type: media::JSON,
    params: &[Param::query("filters")],
};

/// Create a volume.
pub const CREATE: Endpoint = Endpoint {
    name: "VolumeCreate",
    method: Method::POST,
    path: "/volumes/create",
    accept: media::JSON,
    body_type: media::JSON,
    params: &[Param::required_body("volumeConfig")],
};

/// Return low-level information about a volume.
pub const INSPECT: Endpoint = Endpoint {
    name: "VolumeInspect",
    method: Method::GET,
    path: "/volumes/{name}",
    accept: media::JSON,
    body_type: media::JSON,
    params: &[Param::path("name")],
};

/// Remove a volume.
pub const REMOVE: Endpoint = Endpoint {
    name: "VolumeDelete",
    method: Method::DELETE,
    path: "/volumes/{name}",
    accept: media::JSON_OR_TEXT,
    body_type: media::JSON,
    params: &[Param::path("name"), Param::query("force")],
};

/// Delete unused volumes.
pub const PRUNE: Endpoint = Endpoint {
    name: "VolumePrune",
    method: Method::POST,
    path: "/volumes/prune",
    accept: media::JSON,
    body_type: media::JSON,
    params: &[Param::query("filters")],
};
