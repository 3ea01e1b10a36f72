//! Swarm operations.

use hyper::Method;

use crate::endpoint::{media, Endpoint, Param};

/// Inspect the swarm.
pub const INSPECT: Endpoint = Endpoint {
    name: "SwarmInspect",
    method: Method::GET,
    path: "/swarm",
    accept: media::JSON_OR_TEXT,
    body_type: media::JSON,
    params: &[],
};

/// Initialize a new swarm.
pub const INIT: Endpoint = Endpoint {
    name: "SwarmInit",
    method: Method::POST,
    path: "/swarm/init",
    accept: media::JSON_OR_TEXT,
    body_type: media::JSON,
    params: &[Param::required_body("body")],
};

/// Join an existing swarm.
pub const JOIN: Endpoint = Endpoint {
    name: "SwarmJoin",
    method: Method::POST,
    path: "/swarm/join",
    accept: media::JSON_OR_TEXT,
    body_type: media::JSON,
    params: &[Param::required_body("body")],
};

/// Leave the swarm.
pub const LEAVE: Endpoint = Endpoint {
    name: "SwarmLeave",
    method: Method::POST,
    path: "/swarm/leave",
    accept: media::JSON_OR_TEXT,
    body_type: media::JSON,
    params: &[Param::query("force")],
};

/// Update the swarm; `version` must match the current spec version.
pub const UPDATE: Endpoint = Endpoint {
    name: "SwarmUpdate",
    method: Method::POST,
    path: "/swarm/update",
    accept: media::JSON_OR_TEXT,
    body_type: media::JSON,
    params: &[
        Param::required_query("version"),
        Param::query("rotateWorkerToken"),
        Param::query("rotateManagerToken"),
        Param::query("rotateManagerUnlockKey"),
        Param::required_body("body"),
    ],
};

/// Get the unlock key for a locked manager.
pub const UNLOCK_KEY: Endpoint = Endpoint {
    name: "SwarmUnlockkey",
    method: Method::GET,
    path: "/swarm/unlockkey",
    accept: media::JSON_OR_TEXT,
    body_type: media::JSON,
    params: &[],
};

/// Unlock a locked manager.
pub const UNLOCK: Endpoint = Endpoint {
    name: "SwarmUnlock",
    method: Method::POST,
    path: "/swarm/unlock",
    accept: media::JSON,
    body_type: media::JSON,
    params: &[Param::required_body("body")],
};
