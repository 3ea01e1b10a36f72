//! Plugin operations.

use hyper::Method;

use crate::endpoint::{media, Endpoint, Param};

/// List installed plugins.
pub const LIST: Endpoint = Endpoint {
    name: "PluginList",
    method: Method::GET,
    path: "/plugins",
    accept: media::JSON,
    body_type: media::JSON,
    params: &[Param::query("filters")],
};

/// Get the privileges a plugin requests before installing it.
pub const PRIVILEGES: Endpoint = Endpoint {
    name: "GetPluginPrivileges",
    method: Method::GET,
    path: "/plugins/privileges",
    accept: media::JSON_OR_TEXT,
    body_type: media::JSON,
    params: &[Param::required_query("remote")],
};

/// Pull and install a plugin; the body grants the requested privileges.
pub const PULL: Endpoint = Endpoint {
    name: "PluginPull",
    method: Method::POST,
    path: "/plugins/pull",
    accept: media::JSON,
    body_type: media::JSON,
    params: &[
        Param::required_query("remote"),
        Param::query("name"),
        Param::header("X-Registry-Auth"),
        Param::body("body"),
    ],
};

/// Return low-level information about a plugin.
pub const INSPECT: Endpoint = Endpoint {
    name: "PluginInspect",
    method: Method::GET,
    path: "/plugins/{name}/json",
    accept: media::JSON_OR_TEXT,
    body_type: media::JSON,
    params: &[Param::path("name")],
};

/// Remove a plugin.
pub const REMOVE: Endpoint = Endpoint {
    name: "PluginDelete",
    method: Method::DELETE,
    path: "/plugins/{name}",
    accept: media::JSON_OR_TEXT,
    body_type: media::JSON,
    params: &[Param::path("name"), Param::query("force")],
};

/// Enable a plugin.
pub const ENABLE: Endpoint = Endpoint {
    name: "PluginEnable",
    method: Method::POST,
    path: "/plugins/{name}/enable",
    accept: media::JSON_OR_TEXT,
    body_type: media::JSON,
    params: &[Param::path("name"), Param::query("timeout")],
};

/// Disable a plugin.
pub const DISABLE: Endpoint = Endpoint {
    name: "PluginDisable",
    method: Method::POST,
    path: "/plugins/{name}/disable",
    accept: media::JSON_OR_TEXT,
    body_type: media::JSON,
    params: &[Param::path("name")],
};

/// Upgrade a plugin in place.
pub const UPGRADE: Endpoint = Endpoint {
    name: "PluginUpgrade",
    method: Method::POST,
    path: "/plugins/{name}/upgrade",
    accept: media::JSON_OR_TEXT,
    body_type: media::JSON,
    params: &[
        Param::path("name"),
        Param::required_query("remote"),
        Param::header("X-Registry-Auth"),
        Param::body("body"),
    ],
};

/// Create a plugin from a tar rootfs and manifest.
pub const CREATE: Endpoint = Endpoint {
    name: "PluginCreate",
    method: Method::POST,
    path: "/plugins/create",
    accept: media::JSON_OR_TEXT,
    body_type: media::TAR,
    params: &[Param::required_query("name"), Param::body("tarContext")],
};

/// Push a plugin to a registry.
pub const PUSH: Endpoint = Endpoint {
    name: "PluginPush",
    method: Method::POST,
    path: "/plugins/{name}/push",
    accept: media::JSON_OR_TEXT,
    body_type: media::JSON,
    params: &[Param::path("name")],
};

/// Change plugin settings.
pub const SET: Endpoint = Endpoint {
    name: "PluginSet",
    method: Method::POST,
    path: "/plugins/{name}/set",
    accept: media::JSON_OR_TEXT,
    body_type: media::JSON,
    params: &[Param::path("name"), Param::body("body")],
};
