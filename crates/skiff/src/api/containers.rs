//! Container operations.

use hyper::Method;

use crate::endpoint::{media, Endpoint, Param};

/// List containers. Only running containers are shown unless `all` is set.
pub const LIST: Endpoint = Endpoint {
    name: "ContainerList",
    method: Method::GET,
    path: "/containers/json",
    accept: media::JSON,
    body_type: media::JSON,
    params: &[
        Param::query("all"),
        Param::query("limit"),
        Param::query("size"),
        Param::query("filters"),
    ],
};

/// Create a container from a configuration body.
pub const CREATE: Endpoint = Endpoint {
    name: "ContainerCreate",
    method: Method::POST,
    path: "/containers/create",
    accept: media::JSON,
    body_type: media::JSON,
    params: &[Param::query("name"), Param::required_body("body")],
};

/// Return low-level information about a container.
pub const INSPECT: Endpoint = Endpoint {
    name: "ContainerInspect",
    method: Method::GET,
    path: "/containers/{id}/json",
    accept: media::JSON,
    body_type: media::JSON,
    params: &[Param::path("id"), Param::query("size")],
};

/// List processes running inside a container (`ps` on Unix daemons).
pub const TOP: Endpoint = Endpoint {
    name: "ContainerTop",
    method: Method::GET,
    path: "/containers/{id}/top",
    accept: media::JSON_OR_TEXT,
    body_type: media::JSON,
    params: &[Param::path("id"), Param::query_default("ps_args", "-ef")],
};

/// Get stdout/stderr logs from a container.
///
/// With `follow` the response streams until the connection is dropped;
/// the chunks carry the daemon's multiplexed framing for non-TTY
/// containers.
pub const LOGS: Endpoint = Endpoint {
    name: "ContainerLogs",
    method: Method::GET,
    path: "/containers/{id}/logs",
    accept: media::JSON_OR_TEXT,
    body_type: media::JSON,
    params: &[
        Param::path("id"),
        Param::query("follow"),
        Param::query("stdout"),
        Param::query("stderr"),
        Param::query("since"),
        Param::query("until"),
        Param::query("timestamps"),
        Param::query_default("tail", "all"),
    ],
};

/// List filesystem changes (added/modified/deleted) in a container.
pub const CHANGES: Endpoint = Endpoint {
    name: "ContainerChanges",
    method: Method::GET,
    path: "/containers/{id}/changes",
    accept: media::JSON,
    body_type: media::JSON,
    params: &[Param::path("id")],
};

/// Export a container's filesystem as a tarball.
pub const EXPORT: Endpoint = Endpoint {
    name: "ContainerExport",
    method: Method::GET,
    path: "/containers/{id}/export",
    accept: media::BINARY,
    body_type: media::JSON,
    params: &[Param::path("id")],
};

/// Resource usage statistics; streams one sample per second unless
/// `stream` is disabled.
pub const STATS: Endpoint = Endpoint {
    name: "ContainerStats",
    method: Method::GET,
    path: "/containers/{id}/stats",
    accept: media::JSON,
    body_type: media::JSON,
    params: &[
        Param::path("id"),
        Param::query_default("stream", "true"),
        Param::query("one-shot"),
    ],
};

/// Resize the container's TTY.
pub const RESIZE: Endpoint = Endpoint {
    name: "ContainerResize",
    method: Method::POST,
    path: "/containers/{id}/resize",
    accept: media::TEXT,
    body_type: media::BINARY,
    params: &[Param::path("id"), Param::query("h"), Param::query("w")],
};

/// Start a container.
pub const START: Endpoint = Endpoint {
    name: "ContainerStart",
    method: Method::POST,
    path: "/containers/{id}/start",
    accept: media::JSON_OR_TEXT,
    body_type: media::JSON,
    params: &[Param::path("id"), Param::query("detachKeys")],
};

/// Stop a container, killing it after `t` seconds.
pub const STOP: Endpoint = Endpoint {
    name: "ContainerStop",
    method: Method::POST,
    path: "/containers/{id}/stop",
    accept: media::JSON_OR_TEXT,
    body_type: media::JSON,
    params: &[Param::path("id"), Param::query("t")],
};

/// Restart a container.
pub const RESTART: Endpoint = Endpoint {
    name: "ContainerRestart",
    method: Method::POST,
    path: "/containers/{id}/restart",
    accept: media::JSON_OR_TEXT,
    body_type: media::JSON,
    params: &[Param::path("id"), Param::query("t")],
};

/// Send a POSIX signal to a container.
pub const KILL: Endpoint = Endpoint {
    name: "ContainerKill",
    method: Method::POST,
    path: "/containers/{id}/kill",
    accept: media::JSON_OR_TEXT,
    body_type: media::JSON,
    params: &[Param::path("id"), Param::query_default("signal", "SIGKILL")],
};

/// Change resource limits of a running container.
pub const UPDATE: Endpoint = Endpoint {
    name: "ContainerUpdate",
    method: Method::POST,
    path: "/containers/{id}/update",
    accept: media::JSON,
    body_type: media::JSON,
    params: &[Param::path("id"), Param::required_body("update")],
};

/// Rename a container.
pub const RENAME: Endpoint = Endpoint {
    name: "ContainerRename",
    method: Method::POST,
    path: "/containers/{id}/rename",
    accept: media::JSON_OR_TEXT,
    body_type: media::JSON,
    params: &[Param::path("id"), Param::required_query("name")],
};

/// Pause a container (cgroup freezer).
pub const PAUSE: Endpoint = Endpoint {
    name: "ContainerPause",
    method: Method::POST,
    path: "/containers/{id}/pause",
    accept: media::JSON_OR_TEXT,
    body_type: media::JSON,
    params: &[Param::path("id")],
};

/// Resume a paused container.
pub const UNPAUSE: Endpoint = Endpoint {
    name: "ContainerUnpause",
    method: Method::POST,
    path: "/containers/{id}/unpause",
    accept: media::JSON_OR_TEXT,
    body_type: media::JSON,
    params: &[Param::path("id")],
};

/// Attach to a container's stdio over the request connection.
///
/// The daemon hijacks the connection (101) for bidirectional I/O;
/// stream demultiplexing is the consumer's concern.
pub const ATTACH: Endpoint = Endpoint {
    name: "ContainerAttach",
    method: Method::POST,
    path: "/containers/{id}/attach",
    accept: media::RAW_STREAM,
    body_type: media::JSON,
    params: &[
        Param::path("id"),
        Param::query("detachKeys"),
        Param::query("logs"),
        Param::query("stream"),
        Param::query("stdin"),
        Param::query("stdout"),
        Param::query("stderr"),
    ],
};

/// Attach to a container over a websocket.
pub const ATTACH_WS: Endpoint = Endpoint {
    name: "ContainerAttachWebsocket",
    method: Method::GET,
    path: "/containers/{id}/attach/ws",
    accept: media::JSON_OR_TEXT,
    body_type: media::JSON,
    params: &[
        Param::path("id"),
        Param::query("detachKeys"),
        Param::query("logs"),
        Param::query("stream"),
        Param::query("stdin"),
        Param::query("stdout"),
        Param::query("stderr"),
    ],
};

/// Block until a container reaches the given condition.
pub const WAIT: Endpoint = Endpoint {
    name: "ContainerWait",
    method: Method::POST,
    path: "/containers/{id}/wait",
    accept: media::JSON,
    body_type: media::JSON,
    params: &[
        Param::path("id"),
        Param::query_default("condition", "not-running"),
    ],
};

/// Remove a container.
pub const REMOVE: Endpoint = Endpoint {
    name: "ContainerDelete",
    method: Method::DELETE,
    path: "/containers/{id}",
    accept: media::JSON_OR_TEXT,
    body_type: media::JSON,
    params: &[
        Param::path("id"),
        Param::query("v"),
        Param::query("force"),
        Param::query("link"),
    ],
};

/// Stat a path inside a container; the result is carried in the
/// `X-Docker-Container-Path-Stat` response header.
pub const ARCHIVE_INFO: Endpoint = Endpoint {
    name: "ContainerArchiveInfo",
    method: Method::HEAD,
    path: "/containers/{id}/archive",
    accept: media::JSON_OR_TEXT,
    body_type: media::JSON,
    params: &[Param::path("id"), Param::required_query("path")],
};

/// Get a tar archive of a path inside a container.
pub const ARCHIVE: Endpoint = Endpoint {
    name: "ContainerArchive",
    method: Method::GET,
    path: "/containers/{id}/archive",
    accept: media::TAR,
    body_type: media::JSON,
    params: &[Param::path("id"), Param::required_query("path")],
};

/// Upload a tar archive into a container's filesystem.
pub const PUT_ARCHIVE: Endpoint = Endpoint {
    name: "PutContainerArchive",
    method: Method::PUT,
    path: "/containers/{id}/archive",
    accept: media::JSON_OR_TEXT,
    body_type: media::TAR,
    params: &[
        Param::path("id"),
        Param::required_query("path"),
        Param::query("noOverwriteDirNonDir"),
        Param::query("copyUIDGID"),
        Param::required_body("inputStream"),
    ],
};

/// Delete stopped containers.
pub const PRUNE: Endpoint = Endpoint {
    name: "ContainerPrune",
    method: Method::POST,
    path: "/containers/prune",
    accept: media::JSON,
    body_type: media::JSON,
    params: &[Param::query("filters")],
};
