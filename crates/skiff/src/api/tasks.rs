//! Swarm task operations.

use hyper::Method;

use crate::endpoint::{media, Endpoint, Param};

/// List tasks.
pub const LIST: Endpoint = Endpoint {
    name: "TaskList",
    method: Method::GET,
    path: "/tasks",
    accept: media::JSON,
    body_type: media::JSON,
    params: &[Param::query("filters")],
};

/// Return low-level information about a task.
pub const INSPECT: Endpoint = Endpoint {
    name: "TaskInspect",
    method: Method::GET,
    path: "/tasks/{id}",
    accept: media::JSON,
    body_type: media::JSON,
    params: &[Param::path("id")],
};

/// Get task logs.
pub const LOGS: Endpoint = Endpoint {
    name: "TaskLogs",
    method: Method::GET,
    path: "/tasks/{id}/logs",
    accept: media::JSON_OR_TEXT,
    body_type: media::JSON,
    params: &[
        Param::path("id"),
        Param::query("details"),
        Param::query("follow"),
        Param::query("stdout"),
        Param::query("stderr"),
        Param::query("since"),
        Param::query("timestamps"),
        Param::query_default("tail", "all"),
    ],
};
