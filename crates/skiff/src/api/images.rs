//! Image operations.

use hyper::Method;

use crate::endpoint::{media, Endpoint, Param};

/// List images.
pub const LIST: Endpoint = Endpoint {
    name: "ImageList",
    method: Method::GET,
    path: "/images/json",
    accept: media::JSON,
    body_type: media::JSON,
    params: &[
        Param::query("all"),
        Param::query("filters"),
        Param::query("digests"),
    ],
};

/// Build an image from a tar build context.
///
/// The response is a JSON progress stream; the build context travels as
/// the raw request body.
pub const BUILD: Endpoint = Endpoint {
    name: "ImageBuild",
    method: Method::POST,
    path: "/build",
    accept: media::JSON,
    body_type: media::BINARY,
    params: &[
        Param::query_default("dockerfile", "Dockerfile"),
        Param::query("t"),
        Param::query("extrahosts"),
        Param::query("remote"),
        Param::query("q"),
        Param::query("nocache"),
        Param::query("cachefrom"),
        Param::query("pull"),
        Param::query_default("rm", "true"),
        Param::query("forcerm"),
        Param::query("memory"),
        Param::query("memswap"),
        Param::query("cpushares"),
        Param::query("cpusetcpus"),
        Param::query("cpuperiod"),
        Param::query("cpuquota"),
        Param::query("buildargs"),
        Param::query("shmsize"),
        Param::query("squash"),
        Param::query("labels"),
        Param::query("networkmode"),
        Param::query("platform"),
        Param::query("target"),
        Param::query("outputs"),
        Param::header("X-Registry-Config"),
        Param::body("inputStream"),
    ],
};

/// Delete builder cache.
pub const BUILD_PRUNE: Endpoint = Endpoint {
    name: "BuildPrune",
    method: Method::POST,
    path: "/build/prune",
    accept: media::JSON,
    body_type: media::JSON,
    params: &[
        Param::query("keep-storage"),
        Param::query("all"),
        Param::query("filters"),
    ],
};

/// Create an image by pulling from a registry or importing a source.
pub const CREATE: Endpoint = Endpoint {
    name: "ImageCreate",
    method: Method::POST,
    path: "/images/create",
    accept: media::JSON,
    body_type: media::TEXT,
    params: &[
        Param::query("fromImage"),
        Param::query("fromSrc"),
        Param::query("repo"),
        Param::query("tag"),
        Param::query("message"),
        Param::query("platform"),
        Param::header("X-Registry-Auth"),
        Param::body("inputImage"),
    ],
};

/// Return low-level information about an image.
pub const INSPECT: Endpoint = Endpoint {
    name: "ImageInspect",
    method: Method::GET,
    path: "/images/{name}/json",
    accept: media::JSON,
    body_type: media::JSON,
    params: &[Param::path("name")],
};

/// Return parent layers of an image.
pub const HISTORY: Endpoint = Endpoint {
    name: "ImageHistory",
    method: Method::GET,
    path: "/images/{name}/history",
    accept: media::JSON,
    body_type: media::JSON,
    params: &[Param::path("name")],
};

/// Push an image to a registry. Requires registry credentials.
pub const PUSH: Endpoint = Endpoint {
    name: "ImagePush",
    method: Method::POST,
    path: "/images/{name}/push",
    accept: media::JSON_OR_TEXT,
    body_type: media::BINARY,
    params: &[
        Param::path("name"),
        Param::query("tag"),
        Param::required_header("X-Registry-Auth"),
    ],
};

/// Tag an image into a repository.
pub const TAG: Endpoint = Endpoint {
    name: "ImageTag",
    method: Method::POST,
    path: "/images/{name}/tag",
    accept: media::JSON_OR_TEXT,
    body_type: media::JSON,
    params: &[Param::path("name"), Param::query("repo"), Param::query("tag")],
};

/// Remove an image and untag it from repositories.
pub const REMOVE: Endpoint = Endpoint {
    name: "ImageDelete",
    method: Method::DELETE,
    path: "/images/{name}",
    accept: media::JSON,
    body_type: media::JSON,
    params: &[
        Param::path("name"),
        Param::query("force"),
        Param::query("noprune"),
    ],
};

/// Search images on the configured registry.
pub const SEARCH: Endpoint = Endpoint {
    name: "ImageSearch",
    method: Method::GET,
    path: "/images/search",
    accept: media::JSON,
    body_type: media::JSON,
    params: &[
        Param::required_query("term"),
        Param::query("limit"),
        Param::query("filters"),
    ],
};

/// Delete unused images.
pub const PRUNE: Endpoint = Endpoint {
    name: "ImagePrune",
    method: Method::POST,
    path: "/images/prune",
    accept: media::JSON,
    body_type: media::JSON,
    params: &[Param::query("filters")],
};

/// Create a new image from a container.
pub const COMMIT: Endpoint = Endpoint {
    name: "ImageCommit",
    method: Method::POST,
    path: "/commit",
    accept: media::JSON,
    body_type: media::JSON,
    params: &[
        Param::query("container"),
        Param::query("repo"),
        Param::query("tag"),
        Param::query("comment"),
        Param::query("author"),
        Param::query_default("pause", "true"),
        Param::query("changes"),
        Param::body("containerConfig"),
    ],
};

/// Export an image as a tarball.
pub const EXPORT: Endpoint = Endpoint {
    name: "ImageGet",
    method: Method::GET,
    path: "/images/{name}/get",
    accept: media::TAR,
    body_type: media::JSON,
    params: &[Param::path("name")],
};

/// Export several images as a combined tarball.
pub const EXPORT_ALL: Endpoint = Endpoint {
    name: "ImageGetAll",
    method: Method::GET,
    path: "/images/get",
    accept: media::TAR,
    body_type: media::JSON,
    params: &[Param::query("names")],
};

/// Import images from an exported tarball.
pub const LOAD: Endpoint = Endpoint {
    name: "ImageLoad",
    method: Method::POST,
    path: "/images/load",
    accept: media::JSON,
    body_type: media::TAR,
    params: &[Param::query("quiet"), Param::body("imagesTarball")],
};
