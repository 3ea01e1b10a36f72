//! Integration tests for the engine client.
//!
//! Each test drives a real HTTP exchange against an in-process mock
//! daemon, verifying what actually goes over the wire: paths, query
//! strings, headers, bodies, and status classification.

use axum::extract::{Path, RawQuery};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use futures::StreamExt;
use serde_json::{json, Value};
use skiff::{api, Engine, EngineAddr, EngineConfig, EngineError, Params, RegistryAuth};

/// Serves the app on an ephemeral TCP port and returns its address.
async fn serve(app: Router) -> EngineAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    EngineAddr::Tcp {
        host: "127.0.0.1".to_string(),
        port,
    }
}

async fn engine_for(app: Router) -> Engine {
    Engine::new(EngineConfig::new(serve(app).await))
}

// ============================================================================
// Status classification
// ============================================================================

#[tokio::test]
async fn ping_returns_plain_body() {
    let app = Router::new().route("/_ping", get(|| async { "OK" }));
    let engine = engine_for(app).await;

    let response = engine
        .invoke(&api::system::PING, &Params::new())
        .await
        .unwrap();
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(&response.body[..], b"OK");
}

#[tokio::test]
async fn success_returns_parsed_payload() {
    let app = Router::new().route("/containers/json", get(|| async { Json(json!([])) }));
    let engine = engine_for(app).await;

    let containers = engine
        .invoke_json(&api::containers::LIST, &Params::new())
        .await
        .unwrap();
    assert_eq!(containers, json!([]));
}

#[tokio::test]
async fn created_status_is_a_success() {
    let app = Router::new().route(
        "/containers/create",
        post(|Json(body): Json<Value>| async move {
            assert_eq!(body["Image"], "alpine");
            (
                StatusCode::CREATED,
                Json(json!({"Id": "deadbeef", "Warnings": []})),
            )
        }),
    );
    let engine = engine_for(app).await;

    let created = engine
        .invoke_json(
            &api::containers::CREATE,
            &Params::new().set("body", json!({"Image": "alpine"})),
        )
        .await
        .unwrap();
    assert_eq!(created["Id"], "deadbeef");
}

#[tokio::test]
async fn not_found_carries_the_response_body() {
    let app = Router::new().route(
        "/containers/{id}/json",
        get(|Path(id): Path<String>| async move {
            (
                StatusCode::NOT_FOUND,
                Json(json!({"message": format!("No such container: {id}")})),
            )
        }),
    );
    let engine = engine_for(app).await;

    let err = engine
        .invoke(&api::containers::INSPECT, &Params::new().set("id", "nope"))
        .await
        .unwrap_err();
    match &err {
        EngineError::Remote { status, .. } => assert_eq!(*status, 404),
        other => panic!("expected remote error, got {other:?}"),
    }
    assert_eq!(
        err.remote_message().as_deref(),
        Some("No such container: nope")
    );
}

// ============================================================================
// Request construction on the wire
// ============================================================================

#[tokio::test]
async fn path_parameter_reaches_the_route() {
    let app = Router::new().route(
        "/containers/{id}/json",
        get(|Path(id): Path<String>| async move { Json(json!({"Id": id})) }),
    );
    let engine = engine_for(app).await;

    let inspected = engine
        .invoke_json(&api::containers::INSPECT, &Params::new().set("id", "abc123"))
        .await
        .unwrap();
    assert_eq!(inspected["Id"], "abc123");
}

#[tokio::test]
async fn declared_default_and_override_reach_the_query() {
    let app = Router::new().route(
        "/containers/{id}/logs",
        get(|RawQuery(query): RawQuery| async move { query.unwrap_or_default() }),
    );
    let engine = engine_for(app).await;

    let response = engine
        .invoke(&api::containers::LOGS, &Params::new().set("id", "abc"))
        .await
        .unwrap();
    assert_eq!(&response.body[..], b"tail=all");

    let response = engine
        .invoke(
            &api::containers::LOGS,
            &Params::new().set("id", "abc").set("tail", "7").set("follow", false),
        )
        .await
        .unwrap();
    assert_eq!(&response.body[..], b"follow=false&tail=7");
}

#[tokio::test]
async fn extra_query_bag_reaches_the_wire() {
    let app = Router::new().route(
        "/containers/json",
        get(|RawQuery(query): RawQuery| async move { query.unwrap_or_default() }),
    );
    let engine = engine_for(app).await;

    let response = engine
        .invoke(
            &api::containers::LIST,
            &Params::new().set("all", true).extra_query("undocumented", "1"),
        )
        .await
        .unwrap();
    assert_eq!(&response.body[..], b"all=true&undocumented=1");
}

#[tokio::test]
async fn registry_auth_header_is_forwarded() {
    let app = Router::new().route(
        "/images/{name}/push",
        post(|headers: HeaderMap| async move {
            headers
                .get("x-registry-auth")
                .map(|v| v.to_str().unwrap().to_string())
                .unwrap_or_default()
        }),
    );
    let engine = engine_for(app).await;

    let auth = RegistryAuth::credentials("user", "secret", "registry.test");
    let header = auth.header_value().unwrap();
    let response = engine
        .invoke(
            &api::images::PUSH,
            &Params::new()
                .set("name", "registry.test/app")
                .set("X-Registry-Auth", header.clone()),
        )
        .await
        .unwrap();
    assert_eq!(response.body, header.as_bytes());
}

#[tokio::test]
async fn default_headers_are_sent_with_every_request() {
    let app = Router::new().route(
        "/info",
        get(|headers: HeaderMap| async move {
            headers
                .get("x-client-trace")
                .map(|v| v.to_str().unwrap().to_string())
                .unwrap_or_default()
        }),
    );
    let addr = serve(app).await;
    let config = EngineConfig::new(addr).with_default_header(
        axum::http::HeaderName::from_static("x-client-trace"),
        axum::http::HeaderValue::from_static("t-42"),
    );
    let engine = Engine::new(config);

    let response = engine.invoke(&api::system::INFO, &Params::new()).await.unwrap();
    assert_eq!(&response.body[..], b"t-42");
}

#[tokio::test]
async fn version_prefix_selects_the_versioned_route() {
    let app = Router::new().route("/v1.41/_ping", get(|| async { "OK" }));
    let addr = serve(app).await;
    let engine = Engine::new(EngineConfig::new(addr).with_api_version("1.41"));

    let response = engine.invoke(&api::system::PING, &Params::new()).await.unwrap();
    assert_eq!(response.status, StatusCode::OK);
}

// ============================================================================
// Local validation happens before any I/O
// ============================================================================

#[tokio::test]
async fn missing_body_fails_without_network() {
    // Nothing listens here; a network attempt would surface as Connect.
    let engine = Engine::new(EngineConfig::new(EngineAddr::Tcp {
        host: "127.0.0.1".to_string(),
        port: 1,
    }));

    let err = engine
        .invoke(&api::containers::CREATE, &Params::new())
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::MissingParameter("body")));
}

#[tokio::test]
async fn missing_version_on_update_fails_without_network() {
    let engine = Engine::new(EngineConfig::new(EngineAddr::Tcp {
        host: "127.0.0.1".to_string(),
        port: 1,
    }));

    let err = engine
        .invoke(
            &api::secrets::UPDATE,
            &Params::new().set("id", "sec1").set("body", json!({})),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::MissingParameter("version")));
}

// ============================================================================
// Streaming
// ============================================================================

#[tokio::test]
async fn streamed_response_yields_chunks() {
    let app = Router::new().route(
        "/events",
        get(|| async {
            axum::body::Body::from_stream(futures::stream::iter([
                Ok::<_, std::io::Error>(bytes::Bytes::from_static(b"{\"Type\":\"container\"}\n")),
                Ok(bytes::Bytes::from_static(b"{\"Type\":\"image\"}\n")),
            ]))
        }),
    );
    let engine = engine_for(app).await;

    let mut stream = engine
        .invoke_stream(&api::system::EVENTS, &Params::new())
        .await
        .unwrap();
    assert_eq!(stream.status, StatusCode::OK);

    let mut collected = Vec::new();
    while let Some(chunk) = stream.next().await {
        collected.extend_from_slice(&chunk.unwrap());
    }
    assert_eq!(
        String::from_utf8(collected).unwrap(),
        "{\"Type\":\"container\"}\n{\"Type\":\"image\"}\n"
    );
}

#[tokio::test]
async fn streamed_error_is_buffered_into_the_error() {
    let app = Router::new().route(
        "/containers/{id}/logs",
        get(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"message": "driver does not support reading"})),
            )
        }),
    );
    let engine = engine_for(app).await;

    let err = engine
        .invoke_stream(&api::containers::LOGS, &Params::new().set("id", "abc"))
        .await
        .unwrap_err();
    match err {
        EngineError::Remote { status, .. } => assert_eq!(status, 500),
        other => panic!("expected remote error, got {other:?}"),
    }
}

#[tokio::test]
async fn upgrade_request_falls_back_to_a_streamed_response() {
    // A daemon may answer an attach-style request with a plain 200
    // instead of hijacking the connection.
    let app = Router::new().route(
        "/exec/{id}/start",
        post(|| async { "command output" }),
    );
    let engine = engine_for(app).await;

    let outcome = engine
        .invoke_upgrade(
            &api::exec::START,
            &Params::new()
                .set("id", "exec1")
                .set("execStartConfig", json!({"Detach": false})),
        )
        .await
        .unwrap();

    match outcome {
        skiff::Hijack::Response(mut stream) => {
            let mut collected = Vec::new();
            while let Some(chunk) = stream.next().await {
                collected.extend_from_slice(&chunk.unwrap());
            }
            assert_eq!(&collected[..], b"command output");
        }
        skiff::Hijack::Upgraded { .. } => panic!("mock daemon cannot upgrade"),
    }
}

// ============================================================================
// Unix socket transport
// ============================================================================

#[cfg(unix)]
#[tokio::test]
async fn unix_socket_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let socket = dir.path().join("engine.sock");

    let app = Router::new().route("/version", get(|| async { Json(json!({"ApiVersion": "1.41"})) }));
    let listener = tokio::net::UnixListener::bind(&socket).unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let engine = Engine::new(EngineConfig::new(EngineAddr::Unix(socket)));
    let version = engine
        .invoke_json(&api::system::VERSION, &Params::new())
        .await
        .unwrap();
    assert_eq!(version["ApiVersion"], "1.41");
}
