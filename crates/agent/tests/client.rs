//! End-to-end tests for `AgentClient` against a local stub agent.
//!
//! Each test binds an axum server on an ephemeral port and points the
//! client at it, so the full reqwest path (headers, timeout, status and
//! transport classification) is exercised.

use std::time::Duration;

use assert_matches::assert_matches;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use flowpilot_agent::{AgentClient, AgentConfig, AgentError};
use flowpilot_core::types::Scope;
use serde_json::{json, Value};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const AGENT_ID: &str = "agent-test";
const CHAT_PATH: &str = "/api/agents/agent-test/chat";

/// Serve `app` on 127.0.0.1 and return its base URL.
async fn spawn_stub(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn client_for(base_url: String, timeout: Duration) -> AgentClient {
    AgentClient::new(AgentConfig {
        base_url,
        api_key: "secret-key".to_string(),
        agent_id: AGENT_ID.to_string(),
        timeout,
    })
    .unwrap()
}

// ---------------------------------------------------------------------------
// Success
// ---------------------------------------------------------------------------

#[tokio::test]
async fn success_returns_remote_body_verbatim() {
    let app = Router::new().route(
        CHAT_PATH,
        post(|headers: HeaderMap, Json(body): Json<Value>| async move {
            let auth = headers
                .get("authorization")
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_string();
            Json(json!({
                "reply": "hello",
                "echo": body,
                "auth": auth,
            }))
        }),
    );
    let client = client_for(spawn_stub(app).await, Duration::from_secs(5));

    let mut context = Scope::new();
    context.insert("project_id".into(), json!(12));

    let response = client.chat("hi there", Some(&context)).await.unwrap();

    assert_eq!(response["reply"], "hello");
    assert_eq!(response["auth"], "Bearer secret-key");
    assert_eq!(response["echo"]["agent_id"], AGENT_ID);
    assert_eq!(response["echo"]["message"], "hi there");
    assert_eq!(response["echo"]["context"]["project_id"], 12);
}

#[tokio::test]
async fn context_is_omitted_when_absent() {
    let app = Router::new().route(
        CHAT_PATH,
        post(|Json(body): Json<Value>| async move { Json(body) }),
    );
    let client = client_for(spawn_stub(app).await, Duration::from_secs(5));

    let response = client.chat("no context", None).await.unwrap();
    assert!(response.get("context").is_none());
}

// ---------------------------------------------------------------------------
// Failures
// ---------------------------------------------------------------------------

#[tokio::test]
async fn remote_500_is_remote_error_with_status() {
    let app = Router::new().route(
        CHAT_PATH,
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "agent exploded") }),
    );
    let client = client_for(spawn_stub(app).await, Duration::from_secs(5));

    let err = client.chat("hi", None).await.unwrap_err();

    assert_matches!(&err, AgentError::Remote { status: 500, details } if details == "agent exploded");
    assert_eq!(err.status_code(), 500);
}

#[tokio::test]
async fn remote_404_status_is_propagated() {
    // No route registered: the stub answers 404.
    let client = client_for(spawn_stub(Router::new()).await, Duration::from_secs(5));

    let err = client.chat("hi", None).await.unwrap_err();
    assert_eq!(err.kind(), "RemoteError");
    assert_eq!(err.status_code(), 404);
}

#[tokio::test]
async fn slow_remote_is_timeout() {
    let app = Router::new().route(
        CHAT_PATH,
        post(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!({"late": true}))
        }),
    );
    let client = client_for(spawn_stub(app).await, Duration::from_millis(200));

    let err = client.chat("hi", None).await.unwrap_err();

    assert_matches!(&err, AgentError::Timeout { .. });
    assert_eq!(err.status_code(), 504);
}

#[tokio::test]
async fn refused_connection_is_unreachable() {
    // Reserve a port, then close it so nothing is listening.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client_for(format!("http://{addr}"), Duration::from_secs(5));

    let err = client.chat("hi", None).await.unwrap_err();

    assert_matches!(&err, AgentError::Unreachable { .. });
    assert_eq!(err.status_code(), 503);
}

#[tokio::test]
async fn non_json_success_body_is_unknown() {
    let app = Router::new().route(CHAT_PATH, post(|| async { "plain text" }));
    let client = client_for(spawn_stub(app).await, Duration::from_secs(5));

    let err = client.chat("hi", None).await.unwrap_err();

    assert_matches!(&err, AgentError::Unknown { .. });
    assert_eq!(err.status_code(), 500);
}
