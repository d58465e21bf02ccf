//! In-process HTTP server used by the integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::time::Duration;

use axum::http::{header, HeaderMap, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

/// How long `/slow` waits before answering.
pub const SLOW_RESPONSE_DELAY: Duration = Duration::from_secs(5);

/// Routes covering every response shape the fetcher has to handle.
pub fn test_router() -> Router {
    Router::new()
        .route("/users", get(|| async { Json(users()) }))
        .route(
            "/object",
            get(|| async { Json(json!({"id": 1, "name": "Leanne Graham"})) }),
        )
        .route("/missing", get(|| async { StatusCode::NOT_FOUND }))
        .route(
            "/broken",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        )
        .route(
            "/html",
            get(|| async {
                (
                    [(header::CONTENT_TYPE, "text/html")],
                    "<html><body>not json</body></html>",
                )
            }),
        )
        .route(
            "/slow",
            get(|| async {
                tokio::time::sleep(SLOW_RESPONSE_DELAY).await;
                Json(users())
            }),
        )
        .route("/headers", get(echo_headers))
}

async fn echo_headers(headers: HeaderMap) -> Json<Value> {
    let get = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    Json(json!([{
        "id": get(header::USER_AGENT),
        "name": get(header::CONTENT_TYPE),
    }]))
}

fn users() -> Value {
    json!([
        {"id": 1, "name": "Leanne Graham"},
        {"id": 2, "name": "Ervin Howell"},
        {"id": 0, "name": "Nobody"}
    ])
}

/// Serve [`test_router`] on an ephemeral localhost port.
pub async fn spawn_server() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test server");
    let addr = listener.local_addr().expect("Failed to read local addr");
    tokio::spawn(async move {
        axum::serve(listener, test_router())
            .await
            .expect("Test server failed");
    });
    addr
}

pub fn url(addr: SocketAddr, path: &str) -> String {
    format!("http://{}{}", addr, path)
}
