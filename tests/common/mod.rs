//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::StatusCode;
use axum::Router;
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// Start a mock model endpoint that answers every request with a fixed
/// status and body.
#[allow(dead_code)]
pub async fn start_mock_model(status: StatusCode, body: &'static str) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let app = Router::new().fallback(move || async move { (status, body) });
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}

/// Start a mock model endpoint that records every JSON request body it
/// receives before answering with a fixed status and body.
#[allow(dead_code)]
pub async fn start_recording_model(
    status: StatusCode,
    body: &'static str,
) -> (SocketAddr, Arc<Mutex<Vec<Value>>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let captured: Arc<Mutex<Vec<Value>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = captured.clone();

    let app = Router::new().fallback(move |request_body: String| {
        let sink = sink.clone();
        async move {
            if let Ok(value) = serde_json::from_str::<Value>(&request_body) {
                sink.lock().await.push(value);
            }
            (status, body)
        }
    });
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (addr, captured)
}
