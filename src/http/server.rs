//! HTTP server setup and the predict handler.
//!
//! # Responsibilities
//! - Create the Axum router (`/status`, `/predict`)
//! - Wire up middleware (tracing, timeout, request ID)
//! - Orchestrate one predict request: codec lookup → input resolution →
//!   encode → downstream call → decode
//! - Graceful shutdown on ctrl-c
//!
//! Steps within one request are strictly sequential; requests are independent
//! and share only the immutable state in [`AppState`].

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use axum::Router;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::GatewayConfig;
use crate::downstream::DownstreamClient;
use crate::error::GatewayResult;
use crate::http::request::{PredictRequest, RequestIdLayer, X_REQUEST_ID};
use crate::input::InputResolver;
use crate::observability::metrics;
use crate::pipeline::{CodecRegistry, InputKind, PipelineInput};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<CodecRegistry>,
    pub resolver: InputResolver,
    pub downstream: DownstreamClient,
}

/// HTTP server for the gateway.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: GatewayConfig) -> Result<Self, reqwest::Error> {
        let registry = Arc::new(CodecRegistry::builtin());
        tracing::info!(pipelines = ?registry.pipelines(), "Pipeline codecs registered");

        // One shared outbound client; per-call timeouts are set at call sites.
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()?;

        let state = AppState {
            registry,
            resolver: InputResolver::new(
                client.clone(),
                Duration::from_secs(config.timeouts.image_fetch_secs),
            ),
            downstream: DownstreamClient::new(
                client,
                Duration::from_secs(config.timeouts.downstream_secs),
            ),
        };

        let router = Self::build_router(&config, state);
        Ok(Self { router })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &GatewayConfig, state: AppState) -> Router {
        Router::new()
            .route("/status", get(status_handler))
            .route("/predict", post(predict_handler))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(RequestIdLayer)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Liveness probe. No side effects.
async fn status_handler() -> Json<Value> {
    Json(json!({"Hello": "World"}))
}

/// Predict handler: translate, forward, translate back.
async fn predict_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<PredictRequest>,
) -> Response {
    let start_time = Instant::now();
    let request_id = headers
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();
    let pipeline = request.hf_pipeline.clone();

    tracing::debug!(
        request_id = %request_id,
        pipeline = %pipeline,
        endpoint = %request.model_deployed_url,
        "Handling predict request"
    );

    match handle_predict(&state, request).await {
        Ok(output) => {
            metrics::record_predict(&pipeline, 200, start_time);
            Json(output).into_response()
        }
        Err(err) => {
            let status = err.status_code();
            tracing::warn!(
                request_id = %request_id,
                pipeline = %pipeline,
                status = status.as_u16(),
                error = %err,
                "Predict request failed"
            );
            metrics::record_predict(&pipeline, status.as_u16(), start_time);
            err.into_response()
        }
    }
}

/// One predict request end to end. Codec lookup fails before any network
/// call; the success body is the task output directly, unwrapped.
async fn handle_predict(state: &AppState, request: PredictRequest) -> GatewayResult<Value> {
    let codec = state.registry.get(&request.hf_pipeline)?;

    let input = match codec.input_kind() {
        InputKind::Text => PipelineInput::Text(request.inputs),
        InputKind::Binary => PipelineInput::Bytes(state.resolver.resolve(&request.inputs).await?),
    };

    let envelope = codec.encode(&input, &request.parameters)?;
    let response = state
        .downstream
        .predict(&request.model_deployed_url, &envelope)
        .await?;

    codec.decode(&response, &request.parameters)
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => {
            // Without a signal handler the server simply runs until killed.
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    }
}
