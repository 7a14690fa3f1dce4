//! End-to-end tests for the gateway HTTP surface.

use std::net::SocketAddr;

use axum::http::StatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;

use inference_gateway::{GatewayConfig, HttpServer};

mod common;

/// Start the gateway on an ephemeral port and return its address.
async fn start_gateway() -> SocketAddr {
    let mut config = GatewayConfig::default();
    config.observability.metrics_enabled = false;

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::new(config).unwrap();
    tokio::spawn(async move {
        server.run(listener).await.unwrap();
    });

    addr
}

async fn post_predict(gateway: SocketAddr, body: Value) -> (StatusCode, Value) {
    let response = reqwest::Client::new()
        .post(format!("http://{gateway}/predict"))
        .json(&body)
        .send()
        .await
        .unwrap();
    let status = StatusCode::from_u16(response.status().as_u16()).unwrap();
    let body: Value = response.json().await.unwrap();
    (status, body)
}

#[tokio::test]
async fn test_status_endpoint() {
    let gateway = start_gateway().await;

    let body: Value = reqwest::get(format!("http://{gateway}/status"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body, json!({"Hello": "World"}));
}

#[tokio::test]
async fn test_unknown_pipeline_rejected_without_network_call() {
    let gateway = start_gateway().await;
    let (model, captured) = common::start_recording_model(StatusCode::OK, "{}").await;

    let (status, body) = post_predict(
        gateway,
        json!({
            "hf_pipeline": "foo",
            "model_deployed_url": format!("http://{model}/v2/predict"),
            "inputs": "hello",
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Unsupported pipeline type"}));
    assert!(captured.lock().await.is_empty());
}

#[tokio::test]
async fn test_text_generation_end_to_end() {
    let gateway = start_gateway().await;
    let (model, captured) = common::start_recording_model(
        StatusCode::OK,
        r#"{"outputs":{"generated_text":{"dtype":"string","data":["hello world"]}}}"#,
    )
    .await;

    let (status, body) = post_predict(
        gateway,
        json!({
            "hf_pipeline": "text-generation",
            "model_deployed_url": format!("http://{model}/v2/predict"),
            "inputs": "Once upon a time",
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    // Bare string, not wrapped in an object.
    assert_eq!(body, json!("hello world"));

    let sent = captured.lock().await;
    assert_eq!(
        *sent,
        vec![json!({"inputs": {"text": {"dtype": "string", "data": ["Once upon a time"]}}})]
    );
}

#[tokio::test]
async fn test_downstream_error_yields_pinned_message() {
    let gateway = start_gateway().await;
    let model = common::start_mock_model(StatusCode::INTERNAL_SERVER_ERROR, "boom").await;

    let (status, body) = post_predict(
        gateway,
        json!({
            "hf_pipeline": "text-generation",
            "model_deployed_url": format!("http://{model}/v2/predict"),
            "inputs": "hello",
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(
        body,
        json!({"error": "Received error response from model deployment endpoint"})
    );
}

#[tokio::test]
async fn test_zero_shot_labels_echoed_from_request() {
    let gateway = start_gateway().await;
    let (model, captured) = common::start_recording_model(
        StatusCode::OK,
        r#"{"outputs":{"scores":{"dtype":"string","data":[0.9,0.1]}}}"#,
    )
    .await;

    let (status, body) = post_predict(
        gateway,
        json!({
            "hf_pipeline": "zero-shot-classification",
            "model_deployed_url": format!("http://{model}/v2/predict"),
            "inputs": "the match went to extra time",
            "parameters": {"candidate_labels": ["sports", "politics"]},
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"sequence_classification": {
            "scores": [0.9, 0.1],
            "labels": ["sports", "politics"],
        }})
    );

    let sent = captured.lock().await;
    assert_eq!(
        sent[0]["inputs"]["candidate_labels"],
        json!({"dtype": "string", "data": ["sports", "politics"]})
    );
}

#[tokio::test]
async fn test_token_classification_truncates_mismatched_outputs() {
    let gateway = start_gateway().await;
    let model = common::start_mock_model(
        StatusCode::OK,
        r#"{"outputs":{
            "entities":{"dtype":"string","data":["A","B","C"]},
            "tags":{"dtype":"string","data":["X","Y"]}
        }}"#,
    )
    .await;

    let (status, body) = post_predict(
        gateway,
        json!({
            "hf_pipeline": "token-classification",
            "model_deployed_url": format!("http://{model}/v2/predict"),
            "inputs": "A B C",
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"entity_classification": [
            {"entity": "A", "label": "X"},
            {"entity": "B", "label": "Y"},
        ]})
    );
}

#[tokio::test]
async fn test_object_detection_with_data_uri_input() {
    let gateway = start_gateway().await;
    let (model, captured) = common::start_recording_model(
        StatusCode::OK,
        r#"{"outputs":{
            "detection_classes":{"dtype":"string","data":["cat"]},
            "detection_scores":{"dtype":"string","data":[0.98]},
            "detection_boxes":{"dtype":"string","data":[[1,2,3,4]]}
        }}"#,
    )
    .await;

    let (status, body) = post_predict(
        gateway,
        json!({
            "hf_pipeline": "object-detection",
            "model_deployed_url": format!("http://{model}/v2/predict"),
            "inputs": "data:image/png;base64,QUJD",
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"detections": [{
            "label": "cat",
            "confidence": 0.98,
            "bounding_box": {"xmin": 1, "ymin": 2, "xmax": 3, "ymax": 4},
        }]})
    );

    // The encoded text after the comma is sent as its UTF-8 bytes, not
    // base64-decoded: "QUJD" → [81, 85, 74, 68].
    let sent = captured.lock().await;
    assert_eq!(
        sent[0]["inputs"]["image"],
        json!({"dtype": "BYTES", "shape": [4], "data": [81, 85, 74, 68]})
    );
}

#[tokio::test]
async fn test_object_detection_fetches_image_by_url() {
    let gateway = start_gateway().await;
    let image_host = common::start_mock_model(StatusCode::OK, "ABC").await;
    let (model, captured) = common::start_recording_model(
        StatusCode::OK,
        r#"{"outputs":{
            "detection_classes":{"dtype":"string","data":[]},
            "detection_scores":{"dtype":"string","data":[]},
            "detection_boxes":{"dtype":"string","data":[]}
        }}"#,
    )
    .await;

    let (status, body) = post_predict(
        gateway,
        json!({
            "hf_pipeline": "object-detection",
            "model_deployed_url": format!("http://{model}/v2/predict"),
            "inputs": format!("http://{image_host}/cat.png"),
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"detections": []}));

    let sent = captured.lock().await;
    assert_eq!(
        sent[0]["inputs"]["image"],
        json!({"dtype": "BYTES", "shape": [3], "data": [65, 66, 67]})
    );
}

#[tokio::test]
async fn test_object_detection_image_fetch_failure() {
    let gateway = start_gateway().await;
    let image_host = common::start_mock_model(StatusCode::NOT_FOUND, "no such image").await;
    let (model, captured) = common::start_recording_model(StatusCode::OK, "{}").await;

    let image_url = format!("http://{image_host}/cat.png");
    let (status, body) = post_predict(
        gateway,
        json!({
            "hf_pipeline": "object-detection",
            "model_deployed_url": format!("http://{model}/v2/predict"),
            "inputs": image_url.clone(),
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(
        body,
        json!({"error": format!("Failed to download image from URL {image_url}: no such image")})
    );
    assert!(captured.lock().await.is_empty());
}

#[tokio::test]
async fn test_object_detection_invalid_descriptor() {
    let gateway = start_gateway().await;
    let (model, captured) = common::start_recording_model(StatusCode::OK, "{}").await;

    let (status, body) = post_predict(
        gateway,
        json!({
            "hf_pipeline": "object-detection",
            "model_deployed_url": format!("http://{model}/v2/predict"),
            "inputs": "not-a-url",
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Invalid image URL"}));
    assert!(captured.lock().await.is_empty());
}
