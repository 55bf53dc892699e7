//! HTTP-level tests for the analysis routes, with the model stubbed out.

use api_lib::web::{cors_layer, router, AppState};
use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use emotion_core::{CompletionService, EmotionAnalyzer, PortError, PortResult};
use serde_json::{json, Value};
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};
use tower::ServiceExt;

const HAPPY_REPLY: &str = r#"{"기쁨": 0.89, "슬픔": 0.02, "화남": 0.01, "불안": 0.02, "중립": 0.03, "사랑": 0.02, "피곤": 0.01}"#;

enum Reply {
    Text(&'static str),
    NetworkError,
}

struct StubCompletion {
    reply: Reply,
    calls: AtomicUsize,
}

#[async_trait]
impl CompletionService for StubCompletion {
    async fn complete(&self, _prompt: &str, _temperature: f32) -> PortResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.reply {
            Reply::Text(text) => Ok(text.to_string()),
            Reply::NetworkError => Err(PortError::Unexpected(
                "error sending request for url: connection refused".to_string(),
            )),
        }
    }
}

fn app(reply: Reply) -> (Router, Arc<StubCompletion>) {
    let stub = Arc::new(StubCompletion {
        reply,
        calls: AtomicUsize::new(0),
    });
    let state = Arc::new(AppState {
        analyzer: EmotionAnalyzer::new(stub.clone()),
    });
    (router(state), stub)
}

fn post_json(body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/v1/analysis/message")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn analyzes_a_happy_message() {
    let (app, stub) = app(Reply::Text(HAPPY_REPLY));
    let body = json!({
        "couple_id": "test-couple-123",
        "sender_id": "user-456",
        "content": "오늘 정말 행복해!"
    });

    let (status, value) = send(app, post_json(&body.to_string())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["emotion"]["emotion"], "기쁨");
    assert_eq!(value["emotion"]["confidence"], 0.89);
    assert_eq!(value["emotion"]["all_scores"]["피곤"], 0.01);
    assert_eq!(value["emotion"]["all_scores"].as_object().unwrap().len(), 7);
    assert_eq!(value["topics"], json!([]));
    let processed_at = value["processed_at"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(processed_at).is_ok());
    assert!(processed_at.ends_with('Z'));
    assert_eq!(stub.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn blank_content_is_a_bad_request() {
    for body in [
        r#"{"couple_id": "c", "sender_id": "s", "content": "   "}"#,
        r#"{"couple_id": "c", "sender_id": "s", "content": ""}"#,
        r#"{"couple_id": "c", "sender_id": "s"}"#,
        r#"{"content": null}"#,
    ] {
        let (app, stub) = app(Reply::Text(HAPPY_REPLY));
        let (status, value) = send(app, post_json(body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", body);
        assert_eq!(value, json!({ "error": "content is required" }));
        assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
    }
}

#[tokio::test]
async fn malformed_body_is_a_bad_request() {
    let (app, _) = app(Reply::Text(HAPPY_REPLY));
    let (status, value) = send(app, post_json("not json at all")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(value["error"]
        .as_str()
        .unwrap()
        .starts_with("invalid request body"));
}

#[tokio::test]
async fn model_failure_is_a_server_error_with_details() {
    let (app, _) = app(Reply::NetworkError);
    let (status, value) = send(app, post_json(r#"{"content": "안녕"}"#)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(value["error"], "Analysis failed");
    assert!(value["details"]
        .as_str()
        .unwrap()
        .contains("connection refused"));
}

#[tokio::test]
async fn unusable_model_reply_is_a_server_error() {
    let (app, _) = app(Reply::Text("```json\n{\"기쁨\": 0.9}\n```"));
    let (status, value) = send(app, post_json(r#"{"content": "안녕"}"#)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(value["error"], "Analysis failed");
    assert!(value["details"].as_str().unwrap().contains("missing score"));
}

#[tokio::test]
async fn health_reports_ok() {
    let (app, _) = app(Reply::Text(HAPPY_REPLY));
    let request = Request::builder()
        .uri("/api/v1/analysis/health")
        .body(Body::empty())
        .unwrap();

    let (status, value) = send(app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value, json!({ "status": "ok", "service": "analysis" }));
}

#[tokio::test]
async fn preflight_is_answered_for_any_origin_by_default() {
    let (app, stub) = app(Reply::Text(HAPPY_REPLY));
    let app = app.layer(cors_layer(&[]).unwrap());
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/v1/analysis/message")
        .header(header::ORIGIN, "http://localhost:8080")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert!(response.status().is_success());
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
    assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
}

#[test]
fn invalid_origin_is_a_config_error() {
    assert!(cors_layer(&["bad\norigin".to_string()]).is_err());
}
