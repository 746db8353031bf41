//! Route tests against a stubbed generation driver.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use tower::util::ServiceExt;

use isittrue_analyzer::{Analyzer, GenerativeDriver, Settings};
use isittrue_core::PromptDocument;
use isittrue_error::GeminiError;
use isittrue_lang::locale_for;
use isittrue_server::{AnalyzeResponse, ErrorResponse, router};

/// Driver double replying with a fixed marker and counting calls.
#[derive(Debug, Clone, Default)]
struct StubDriver {
    calls: Arc<AtomicU32>,
}

#[async_trait]
impl GenerativeDriver for StubDriver {
    async fn generate(
        &self,
        doc: &PromptDocument,
        _temperature: f32,
    ) -> Result<String, GeminiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let shape = if doc.has_media() { "media" } else { "text" };
        Ok(format!("stub reply ({shape})"))
    }
}

fn app() -> (Router, StubDriver) {
    let driver = StubDriver::default();
    let settings = Settings::load().unwrap();
    let analyzer = Analyzer::from_settings(&settings, driver.clone()).unwrap();
    (router(Arc::new(analyzer)), driver)
}

fn post_analyze(json: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/analyze")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json.to_string()))
        .unwrap()
}

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_reports_ok() {
    let (app, _) = app();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = body_json(response).await;
    assert_eq!(body, serde_json::json!({"status": "ok"}));
}

#[tokio::test]
async fn request_without_any_input_is_rejected() {
    let (app, driver) = app();
    let response = app.oneshot(post_analyze("{}")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: ErrorResponse = body_json(response).await;
    assert_eq!(body.error, "Veuillez fournir du texte, une image ou un audio");
    assert_eq!(driver.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn whitespace_only_text_counts_as_absent() {
    let (app, _) = app();
    let response = app
        .oneshot(post_analyze(r#"{"text": "   \n  "}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn data_url_image_reaches_the_driver_as_media() {
    let (app, driver) = app();
    let payload = STANDARD.encode([0x89, b'P', b'N', b'G']);
    let json = format!(r#"{{"image": "data:image/png;base64,{payload}"}}"#);
    let response = app.oneshot(post_analyze(&json)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: AnalyzeResponse = body_json(response).await;
    assert_eq!(body.result, "stub reply (media)");
    assert_eq!(driver.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn bare_base64_audio_is_accepted() {
    let (app, _) = app();
    let payload = STANDARD.encode(b"OggS\x00voice");
    let json = format!(r#"{{"audio": "{payload}"}}"#);
    let response = app.oneshot(post_analyze(&json)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: AnalyzeResponse = body_json(response).await;
    assert_eq!(body.result, "stub reply (media)");
}

#[tokio::test]
async fn malformed_media_degrades_to_the_input_error() {
    // The field is present so the request passes validation, but the
    // payload cannot decode and nothing usable remains.
    let (app, driver) = app();
    let response = app
        .oneshot(post_analyze(r#"{"image": "data:image/png;base64,@@not-base64@@"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: AnalyzeResponse = body_json(response).await;
    assert_eq!(body.result, locale_for("fr").input_error);
    assert_eq!(driver.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn unreachable_url_still_produces_a_reply() {
    // Extraction fails fast against a closed loopback port; the reply
    // comes from the driver with the raw text as subject.
    let (app, driver) = app();
    let response = app
        .oneshot(post_analyze(
            r#"{"text": "Check this out http://127.0.0.1:9/article"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: AnalyzeResponse = body_json(response).await;
    assert_eq!(body.result, "stub reply (text)");
    assert_eq!(driver.calls.load(Ordering::SeqCst), 1);
}
