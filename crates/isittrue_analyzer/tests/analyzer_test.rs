//! End-to-end pipeline tests with a capturing driver double.
//!
//! These only exercise branches that never touch the network: empty
//! requests and media requests, which skip extraction and search.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use isittrue_analyzer::{Analyzer, GenerativeDriver, Settings};
use isittrue_core::{AnalysisRequest, PromptDocument, PromptPart};
use isittrue_error::GeminiError;
use isittrue_lang::locale_for;

/// Records every document it is asked to generate from.
#[derive(Debug, Clone, Default)]
struct CapturingDriver {
    seen: Arc<Mutex<Vec<PromptDocument>>>,
}

#[async_trait]
impl GenerativeDriver for CapturingDriver {
    async fn generate(
        &self,
        doc: &PromptDocument,
        _temperature: f32,
    ) -> Result<String, GeminiError> {
        self.seen.lock().unwrap().push(doc.clone());
        Ok("🏳️ VERDICT : Non Prouvé".to_string())
    }
}

fn pipeline() -> (Analyzer<CapturingDriver>, CapturingDriver) {
    let driver = CapturingDriver::default();
    let settings = Settings::load().unwrap();
    let analyzer = Analyzer::from_settings(&settings, driver.clone()).unwrap();
    (analyzer, driver)
}

#[tokio::test]
async fn empty_request_returns_the_input_error_without_generating() {
    let (analyzer, driver) = pipeline();
    let reply = analyzer.process(&AnalysisRequest::default()).await;
    assert_eq!(reply, locale_for("fr").input_error);
    assert!(driver.seen.lock().unwrap().is_empty());
}

#[tokio::test]
async fn image_with_url_caption_never_gains_web_context() {
    let (analyzer, driver) = pipeline();
    let request = AnalysisRequest::new(
        Some("fake news? https://example.com/article".to_string()),
        Some(vec![0xFF, 0xD8, 0xFF]),
        None,
    );
    let reply = analyzer.process(&request).await;
    assert_eq!(reply, "🏳️ VERDICT : Non Prouvé");

    let seen = driver.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    let parts = seen[0].parts();
    assert!(seen[0].has_media());
    assert!(!parts.iter().any(|p| matches!(p, PromptPart::WebContext(_))));
    assert!(
        parts
            .iter()
            .any(|p| matches!(p, PromptPart::Caption(t) if t.contains("https://example.com/article")))
    );
}

#[tokio::test]
async fn audio_request_skips_extraction_and_search() {
    let (analyzer, driver) = pipeline();
    let request = AnalysisRequest::new(
        Some("check https://example.com/claim".to_string()),
        None,
        Some(b"OggS\x00voice".to_vec()),
    );
    analyzer.process(&request).await;

    let seen = driver.seen.lock().unwrap();
    let parts = seen[0].parts();
    assert!(parts.iter().any(|p| matches!(p, PromptPart::Audio(_))));
    assert!(!parts.iter().any(|p| matches!(p, PromptPart::WebContext(_))));
}
