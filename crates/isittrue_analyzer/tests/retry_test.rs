//! Tests for bounded retry around the generation driver.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::Instant;

use isittrue_analyzer::{GenerativeDriver, RetryPolicy, generate_with_retry};
use isittrue_core::{PromptDocument, PromptPart};
use isittrue_error::{GeminiError, GeminiErrorKind};
use isittrue_lang::{locale_for, message_locale_for};

/// Driver returning a fixed sequence of outcomes, one per attempt.
struct ScriptedDriver {
    calls: Arc<AtomicU32>,
    script: Vec<Result<String, GeminiErrorKind>>,
}

impl ScriptedDriver {
    fn new(script: Vec<Result<String, GeminiErrorKind>>) -> Self {
        Self {
            calls: Arc::new(AtomicU32::new(0)),
            script,
        }
    }

    fn always(kind: GeminiErrorKind) -> Self {
        Self::new(vec![Err(kind.clone()), Err(kind.clone()), Err(kind)])
    }

    fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GenerativeDriver for ScriptedDriver {
    async fn generate(
        &self,
        _doc: &PromptDocument,
        _temperature: f32,
    ) -> Result<String, GeminiError> {
        let attempt = self.calls.fetch_add(1, Ordering::SeqCst) as usize;
        match self.script.get(attempt) {
            Some(Ok(text)) => Ok(text.clone()),
            Some(Err(kind)) => Err(GeminiError::new(kind.clone())),
            None => panic!("driver called more times than scripted"),
        }
    }
}

fn quota_error() -> GeminiErrorKind {
    GeminiErrorKind::HttpError {
        status_code: 429,
        message: "Resource has been exhausted (e.g. check quota).".to_string(),
    }
}

fn doc() -> PromptDocument {
    let mut doc = PromptDocument::new();
    doc.push(PromptPart::Instruction("Be truthful.".to_string()));
    doc
}

#[tokio::test]
async fn first_success_returns_the_reply_untouched() {
    let driver = ScriptedDriver::new(vec![Ok("🏳️ VERDICT : Faux".to_string())]);
    let reply = generate_with_retry(
        &driver,
        &doc(),
        0.4,
        locale_for("fr"),
        RetryPolicy::default(),
    )
    .await;
    assert_eq!(reply, "🏳️ VERDICT : Faux");
    assert_eq!(driver.calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn persistent_quota_makes_three_attempts_with_doubling_backoff() {
    let driver = ScriptedDriver::always(quota_error());
    let started = Instant::now();
    let reply = generate_with_retry(
        &driver,
        &doc(),
        0.4,
        locale_for("fr"),
        RetryPolicy::default(),
    )
    .await;
    assert_eq!(driver.calls(), 3);
    // 1s before the second attempt, 2s before the third.
    assert_eq!(started.elapsed(), Duration::from_secs(3));
    assert_eq!(
        reply,
        "Quota API atteint. Veuillez réessayer dans quelques minutes."
    );
}

#[tokio::test(start_paused = true)]
async fn quota_message_is_localized() {
    let driver = ScriptedDriver::always(quota_error());
    let reply = generate_with_retry(
        &driver,
        &doc(),
        0.4,
        locale_for("en"),
        RetryPolicy::default(),
    )
    .await;
    assert_eq!(reply, "API quota reached. Please try again in a few minutes.");
}

#[tokio::test(start_paused = true)]
async fn unsupported_language_gets_the_english_quota_message() {
    let driver = ScriptedDriver::always(quota_error());
    let reply = generate_with_retry(
        &driver,
        &doc(),
        0.4,
        message_locale_for("nl"),
        RetryPolicy::default(),
    )
    .await;
    assert_eq!(driver.calls(), 3);
    assert_eq!(reply, "API quota reached. Please try again in a few minutes.");
}

#[tokio::test]
async fn zero_attempts_never_calls_the_driver() {
    let driver = ScriptedDriver::new(vec![]);
    let policy = RetryPolicy {
        max_attempts: 0,
        ..RetryPolicy::default()
    };
    let reply = generate_with_retry(&driver, &doc(), 0.4, locale_for("en"), policy).await;
    assert_eq!(driver.calls(), 0);
    assert_eq!(reply, "⚠️ TECHNICAL ERROR: no generation attempt was made");
}

#[tokio::test(start_paused = true)]
async fn transient_failure_then_success_recovers() {
    let driver = ScriptedDriver::new(vec![
        Err(GeminiErrorKind::HttpError {
            status_code: 503,
            message: "overloaded".to_string(),
        }),
        Ok("recovered".to_string()),
    ]);
    let reply = generate_with_retry(
        &driver,
        &doc(),
        0.4,
        locale_for("fr"),
        RetryPolicy::default(),
    )
    .await;
    assert_eq!(reply, "recovered");
    assert_eq!(driver.calls(), 2);
}

#[tokio::test(start_paused = true)]
async fn non_quota_exhaustion_embeds_a_truncated_excerpt() {
    let long_message = "x".repeat(200);
    let driver = ScriptedDriver::always(GeminiErrorKind::ApiRequest(long_message));
    let reply = generate_with_retry(
        &driver,
        &doc(),
        0.4,
        locale_for("en"),
        RetryPolicy::default(),
    )
    .await;
    assert_eq!(driver.calls(), 3);
    assert!(reply.starts_with("⚠️ TECHNICAL ERROR: "));
    let excerpt = reply.trim_start_matches("⚠️ TECHNICAL ERROR: ");
    assert!(excerpt.chars().count() <= 60);
}

#[tokio::test(start_paused = true)]
async fn permanent_error_fails_fast_when_non_quota_retry_is_off() {
    let driver = ScriptedDriver::new(vec![Err(GeminiErrorKind::HttpError {
        status_code: 400,
        message: "invalid argument".to_string(),
    })]);
    let policy = RetryPolicy {
        retry_non_quota: false,
        ..RetryPolicy::default()
    };
    let reply = generate_with_retry(&driver, &doc(), 0.4, locale_for("fr"), policy).await;
    assert_eq!(driver.calls(), 1);
    assert!(reply.starts_with("⚠️ ERREUR TECHNIQUE : "));
}

#[tokio::test(start_paused = true)]
async fn quota_still_retries_when_non_quota_retry_is_off() {
    let driver = ScriptedDriver::always(quota_error());
    let policy = RetryPolicy {
        retry_non_quota: false,
        ..RetryPolicy::default()
    };
    let reply = generate_with_retry(&driver, &doc(), 0.4, locale_for("fr"), policy).await;
    assert_eq!(driver.calls(), 3);
    assert_eq!(
        reply,
        "Quota API atteint. Veuillez réessayer dans quelques minutes."
    );
}
