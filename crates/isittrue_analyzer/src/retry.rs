//! Bounded-retry wrapper around the generation driver.

use std::time::Duration;

use tokio::time::sleep;
use tracing::{error, info, warn};

use isittrue_core::PromptDocument;
use isittrue_error::{GeminiError, RetryableError};
use isittrue_lang::Locale;

use crate::GenerativeDriver;
use crate::settings::Settings;

/// Retry bounds for the generation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum attempts, including the first
    pub max_attempts: u32,
    /// Backoff before the second attempt, doubled each retry
    pub initial_backoff: Duration,
    /// Whether non-quota failures retry with the same backoff
    pub retry_non_quota: bool,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_backoff: Duration::from_secs(1),
            retry_non_quota: true,
        }
    }
}

impl From<&Settings> for RetryPolicy {
    fn from(settings: &Settings) -> Self {
        Self {
            max_attempts: settings.max_attempts,
            initial_backoff: Duration::from_secs(settings.retry_backoff_secs),
            retry_non_quota: settings.retry_non_quota,
        }
    }
}

/// Send the assembled document to the driver, retrying up to the
/// policy's bound with exponential backoff (1, 2, 4 time units).
///
/// Always returns a string: the model's reply, or after exhaustion a
/// localized quota or failure message. The backoff sleep suspends only
/// the current request's task.
pub async fn generate_with_retry<D: GenerativeDriver + ?Sized>(
    driver: &D,
    doc: &PromptDocument,
    temperature: f32,
    locale: &Locale,
    policy: RetryPolicy,
) -> String {
    let mut backoff = policy.initial_backoff;
    let mut last_error: Option<GeminiError> = None;

    for attempt in 1..=policy.max_attempts {
        match driver.generate(doc, temperature).await {
            Ok(text) => return text,
            Err(e) => {
                error!(attempt, error = %e, "ERREUR CRITIQUE GEMINI");
                let quota = e.is_quota();
                // With retry_non_quota disabled, only quota and
                // transient errors earn a retry; permanent failures
                // give up immediately.
                let give_up = attempt >= policy.max_attempts
                    || (!quota && !policy.retry_non_quota && !e.is_retryable());
                last_error = Some(e);
                if give_up {
                    break;
                }
                info!(
                    attempt,
                    backoff_secs = backoff.as_secs_f64(),
                    quota,
                    "Retrying generation after backoff"
                );
                sleep(backoff).await;
                backoff *= 2;
            }
        }
    }

    match last_error {
        Some(e) if e.is_quota() => {
            warn!(language = locale.code, "Quota exhausted after all attempts");
            locale.quota_message.to_string()
        }
        Some(e) => locale.failure_message(&e.kind.to_string()),
        // max_attempts of zero never ran the driver
        None => locale.failure_message("no generation attempt was made"),
    }
}
