//! Gemini-specific error types and retry classification.

/// Gemini-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GeminiErrorKind {
    /// API key not found in environment
    #[display("GEMINI_API_KEY environment variable not set")]
    MissingApiKey,
    /// Failed to create the HTTP client
    #[display("Failed to create Gemini client: {}", _0)]
    ClientCreation(String),
    /// API request failed without a usable status code
    #[display("Gemini API request failed: {}", _0)]
    ApiRequest(String),
    /// HTTP error with status code and message
    #[display("HTTP {} error: {}", status_code, message)]
    HttpError {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },
    /// Media upload through the Files API failed
    #[display("Media upload failed: {}", _0)]
    UploadFailed(String),
    /// The model returned no candidate text
    #[display("Gemini returned an empty response")]
    EmptyResponse,
}

impl GeminiErrorKind {
    /// Check if this error signals an exhausted quota or rate limit.
    ///
    /// Quota is detected via HTTP 429 or a "quota" marker in the
    /// provider's error text.
    pub fn is_quota(&self) -> bool {
        match self {
            GeminiErrorKind::HttpError {
                status_code,
                message,
            } => *status_code == 429 || message.to_lowercase().contains("quota"),
            GeminiErrorKind::ApiRequest(message) => {
                message.contains("429") || message.to_lowercase().contains("quota")
            }
            _ => false,
        }
    }

    /// Check if this error type should be retried.
    pub fn is_retryable(&self) -> bool {
        match self {
            GeminiErrorKind::HttpError { status_code, .. } => {
                matches!(*status_code, 408 | 429 | 500 | 502 | 503 | 504)
            }
            GeminiErrorKind::ApiRequest(_) => true,
            GeminiErrorKind::UploadFailed(_) => true,
            _ => false,
        }
    }
}

/// Gemini error with source location tracking.
///
/// # Examples
///
/// ```
/// use isittrue_error::{GeminiError, GeminiErrorKind};
///
/// let err = GeminiError::new(GeminiErrorKind::MissingApiKey);
/// assert!(format!("{}", err).contains("GEMINI_API_KEY"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Gemini Error: {} at line {} in {}", kind, line, file)]
pub struct GeminiError {
    /// The kind of error that occurred
    pub kind: GeminiErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GeminiError {
    /// Create a new GeminiError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GeminiErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Check if this error signals an exhausted quota or rate limit.
    pub fn is_quota(&self) -> bool {
        self.kind.is_quota()
    }
}

/// Trait for errors that support retry logic.
///
/// # Examples
///
/// ```
/// use isittrue_error::{GeminiError, GeminiErrorKind, RetryableError};
///
/// let err = GeminiError::new(GeminiErrorKind::HttpError {
///     status_code: 429,
///     message: "Resource exhausted".to_string(),
/// });
///
/// assert!(err.is_retryable());
/// ```
pub trait RetryableError {
    /// Returns true if this error should trigger a retry.
    ///
    /// Transient errors like 503 (service unavailable) or 429 (rate
    /// limit) should return true. Permanent errors like 401
    /// (unauthorized) or 400 (bad request) should return false.
    fn is_retryable(&self) -> bool;
}

impl RetryableError for GeminiError {
    fn is_retryable(&self) -> bool {
        self.kind.is_retryable()
    }
}
