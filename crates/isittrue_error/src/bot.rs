//! Telegram transport error types.

/// Bot-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum BotErrorKind {
    /// Bot token missing from environment and configuration
    #[display("TELEGRAM_BOT_TOKEN environment variable not set")]
    MissingToken,
    /// Telegram API call failed
    #[display("Telegram request failed: {}", _0)]
    Request(String),
    /// Attachment download failed
    #[display("Failed to download attachment: {}", _0)]
    Download(String),
}

/// Bot error with source location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Bot Error: {} at line {} in {}", kind, line, file)]
pub struct BotError {
    /// The kind of error that occurred
    pub kind: BotErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl BotError {
    /// Create a new BotError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: BotErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
