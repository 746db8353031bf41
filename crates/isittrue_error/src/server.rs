//! HTTP API server error types.

/// Server-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ServerErrorKind {
    /// No usable input in the request body
    #[display("No text, image or audio supplied")]
    EmptyRequest,
    /// Malformed data-URL media payload
    #[display("Failed to decode media payload: {}", _0)]
    MediaDecode(String),
    /// Failed to bind or serve
    #[display("Server failed to start: {}", _0)]
    Startup(String),
    /// Unhandled internal failure while processing a request
    #[display("Internal error: {}", _0)]
    Internal(String),
}

/// Server error with source location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Server Error: {} at line {} in {}", kind, line, file)]
pub struct ServerError {
    /// The kind of error that occurred
    pub kind: ServerErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ServerError {
    /// Create a new ServerError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ServerErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
