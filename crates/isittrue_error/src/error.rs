//! Top-level error wrapper types.

use crate::{BotError, ConfigError, GeminiError, HttpError, ServerError};

/// This is the foundation error enum. Each member crate contributes
/// the variant covering its own failure domain.
///
/// # Examples
///
/// ```
/// use isittrue_error::{IsItTrueError, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: IsItTrueError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum IsItTrueErrorKind {
    /// HTTP error (page fetch, web search)
    #[from(HttpError)]
    Http(HttpError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Gemini generation error
    #[from(GeminiError)]
    Gemini(GeminiError),
    /// HTTP API server error
    #[from(ServerError)]
    Server(ServerError),
    /// Telegram transport error
    #[from(BotError)]
    Bot(BotError),
}

/// IsItTrue error with kind discrimination.
///
/// # Examples
///
/// ```
/// use isittrue_error::{IsItTrueResult, ConfigError};
///
/// fn might_fail() -> IsItTrueResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("IsItTrue Error: {}", _0)]
pub struct IsItTrueError(Box<IsItTrueErrorKind>);

impl IsItTrueError {
    /// Create a new error from a kind.
    pub fn new(kind: IsItTrueErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &IsItTrueErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to IsItTrueErrorKind
impl<T> From<T> for IsItTrueError
where
    T: Into<IsItTrueErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for IsItTrue operations.
pub type IsItTrueResult<T> = std::result::Result<T, IsItTrueError>;
