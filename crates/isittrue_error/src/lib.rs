//! Error types for the IsItTrue fact-checking assistant.
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use isittrue_error::{IsItTrueResult, HttpError};
//!
//! fn fetch_data() -> IsItTrueResult<String> {
//!     Err(HttpError::new("Connection refused"))?
//! }
//!
//! match fetch_data() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod bot;
mod config;
mod error;
mod gemini;
mod http;
mod server;

pub use bot::{BotError, BotErrorKind};
pub use config::ConfigError;
pub use error::{IsItTrueError, IsItTrueErrorKind, IsItTrueResult};
pub use gemini::{GeminiError, GeminiErrorKind, RetryableError};
pub use http::HttpError;
pub use server::{ServerError, ServerErrorKind};
