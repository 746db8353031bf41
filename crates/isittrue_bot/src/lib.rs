//! Telegram adapter for the IsItTrue fact-checking assistant.
//!
//! `/start` and `/help` answer with a greeting in the language the
//! user writes in; every other message is fed through the analysis
//! pipeline. Replies longer than Telegram's message limit are split
//! into chunks on character boundaries.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod chunk;
mod handlers;
mod media;

pub use chunk::{MAX_MESSAGE_CHARS, chunk_reply};
pub use handlers::run;
