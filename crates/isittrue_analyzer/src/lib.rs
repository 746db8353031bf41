//! Intent routing, prompt assembly and Gemini generation for IsItTrue.
//!
//! This crate is the core of the pipeline: it classifies the modality
//! of a request, decides whether to dereference a URL or invoke web
//! search, assembles one ordered multi-part prompt, and hands it to
//! the generation driver behind a bounded-retry wrapper.
//!
//! The driver is an explicit object injected at construction time, so
//! tests can substitute a double and no process-global client handle
//! exists.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod assembler;
mod driver;
mod gemini;
mod prompts;
mod retry;
mod settings;

pub use analyzer::Analyzer;
pub use assembler::assemble;
pub use driver::GenerativeDriver;
pub use gemini::GeminiClient;
pub use retry::{RetryPolicy, generate_with_retry};
pub use settings::Settings;
