//! Core data types for the IsItTrue fact-checking assistant.
//!
//! This crate provides the foundation data types shared by the prompt
//! assembler, the transport adapters and the web collaborators. All of
//! them live for the duration of one request and are never persisted.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod article;
mod prompt;
mod request;
mod search;
mod text;

pub use article::ExtractedArticle;
pub use prompt::{PromptDocument, PromptPart};
pub use request::{AnalysisRequest, Modality};
pub use search::SearchResult;
pub use text::truncate_chars;
