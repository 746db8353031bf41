//! Extracted article types.

use serde::{Deserialize, Serialize};

/// Result of running URL extraction over user text.
///
/// A present `source_url` with an absent `body` means "URL found but
/// unreadable", which is distinct from "no URL found" (both fields
/// absent).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExtractedArticle {
    /// The first well-formed URL found in the text, if any
    pub source_url: Option<String>,
    /// The page reduced to its main textual content, bounded in length
    pub body: Option<String>,
}

impl ExtractedArticle {
    /// No URL was found in the text.
    pub fn none() -> Self {
        Self::default()
    }

    /// A URL was found but the page could not be read.
    pub fn unreadable(url: impl Into<String>) -> Self {
        Self {
            source_url: Some(url.into()),
            body: None,
        }
    }

    /// A URL was found and its content extracted.
    pub fn readable(url: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            source_url: Some(url.into()),
            body: Some(body.into()),
        }
    }
}
