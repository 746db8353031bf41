//! Inbound request types and modality classification.

use serde::{Deserialize, Serialize};

/// Exactly the fields a caller supplies for one analysis.
///
/// At least one field must be present; the transport adapters enforce
/// that before the core is invoked. The request is immutable once
/// constructed and lives for one request only.
///
/// # Examples
///
/// ```
/// use isittrue_core::{AnalysisRequest, Modality};
///
/// let request = AnalysisRequest::from_text("Is the Earth flat?");
/// assert_eq!(Modality::classify(&request), Modality::Text);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// Free text or caption supplied by the user
    pub text: Option<String>,
    /// Raw image bytes, already decoded by the transport adapter
    pub image: Option<Vec<u8>>,
    /// Raw audio bytes, already decoded by the transport adapter
    pub audio: Option<Vec<u8>>,
}

impl AnalysisRequest {
    /// Create a new request from its raw parts.
    pub fn new(text: Option<String>, image: Option<Vec<u8>>, audio: Option<Vec<u8>>) -> Self {
        Self { text, image, audio }
    }

    /// Convenience constructor for text-only requests.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            image: None,
            audio: None,
        }
    }

    /// The user text with surrounding whitespace removed.
    ///
    /// Text that is empty after trimming is treated as absent.
    pub fn trimmed_text(&self) -> Option<&str> {
        self.text
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }

    /// True when no usable input is present.
    pub fn is_empty(&self) -> bool {
        Modality::classify(self) == Modality::Empty
    }
}

/// The kind of payload driving a request.
///
/// Precedence is image > audio > text, decided in one place so the
/// downstream branching can be an exhaustive match instead of nested
/// conditionals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Modality {
    /// An image payload drives the request (text becomes a caption)
    Image,
    /// An audio payload drives the request
    Audio,
    /// Free text or a URL drives the request
    Text,
    /// Nothing usable was supplied
    Empty,
}

impl Modality {
    /// Classify a request by its payload, first match wins.
    pub fn classify(request: &AnalysisRequest) -> Self {
        if request.image.is_some() {
            Modality::Image
        } else if request.audio.is_some() {
            Modality::Audio
        } else if request.trimmed_text().is_some() {
            Modality::Text
        } else {
            Modality::Empty
        }
    }
}
