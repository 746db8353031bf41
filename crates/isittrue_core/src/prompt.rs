//! Prompt document types handed to the generation driver.

use serde::{Deserialize, Serialize};

/// One ordered unit of the document sent to the generation provider.
///
/// Media stays raw here; how an image is inlined or an audio payload is
/// uploaded is the generation driver's concern, which keeps assembly a
/// pure function of its inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum PromptPart {
    /// System instruction (always the first part)
    Instruction(String),
    /// Task framing specific to the request's modality
    Framing(String),
    /// Inline image payload
    Image(Vec<u8>),
    /// Audio payload, submitted via the provider's upload mechanism
    Audio(Vec<u8>),
    /// Caption accompanying an image
    Caption(String),
    /// Formatted web-search context block
    WebContext(String),
}

/// Ordered sequence of heterogeneous prompt parts.
///
/// The document is invariant to replay: identical inputs produce
/// identical ordered parts.
///
/// # Examples
///
/// ```
/// use isittrue_core::{PromptDocument, PromptPart};
///
/// let mut doc = PromptDocument::new();
/// doc.push(PromptPart::Instruction("Be truthful.".to_string()));
/// doc.push(PromptPart::Framing("[MESSAGE UTILISATEUR] : hi".to_string()));
/// assert_eq!(doc.parts().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PromptDocument {
    parts: Vec<PromptPart>,
}

impl PromptDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a part, preserving order.
    pub fn push(&mut self, part: PromptPart) {
        self.parts.push(part);
    }

    /// The ordered parts.
    pub fn parts(&self) -> &[PromptPart] {
        &self.parts
    }

    /// True when the document carries an image or audio part.
    pub fn has_media(&self) -> bool {
        self.parts
            .iter()
            .any(|p| matches!(p, PromptPart::Image(_) | PromptPart::Audio(_)))
    }

    /// Iterate over the text of every textual part, in order.
    pub fn text_parts(&self) -> impl Iterator<Item = &str> {
        self.parts.iter().filter_map(|p| match p {
            PromptPart::Instruction(t)
            | PromptPart::Framing(t)
            | PromptPart::Caption(t)
            | PromptPart::WebContext(t) => Some(t.as_str()),
            PromptPart::Image(_) | PromptPart::Audio(_) => None,
        })
    }
}
