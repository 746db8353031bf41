//! The seam between prompt assembly and the hosted model.

use async_trait::async_trait;

use isittrue_core::PromptDocument;
use isittrue_error::GeminiError;

/// A hosted multimodal generation backend: prompt document in, text
/// out.
///
/// The production implementation is [`crate::GeminiClient`]; tests
/// substitute doubles to exercise routing and retry behavior without
/// network access.
#[async_trait]
pub trait GenerativeDriver: Send + Sync {
    /// Generate a reply for the assembled document at the given
    /// sampling temperature.
    async fn generate(&self, doc: &PromptDocument, temperature: f32)
    -> Result<String, GeminiError>;
}
