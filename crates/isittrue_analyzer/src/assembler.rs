//! Prompt assembly: one ordered document per classified request.

use isittrue_core::{AnalysisRequest, ExtractedArticle, Modality, PromptDocument, PromptPart};
use isittrue_lang::DetectedLanguage;

use crate::prompts;

/// Assemble the ordered multi-part prompt for a classified request.
///
/// This is a pure function of its inputs: identical arguments produce
/// an identical document, which is what makes routing testable without
/// the network.
///
/// Part order: system instruction, modality framing, media or subject
/// text, optional caption, optional web context. The image branch
/// carries the original text only as a caption and never a web-context
/// part, even when that text contains a URL.
pub fn assemble(
    request: &AnalysisRequest,
    language: &DetectedLanguage,
    article: &ExtractedArticle,
    web_context: &str,
    today: &str,
) -> PromptDocument {
    let mut doc = PromptDocument::new();
    doc.push(PromptPart::Instruction(prompts::system_instruction(
        today, language,
    )));

    match Modality::classify(request) {
        Modality::Image => {
            doc.push(PromptPart::Framing(prompts::IMAGE_FRAMING.to_string()));
            if let Some(image) = &request.image {
                doc.push(PromptPart::Image(image.clone()));
            }
            if let Some(text) = request.trimmed_text() {
                doc.push(PromptPart::Caption(prompts::caption(text)));
            }
        }
        Modality::Audio => {
            doc.push(PromptPart::Framing(prompts::AUDIO_FRAMING.to_string()));
            if let Some(audio) = &request.audio {
                doc.push(PromptPart::Audio(audio.clone()));
            }
        }
        Modality::Text => {
            let text = request.trimmed_text().unwrap_or_default();
            match (&article.source_url, &article.body) {
                // Extraction succeeded: the article body is the subject
                // and the original text is kept only via the URL marker.
                (Some(_), Some(body)) => {
                    doc.push(PromptPart::Framing(prompts::link_framing(body)));
                }
                // URL found but unreadable: fall back to the raw text
                // and tell the model extraction failed.
                (Some(url), None) => {
                    doc.push(PromptPart::Framing(prompts::message_framing(text)));
                    doc.push(PromptPart::Framing(prompts::unreadable_link_note(url)));
                }
                _ => {
                    doc.push(PromptPart::Framing(prompts::message_framing(text)));
                }
            }
        }
        Modality::Empty => {}
    }

    if !web_context.is_empty() {
        doc.push(PromptPart::WebContext(prompts::web_context_part(
            web_context,
        )));
    }

    doc
}
