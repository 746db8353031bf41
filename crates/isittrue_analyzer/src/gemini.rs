//! Google Gemini REST driver.
//!
//! Speaks the `generateContent` endpoint of the Generative Language
//! API directly over reqwest. Images travel inline as base64; audio is
//! staged through the Files API from memory, so concurrent requests
//! never collide on a scratch file. Harm categories are configured to
//! BLOCK_NONE so the model can discuss the misinformation it is asked
//! to assess.

use std::env;
use std::time::Duration;

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{debug, instrument};

use isittrue_core::{PromptDocument, PromptPart};
use isittrue_error::{GeminiError, GeminiErrorKind};

use crate::GenerativeDriver;

const API_BASE: &str = "https://generativelanguage.googleapis.com";

/// Harm categories relaxed for fact-checking work.
const HARM_CATEGORIES: [&str; 4] = [
    "HARM_CATEGORY_HARASSMENT",
    "HARM_CATEGORY_HATE_SPEECH",
    "HARM_CATEGORY_SEXUALLY_EXPLICIT",
    "HARM_CATEGORY_DANGEROUS_CONTENT",
];

/// Client for the Gemini REST API.
///
/// Constructed once during process initialization and shared by
/// reference across requests; it holds no per-request state.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    /// Create a client for `model`, reading the API key from the
    /// `GEMINI_API_KEY` environment variable.
    pub fn new(model: impl Into<String>, timeout: Duration) -> Result<Self, GeminiError> {
        let api_key = env::var("GEMINI_API_KEY")
            .map_err(|_| GeminiError::new(GeminiErrorKind::MissingApiKey))?;
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GeminiError::new(GeminiErrorKind::ClientCreation(e.to_string())))?;
        Ok(Self {
            client,
            api_key,
            model: model.into(),
        })
    }

    /// The configured model identifier.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Convert prompt parts to API content parts, uploading audio on
    /// the way.
    async fn to_api_parts(&self, doc: &PromptDocument) -> Result<Vec<Value>, GeminiError> {
        let mut parts = Vec::with_capacity(doc.parts().len());
        for part in doc.parts() {
            match part {
                PromptPart::Instruction(t)
                | PromptPart::Framing(t)
                | PromptPart::Caption(t)
                | PromptPart::WebContext(t) => parts.push(json!({ "text": t })),
                PromptPart::Image(bytes) => parts.push(json!({
                    "inline_data": {
                        "mime_type": sniff_image_mime(bytes),
                        "data": BASE64.encode(bytes),
                    }
                })),
                PromptPart::Audio(bytes) => {
                    let mime = sniff_audio_mime(bytes);
                    let uri = self.upload_media(bytes, mime).await?;
                    parts.push(json!({
                        "file_data": { "mime_type": mime, "file_uri": uri }
                    }));
                }
            }
        }
        Ok(parts)
    }

    /// Upload a media payload through the Files API and return the
    /// referenceable file URI.
    #[instrument(skip(self, bytes), fields(bytes = bytes.len(), mime = mime))]
    async fn upload_media(&self, bytes: &[u8], mime: &str) -> Result<String, GeminiError> {
        let url = format!("{API_BASE}/upload/v1beta/files?key={}", self.api_key);
        let response = self
            .client
            .post(&url)
            .header("X-Goog-Upload-Protocol", "raw")
            .header("Content-Type", mime)
            .body(bytes.to_vec())
            .send()
            .await
            .map_err(|e| GeminiError::new(GeminiErrorKind::UploadFailed(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GeminiError::new(GeminiErrorKind::UploadFailed(format!(
                "status {status}: {message}"
            ))));
        }
        let uploaded: FileUploadResponse = response
            .json()
            .await
            .map_err(|e| GeminiError::new(GeminiErrorKind::UploadFailed(e.to_string())))?;
        debug!(uri = %uploaded.file.uri, "Media uploaded");
        Ok(uploaded.file.uri)
    }
}

#[async_trait]
impl GenerativeDriver for GeminiClient {
    #[instrument(skip(self, doc), fields(model = %self.model, parts = doc.parts().len()))]
    async fn generate(
        &self,
        doc: &PromptDocument,
        temperature: f32,
    ) -> Result<String, GeminiError> {
        let parts = self.to_api_parts(doc).await?;
        let safety_settings: Vec<Value> = HARM_CATEGORIES
            .iter()
            .map(|category| json!({ "category": category, "threshold": "BLOCK_NONE" }))
            .collect();
        let body = json!({
            "contents": [{ "role": "user", "parts": parts }],
            "generationConfig": { "temperature": temperature },
            "safetySettings": safety_settings,
        });

        let url = format!(
            "{API_BASE}/v1beta/models/{}:generateContent?key={}",
            self.model, self.api_key
        );
        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| GeminiError::new(GeminiErrorKind::ApiRequest(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GeminiError::new(GeminiErrorKind::HttpError {
                status_code: status.as_u16(),
                message,
            }));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GeminiError::new(GeminiErrorKind::ApiRequest(e.to_string())))?;
        parsed
            .text()
            .ok_or_else(|| GeminiError::new(GeminiErrorKind::EmptyResponse))
    }
}

#[derive(Debug, Deserialize)]
struct FileUploadResponse {
    file: FileHandle,
}

#[derive(Debug, Deserialize)]
struct FileHandle {
    uri: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenate the text of the first candidate's parts.
    fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if text.is_empty() { None } else { Some(text) }
    }
}

/// Sniff an image MIME type from magic bytes, defaulting to JPEG.
fn sniff_image_mime(bytes: &[u8]) -> &'static str {
    if bytes.starts_with(&[0x89, b'P', b'N', b'G']) {
        "image/png"
    } else if bytes.starts_with(b"GIF8") {
        "image/gif"
    } else if bytes.len() > 11 && &bytes[..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
        "image/webp"
    } else {
        "image/jpeg"
    }
}

/// Sniff an audio MIME type from magic bytes, defaulting to OGG, the
/// container Telegram voice notes arrive in.
fn sniff_audio_mime(bytes: &[u8]) -> &'static str {
    if bytes.starts_with(b"ID3") || bytes.starts_with(&[0xFF, 0xFB]) {
        "audio/mp3"
    } else if bytes.starts_with(b"RIFF") {
        "audio/wav"
    } else if bytes.starts_with(b"fLaC") {
        "audio/flac"
    } else {
        "audio/ogg"
    }
}
