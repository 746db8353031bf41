//! API routes: analysis and health check.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use isittrue_analyzer::{Analyzer, GenerativeDriver};
use isittrue_core::AnalysisRequest;
use isittrue_error::{ServerError, ServerErrorKind};

/// Request body for `POST /api/analyze`.
///
/// `image` and `audio` carry base64 payloads, either as a data URL
/// (`data:image/png;base64,...`) or as the bare base64 text.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyzeBody {
    /// Free text or caption to verify
    pub text: Option<String>,
    /// Base64 image payload
    pub image: Option<String>,
    /// Base64 audio payload
    pub audio: Option<String>,
}

/// Success envelope for `POST /api/analyze`.
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    /// The assistant's reply
    pub result: String,
}

/// Error envelope for non-200 responses.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error description
    pub error: String,
}

/// Build the API router over a shared analyzer.
pub fn router<D>(analyzer: Arc<Analyzer<D>>) -> Router
where
    D: GenerativeDriver + 'static,
{
    Router::new()
        .route("/api/analyze", post(analyze::<D>))
        .route("/api/health", get(health))
        .with_state(analyzer)
}

async fn analyze<D: GenerativeDriver + 'static>(
    State(analyzer): State<Arc<Analyzer<D>>>,
    Json(body): Json<AnalyzeBody>,
) -> Result<Json<AnalyzeResponse>, (StatusCode, Json<ErrorResponse>)> {
    let text = body
        .text
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty());
    if text.is_none() && body.image.is_none() && body.audio.is_none() {
        return Err(error_response(ServerError::new(
            ServerErrorKind::EmptyRequest,
        )));
    }

    info!("🔄 Analyse lancée");
    let image = body.image.as_deref().and_then(|data| decode_media("image", data));
    let audio = body.audio.as_deref().and_then(|data| decode_media("audio", data));

    let request = AnalysisRequest::new(text.map(str::to_string), image, audio);
    let result = analyzer.process(&request).await;
    Ok(Json(AnalyzeResponse { result }))
}

/// Decode a base64 media field, dropping it on failure.
///
/// A malformed payload degrades to an absent field rather than failing
/// the whole request, so a text caption still gets analyzed.
fn decode_media(field: &str, data: &str) -> Option<Vec<u8>> {
    let payload = match data.split_once(',') {
        Some((_, after)) => after,
        None => data,
    };
    match STANDARD.decode(payload) {
        Ok(bytes) => Some(bytes),
        Err(e) => {
            let err = ServerError::new(ServerErrorKind::MediaDecode(e.to_string()));
            error!(field, error = %err, "Erreur décodage media");
            None
        }
    }
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

fn error_response(err: ServerError) -> (StatusCode, Json<ErrorResponse>) {
    let status = match err.kind {
        ServerErrorKind::EmptyRequest => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let message = match err.kind {
        // Mirrors the product's French-first API surface.
        ServerErrorKind::EmptyRequest => {
            "Veuillez fournir du texte, une image ou un audio".to_string()
        }
        ref kind => format!("Erreur serveur: {kind}"),
    };
    (status, Json(ErrorResponse { error: message }))
}
