//! HTTP API adapter for the IsItTrue fact-checking assistant.
//!
//! Exposes the analysis pipeline over two routes: `POST /api/analyze`
//! taking JSON with optional `text` and data-URL `image`/`audio`
//! fields, and `GET /api/health`. The router is generic over the
//! generation driver so route tests can run against a double without
//! touching the network.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod routes;
mod server;

pub use routes::{AnalyzeBody, AnalyzeResponse, ErrorResponse, router};
pub use server::serve;
