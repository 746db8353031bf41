//! URL detection and best-effort article extraction.

use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use tracing::{info, instrument, warn};

use isittrue_core::{ExtractedArticle, truncate_chars};
use isittrue_error::HttpError;

/// Default bound on extracted article length, in characters.
pub const DEFAULT_MAX_ARTICLE_CHARS: usize = 10_000;

/// Render width handed to the HTML-to-text reduction.
const RENDER_WIDTH: usize = 100;

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+").expect("URL regex is valid"));

/// Find the first well-formed `http://` or `https://` substring in
/// `text`, with trailing punctuation stripped.
///
/// # Examples
///
/// ```
/// use isittrue_web::find_url;
///
/// assert_eq!(
///     find_url("read https://example.com/a."),
///     Some("https://example.com/a".to_string()),
/// );
/// assert_eq!(find_url("no link here"), None);
/// ```
pub fn find_url(text: &str) -> Option<String> {
    let raw = URL_RE.find(text)?.as_str();
    let trimmed = raw.trim_end_matches(['.', ',', ';', ':', '!', '?', '\'', '"']);
    Some(trimmed.to_string())
}

/// Fetches a linked page and reduces it to its main textual content.
///
/// Extraction runs once per request; its failure is represented in the
/// returned [`ExtractedArticle`], never as an error.
#[derive(Debug, Clone)]
pub struct ContentExtractor {
    client: reqwest::Client,
    max_article_chars: usize,
}

impl ContentExtractor {
    /// Create an extractor with a fetch timeout and article bound.
    pub fn new(timeout: Duration, max_article_chars: usize) -> Result<Self, HttpError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("isittrue/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| HttpError::new(e.to_string()))?;
        Ok(Self {
            client,
            max_article_chars,
        })
    }

    /// Detect a URL in `text`, download the page and extract its main
    /// text, truncated to the configured bound.
    ///
    /// An absent body with a present URL means the page was unreadable.
    #[instrument(skip(self, text))]
    pub async fn extract(&self, text: &str) -> ExtractedArticle {
        let Some(url) = find_url(text) else {
            return ExtractedArticle::none();
        };
        info!(url = %url, "📄 Lien détecté, tentative de lecture");

        match self.fetch_text(&url).await {
            Ok(article) if !article.trim().is_empty() => {
                ExtractedArticle::readable(url, truncate_chars(&article, self.max_article_chars))
            }
            Ok(_) => {
                warn!(url = %url, "Page fetched but no readable content");
                ExtractedArticle::unreadable(url)
            }
            Err(e) => {
                warn!(url = %url, error = %e, "Erreur lors de la lecture du lien");
                ExtractedArticle::unreadable(url)
            }
        }
    }

    async fn fetch_text(&self, url: &str) -> Result<String, HttpError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| HttpError::new(e.to_string()))?
            .error_for_status()
            .map_err(|e| HttpError::new(e.to_string()))?;
        let html = response
            .text()
            .await
            .map_err(|e| HttpError::new(e.to_string()))?;
        Ok(reduce_html(&html))
    }
}

/// Reduce an HTML page to its readable text at a fixed render width.
fn reduce_html(html: &str) -> String {
    html2text::from_read(html.as_bytes(), RENDER_WIDTH)
}
