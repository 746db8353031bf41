//! Recent-news web search via the DuckDuckGo HTML endpoint.

use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use tracing::{info, instrument, warn};

use isittrue_core::{SearchResult, truncate_chars};
use isittrue_error::HttpError;

/// Default bound on the search query, in characters.
pub const DEFAULT_MAX_QUERY_CHARS: usize = 200;

/// How many ranked results to keep.
const MAX_RESULTS: usize = 5;

static RESULT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"class="result__a"[^>]*href="([^"]*)"[^>]*>(.*?)</a>"#)
        .expect("result regex is valid")
});
static SNIPPET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)class="result__snippet"[^>]*>(.*?)</a>"#).expect("snippet regex is valid")
});
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").expect("tag regex"));

/// Queries the search engine for recent (past week) results.
///
/// Any failure yields an empty result list; search augmentation is
/// best-effort context, never a hard dependency.
#[derive(Debug, Clone)]
pub struct SearchClient {
    client: reqwest::Client,
    max_query_chars: usize,
}

impl SearchClient {
    /// Create a search client with a request timeout and query bound.
    pub fn new(timeout: Duration, max_query_chars: usize) -> Result<Self, HttpError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent("Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36")
            .build()
            .map_err(|e| HttpError::new(e.to_string()))?;
        Ok(Self {
            client,
            max_query_chars,
        })
    }

    /// Search the web for `query`, restricted to the past week.
    ///
    /// Queries of fewer than two words are too short to be meaningful
    /// and return no results without touching the network.
    #[instrument(skip(self, query))]
    pub async fn search(&self, query: &str) -> Vec<SearchResult> {
        if query.split_whitespace().count() < 2 {
            return Vec::new();
        }
        let clean_query = truncate_chars(query, self.max_query_chars).replace('\n', " ");
        info!(query = %clean_query, "🔍 Recherche Web lancée");

        match self.fetch_results(&clean_query).await {
            Ok(results) => results,
            Err(e) => {
                warn!(error = %e, "Erreur DuckDuckGo");
                Vec::new()
            }
        }
    }

    async fn fetch_results(&self, query: &str) -> Result<Vec<SearchResult>, HttpError> {
        // df=w restricts results to the past week.
        let url = format!(
            "https://html.duckduckgo.com/html/?q={}&df=w",
            urlencoding::encode(query)
        );
        let body = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| HttpError::new(e.to_string()))?
            .error_for_status()
            .map_err(|e| HttpError::new(e.to_string()))?
            .text()
            .await
            .map_err(|e| HttpError::new(e.to_string()))?;
        Ok(parse_results(&body))
    }
}

/// Parse ranked results out of the DuckDuckGo HTML response.
pub(crate) fn parse_results(html: &str) -> Vec<SearchResult> {
    let snippets: Vec<String> = SNIPPET_RE
        .captures_iter(html)
        .filter_map(|c| c.get(1))
        .map(|m| strip_markup(m.as_str()))
        .collect();

    RESULT_RE
        .captures_iter(html)
        .take(MAX_RESULTS)
        .enumerate()
        .filter_map(|(i, cap)| {
            let href = cap.get(1)?.as_str();
            let title = strip_markup(cap.get(2)?.as_str());
            if title.is_empty() {
                return None;
            }
            Some(SearchResult {
                title,
                snippet: snippets.get(i).cloned().unwrap_or_default(),
                link: resolve_redirect(href),
            })
        })
        .collect()
}

/// DuckDuckGo wraps target links in a redirect carrying the real URL
/// in the `uddg` query parameter.
fn resolve_redirect(href: &str) -> String {
    if let Some(encoded) = href.split("uddg=").nth(1) {
        let encoded = encoded.split('&').next().unwrap_or(encoded);
        if let Ok(decoded) = urlencoding::decode(encoded) {
            return decoded.into_owned();
        }
    }
    href.to_string()
}

fn strip_markup(fragment: &str) -> String {
    let text = TAG_RE.replace_all(fragment, "");
    text.replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#x27;", "'")
        .replace("&#39;", "'")
        .trim()
        .to_string()
}

/// Render search results into the single formatted context block
/// appended to fact-check prompts. An empty result list renders as an
/// empty context.
///
/// # Examples
///
/// ```
/// use isittrue_web::render_web_context;
///
/// assert_eq!(render_web_context(&[]), "");
/// ```
pub fn render_web_context(results: &[SearchResult]) -> String {
    if results.is_empty() {
        return String::new();
    }
    let mut context = String::from("--- RÉSULTATS RECHERCHE WEB RÉCENTS ---\n");
    for r in results {
        context.push_str(&format!(
            "• Source: {}\n  Extrait: {}\n  Lien: {}\n\n",
            r.title, r.snippet, r.link
        ));
    }
    context
}
