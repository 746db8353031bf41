//! End-to-end request pipeline: classify, augment, assemble, generate.

use std::time::Duration;

use chrono::Utc;
use tracing::{info, instrument};

use isittrue_core::{AnalysisRequest, ExtractedArticle, Modality, truncate_chars};
use isittrue_error::IsItTrueResult;
use isittrue_lang::{LanguageDetector, locale_for, message_locale_for};
use isittrue_web::{ContentExtractor, SearchClient, render_web_context};

use crate::retry::{RetryPolicy, generate_with_retry};
use crate::settings::Settings;
use crate::{GenerativeDriver, assemble};

/// The fact-checking pipeline.
///
/// Owns its collaborators and the injected generation driver; holds no
/// per-request state, so one instance serves concurrent requests.
#[derive(Debug, Clone)]
pub struct Analyzer<D: GenerativeDriver> {
    driver: D,
    detector: LanguageDetector,
    extractor: ContentExtractor,
    search: SearchClient,
    temperature: f32,
    max_query_chars: usize,
    retry: RetryPolicy,
}

impl<D: GenerativeDriver> Analyzer<D> {
    /// Build the pipeline from process settings and a generation
    /// driver.
    pub fn from_settings(settings: &Settings, driver: D) -> IsItTrueResult<Self> {
        let timeout = Duration::from_secs(settings.request_timeout_secs);
        Ok(Self {
            driver,
            detector: LanguageDetector::new(),
            extractor: ContentExtractor::new(timeout, settings.max_article_chars)?,
            search: SearchClient::new(timeout, settings.max_query_chars)?,
            temperature: settings.temperature,
            max_query_chars: settings.max_query_chars,
            retry: RetryPolicy::from(settings),
        })
    }

    /// Process one request end to end and always produce a reply
    /// string: the model's text, or a localized error message.
    #[instrument(skip_all)]
    pub async fn process(&self, request: &AnalysisRequest) -> String {
        let language = self.detector.detect(request.trimmed_text());
        let locale = locale_for(&language.code);

        let modality = Modality::classify(request);
        info!(%modality, language = %language.code, "🔄 Analyse lancée");
        if modality == Modality::Empty {
            // Transport adapters validate upstream; this is the
            // in-depth guard for direct library callers.
            return locale.input_error.to_string();
        }

        let (article, web_context) = self.augment(modality, request).await;

        let today = Utc::now().format("%d %B %Y").to_string();
        let doc = assemble(request, &language, &article, &web_context, &today);
        // Quota and failure messages fall back to English, not French.
        let message_locale = message_locale_for(&language.code);
        generate_with_retry(&self.driver, &doc, self.temperature, message_locale, self.retry).await
    }

    /// Run extraction and search for text requests. Media branches
    /// skip both, even when a caption contains a URL.
    async fn augment(
        &self,
        modality: Modality,
        request: &AnalysisRequest,
    ) -> (ExtractedArticle, String) {
        if modality != Modality::Text {
            return (ExtractedArticle::none(), String::new());
        }
        let text = request.trimmed_text().unwrap_or_default();
        let article = self.extractor.extract(text).await;
        if article.source_url.is_some() {
            // The page itself is the context; an independent search
            // would duplicate it.
            return (article, String::new());
        }
        let query = truncate_chars(text, self.max_query_chars);
        let results = self.search.search(query).await;
        (article, render_web_context(&results))
    }
}
