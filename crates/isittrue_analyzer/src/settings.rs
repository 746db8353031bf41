//! Process-wide configuration, read once at startup.

use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;

use isittrue_error::ConfigError;

/// Bundled defaults; every setting can be overridden by an
/// `isittrue.toml` next to the binary or an `ISITTRUE_`-prefixed
/// environment variable.
const DEFAULTS: &str = r#"
model = "gemini-2.5-flash"
temperature = 0.4
max_article_chars = 10000
max_query_chars = 200
request_timeout_secs = 30
max_attempts = 3
retry_backoff_secs = 1
retry_non_quota = true
host = "127.0.0.1"
port = 5000
debug = false
log_level = "info"
"#;

/// Immutable process configuration.
///
/// Credentials (`GEMINI_API_KEY`, `TELEGRAM_BOT_TOKEN`) stay in plain
/// environment variables and are read by the components needing them.
///
/// # Examples
///
/// ```
/// use isittrue_analyzer::Settings;
///
/// let settings = Settings::load().unwrap();
/// assert_eq!(settings.model, "gemini-2.5-flash");
/// assert_eq!(settings.max_article_chars, 10_000);
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Model identifier sent to the generation provider
    pub model: String,
    /// Sampling temperature for generation
    pub temperature: f32,
    /// Bound on extracted article length, in characters
    pub max_article_chars: usize,
    /// Bound on the web-search query, in characters
    pub max_query_chars: usize,
    /// Timeout applied to outbound HTTP calls
    pub request_timeout_secs: u64,
    /// Maximum generation attempts per request
    pub max_attempts: u32,
    /// Initial backoff between generation attempts, doubled each retry
    pub retry_backoff_secs: u64,
    /// Whether non-quota generation failures retry with the same
    /// backoff as quota failures
    pub retry_non_quota: bool,
    /// Bind address for the HTTP API
    pub host: String,
    /// Bind port for the HTTP API
    pub port: u16,
    /// Debug flag for the HTTP API
    pub debug: bool,
    /// Log level used when RUST_LOG is unset
    pub log_level: String,
}

impl Settings {
    /// Load configuration: bundled defaults, then `./isittrue.toml` if
    /// present, then `ISITTRUE_*` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from_str(DEFAULTS, FileFormat::Toml))
            .add_source(File::with_name("isittrue").required(false))
            .add_source(Environment::with_prefix("ISITTRUE"))
            .build()
            .map_err(|e| ConfigError::new(e.to_string()))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_bounds() {
        let settings = Settings::load().unwrap();
        assert_eq!(settings.temperature, 0.4);
        assert_eq!(settings.max_query_chars, 200);
        assert_eq!(settings.max_attempts, 3);
        assert_eq!(settings.retry_backoff_secs, 1);
        assert!(settings.retry_non_quota);
        assert_eq!(settings.port, 5000);
    }
}
