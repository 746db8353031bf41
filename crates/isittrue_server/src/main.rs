//! IsItTrue HTTP API binary.

use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use isittrue_analyzer::{Analyzer, GeminiClient, Settings};
use isittrue_error::{IsItTrueError, IsItTrueResult};

#[tokio::main]
async fn main() -> IsItTrueResult<()> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_level.clone())),
        )
        .init();

    let timeout = Duration::from_secs(settings.request_timeout_secs);
    let driver = GeminiClient::new(&settings.model, timeout)?;
    let analyzer = Arc::new(Analyzer::from_settings(&settings, driver)?);

    isittrue_server::serve(&settings, analyzer)
        .await
        .map_err(IsItTrueError::from)
}
