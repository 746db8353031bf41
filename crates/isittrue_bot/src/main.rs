//! IsItTrue Telegram bot binary.

use std::env;
use std::sync::Arc;
use std::time::Duration;

use teloxide::Bot;
use tracing_subscriber::EnvFilter;

use isittrue_analyzer::{Analyzer, GeminiClient, Settings};
use isittrue_error::{BotError, BotErrorKind, IsItTrueResult};

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

    let token = env::var("TELEGRAM_BOT_TOKEN")
        .map_err(|_| BotError::new(BotErrorKind::MissingToken))?;

    let timeout = Duration::from_secs(settings.request_timeout_secs);
    let driver = GeminiClient::new(&settings.model, timeout)?;
    let analyzer = Arc::new(Analyzer::from_settings(&settings, driver)?);

    isittrue_bot::run(Bot::new(token), analyzer).await;
    Ok(())
}
