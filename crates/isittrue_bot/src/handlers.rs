//! Dispatcher wiring and message handlers.

use std::sync::Arc;

use teloxide::prelude::*;
use teloxide::types::{ChatAction, ParseMode};
use teloxide::utils::command::BotCommands;
use tracing::{error, info};

use isittrue_analyzer::{Analyzer, GeminiClient};
use isittrue_core::{AnalysisRequest, truncate_chars};
use isittrue_lang::{LanguageDetector, locale_for};

use crate::chunk::chunk_reply;
use crate::media;

#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase")]
enum Command {
    /// Introduce the assistant
    Start,
    /// Show what the assistant can do
    Help,
}

type SharedAnalyzer = Arc<Analyzer<GeminiClient>>;

/// Run the bot until shutdown, dispatching commands and messages.
pub async fn run(bot: Bot, analyzer: SharedAnalyzer) {
    info!("🤖 IsItTrue Telegram bot starting");

    let handler = Update::filter_message()
        .branch(
            dptree::entry()
                .filter_command::<Command>()
                .endpoint(on_command),
        )
        .branch(dptree::endpoint(on_message));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![analyzer])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
}

async fn on_command(bot: Bot, msg: Message, _cmd: Command) -> ResponseResult<()> {
    let language = LanguageDetector::new().detect(msg.text());
    let locale = locale_for(&language.code);
    info!(language = %language.display_name, code = %language.code, "🌐 Greeting requested");

    // Greetings carry legacy `**bold**` markup; MarkdownV2 would
    // require escaping their punctuation and mangle the strings.
    #[allow(deprecated)]
    bot.send_message(msg.chat.id, locale.greeting)
        .parse_mode(ParseMode::Markdown)
        .await?;
    Ok(())
}

async fn on_message(bot: Bot, msg: Message, analyzer: SharedAnalyzer) -> ResponseResult<()> {
    bot.send_chat_action(msg.chat.id, ChatAction::Typing)
        .await?;

    let text = msg.text().or_else(|| msg.caption());
    let language = LanguageDetector::new().detect(text);
    let locale = locale_for(&language.code);
    info!(language = %language.display_name, code = %language.code, "🌐 Message language");

    let mut image = None;
    let mut audio = None;
    if let Some(file_id) = media::largest_photo_id(&msg) {
        let note = if language.code == "fr" {
            "🧐 Analyse de l'image..."
        } else {
            "🧐 Analyzing image..."
        };
        bot.send_message(msg.chat.id, note).await?;
        match media::download(&bot, file_id).await {
            Ok(bytes) => image = Some(bytes),
            Err(e) => return reply_error(&bot, &msg, &e.to_string()).await,
        }
    } else if let Some(file_id) = media::voice_or_audio_id(&msg) {
        let note = if language.code == "fr" {
            "🎧 Traitement de l'audio..."
        } else {
            "🎧 Processing audio..."
        };
        bot.send_message(msg.chat.id, note).await?;
        match media::download(&bot, file_id).await {
            Ok(bytes) => audio = Some(bytes),
            Err(e) => return reply_error(&bot, &msg, &e.to_string()).await,
        }
    }

    let request = AnalysisRequest::new(text.map(str::to_string), image, audio);
    if request.is_empty() {
        bot.send_message(msg.chat.id, locale.input_error).await?;
        return Ok(());
    }

    let reply = analyzer.process(&request).await;
    info!(language = %language.display_name, "📤 Sending response");
    for part in chunk_reply(&reply) {
        bot.send_message(msg.chat.id, part).await?;
    }
    Ok(())
}

async fn reply_error(bot: &Bot, msg: &Message, detail: &str) -> ResponseResult<()> {
    error!(error = detail, "Attachment handling failed");
    let text = format!("❌ Erreur: {}", truncate_chars(detail, 100));
    bot.send_message(msg.chat.id, text).await?;
    Ok(())
}
