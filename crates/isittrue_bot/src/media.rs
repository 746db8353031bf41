//! In-memory download of Telegram attachments.

use teloxide::Bot;
use teloxide::prelude::Requester;
use teloxide::types::Message;
use tracing::debug;

use isittrue_error::{BotError, BotErrorKind};

/// File id of the largest photo variant in the message, if any.
pub(crate) fn largest_photo_id(msg: &Message) -> Option<&str> {
    msg.photo()
        .and_then(|sizes| sizes.iter().max_by_key(|p| p.file.size))
        .map(|p| p.file.id.as_str())
}

/// File id of a voice note or audio attachment, if any.
pub(crate) fn voice_or_audio_id(msg: &Message) -> Option<&str> {
    msg.voice()
        .map(|v| v.file.id.as_str())
        .or_else(|| msg.audio().map(|a| a.file.id.as_str()))
}

/// Download a Telegram file into memory, no disk staging.
pub(crate) async fn download(bot: &Bot, file_id: &str) -> Result<Vec<u8>, BotError> {
    let file = bot
        .get_file(file_id.to_string())
        .await
        .map_err(|e| BotError::new(BotErrorKind::Request(e.to_string())))?;

    let url = format!(
        "https://api.telegram.org/file/bot{}/{}",
        bot.token(),
        file.path
    );
    let response = reqwest::get(&url)
        .await
        .map_err(|e| BotError::new(BotErrorKind::Download(e.to_string())))?;
    let bytes = response
        .bytes()
        .await
        .map_err(|e| BotError::new(BotErrorKind::Download(e.to_string())))?;
    debug!(file_id, size = bytes.len(), "Attachment downloaded");
    Ok(bytes.to_vec())
}
