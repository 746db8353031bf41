//! Reply splitting for Telegram's message size limit.

/// Telegram's maximum message length, in characters.
pub const MAX_MESSAGE_CHARS: usize = 4096;

/// Split a reply into chunks of at most [`MAX_MESSAGE_CHARS`]
/// characters, never cutting through a character.
pub fn chunk_reply(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }
    let mut chunks = Vec::new();
    let mut start = 0;
    let mut count = 0;
    for (idx, _) in text.char_indices() {
        if count == MAX_MESSAGE_CHARS {
            chunks.push(&text[start..idx]);
            start = idx;
            count = 0;
        }
        count += 1;
    }
    chunks.push(&text[start..]);
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_reply_is_one_chunk() {
        assert_eq!(chunk_reply("🏳️ VERDICT : Vrai"), vec!["🏳️ VERDICT : Vrai"]);
    }

    #[test]
    fn empty_reply_yields_no_chunks() {
        assert!(chunk_reply("").is_empty());
    }

    #[test]
    fn exact_limit_is_one_chunk() {
        let text = "a".repeat(MAX_MESSAGE_CHARS);
        assert_eq!(chunk_reply(&text).len(), 1);
    }

    #[test]
    fn long_reply_splits_and_reassembles() {
        let text = "b".repeat(MAX_MESSAGE_CHARS * 2 + 10);
        let chunks = chunk_reply(&text);
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].chars().count(), MAX_MESSAGE_CHARS);
        assert_eq!(chunks[1].chars().count(), MAX_MESSAGE_CHARS);
        assert_eq!(chunks[2].chars().count(), 10);
        assert_eq!(chunks.concat(), text);
    }

    #[test]
    fn multibyte_text_splits_on_character_boundaries() {
        let text = "é".repeat(MAX_MESSAGE_CHARS + 5);
        let chunks = chunk_reply(&text);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].chars().count(), MAX_MESSAGE_CHARS);
        assert_eq!(chunks[1], "é".repeat(5));
    }
}
