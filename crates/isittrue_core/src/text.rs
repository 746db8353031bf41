//! Text helpers shared across the pipeline.

/// Truncate a string to at most `max` characters.
///
/// Counts characters rather than bytes so multi-byte input never
/// panics on a boundary. Returns the input untouched when it already
/// fits.
///
/// # Examples
///
/// ```
/// use isittrue_core::truncate_chars;
///
/// assert_eq!(truncate_chars("hello", 10), "hello");
/// assert_eq!(truncate_chars("hello", 3), "hel");
/// assert_eq!(truncate_chars("héllo", 2), "hé");
/// ```
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
