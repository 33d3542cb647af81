//! Tokenizer for message text: emoji, plain message words, channel names and the tail
//! after a leading word.

use std::sync::OnceLock;

use regex::Regex;

fn emoji_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r":\S+:").expect("emoji pattern is valid"))
}

fn word_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z0-9#]+$").expect("word pattern is valid"))
}

fn channel_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^#?([A-Za-z0-9]+)$").expect("channel pattern is valid"))
}

/// First `:name:` token in `text`, colons included.
pub fn parse_emoji(text: &str) -> Option<&str> {
    emoji_re().find(text).map(|m| m.as_str())
}

/// Emoji name without surrounding colons; plain names pass through.
pub fn emoji_name(token: &str) -> &str {
    token.trim_matches(':')
}

/// Splits `text` into message words. `None` unless there is at least one word and every
/// word is made of ASCII letters, digits and `#`.
pub fn parse_message_words(text: &str) -> Option<Vec<&str>> {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() || !words.iter().all(|w| word_re().is_match(w)) {
        return None;
    }
    Some(words)
}

/// Channel name from the first word of `text`, with an optional leading `#` dropped.
pub fn parse_channel_name(text: &str) -> Option<&str> {
    let (head, _) = split_head_tail(text);
    channel_re()
        .captures(head)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// First whitespace-separated word and everything after it (leading whitespace trimmed).
pub fn split_head_tail(text: &str) -> (&str, &str) {
    let text = text.trim_start();
    match text.find(char::is_whitespace) {
        Some(idx) => (&text[..idx], text[idx..].trim_start()),
        None => (text, ""),
    }
}
