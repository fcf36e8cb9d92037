//! Self-mention stripping and display-name encoding for mention replies.

use dbot_core::escape_markup;

/// Removes a leading self-mention token (e.g. `@helpdesk_bot`) from `text`.
///
/// The token matches ASCII case-insensitively and only as a whole word: it must be followed by the
/// end of the text or a character that cannot continue a username. Anything else is returned as is.
pub fn strip_recipient_mention<'a>(text: &'a str, mention: &str) -> &'a str {
    if mention.is_empty() {
        return text;
    }
    let trimmed = text.trim_start();
    let Some(head) = trimmed.get(..mention.len()) else {
        return text;
    };
    if !head.eq_ignore_ascii_case(mention) {
        return text;
    }
    let rest = &trimmed[mention.len()..];
    match rest.chars().next() {
        Some(c) if c.is_alphanumeric() || c == '_' => text,
        _ => rest,
    }
}

/// Encodes a display name so the chat client shows it literally inside mention markup.
pub fn encode_display_name(name: &str) -> String {
    escape_markup(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_leading_mention() {
        assert_eq!(strip_recipient_mention("@helpdesk_bot hello", "@helpdesk_bot"), " hello");
        assert_eq!(strip_recipient_mention("  @Helpdesk_Bot, hi", "@helpdesk_bot"), ", hi");
        assert_eq!(strip_recipient_mention("@helpdesk_bot", "@helpdesk_bot"), "");
    }

    #[test]
    fn test_strip_ignores_non_leading_or_partial_mentions() {
        assert_eq!(
            strip_recipient_mention("hello @helpdesk_bot", "@helpdesk_bot"),
            "hello @helpdesk_bot"
        );
        assert_eq!(
            strip_recipient_mention("@helpdesk_bot2 hi", "@helpdesk_bot"),
            "@helpdesk_bot2 hi"
        );
        assert_eq!(strip_recipient_mention("@other hi", "@helpdesk_bot"), "@other hi");
    }

    #[test]
    fn test_strip_with_empty_mention_or_short_text() {
        assert_eq!(strip_recipient_mention("hello", ""), "hello");
        assert_eq!(strip_recipient_mention("@he", "@helpdesk_bot"), "@he");
        assert_eq!(strip_recipient_mention("", "@helpdesk_bot"), "");
    }

    #[test]
    fn test_strip_multibyte_text_does_not_panic() {
        assert_eq!(strip_recipient_mention("héllo wörld", "@bot"), "héllo wörld");
        assert_eq!(strip_recipient_mention("@bot😀", "@bot"), "😀");
    }

    #[test]
    fn test_encode_display_name() {
        assert_eq!(encode_display_name("Ada"), "Ada");
        assert_eq!(encode_display_name("<script>"), "&lt;script&gt;");
    }
}
