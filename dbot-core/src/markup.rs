//! Escaping for text embedded into chat HTML markup (Telegram HTML parse mode).

/// Replaces `&`, `<`, `>` and `"` with the named entities Telegram's HTML mode accepts.
/// Other characters, including `'`, pass through unchanged.
pub fn escape_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_markup_plain_text_unchanged() {
        assert_eq!(escape_markup("Ada Lovelace"), "Ada Lovelace");
        assert_eq!(escape_markup(""), "");
    }

    #[test]
    fn test_escape_markup_entities() {
        assert_eq!(
            escape_markup("<b>Tom & \"Jerry\"</b>"),
            "&lt;b&gt;Tom &amp; &quot;Jerry&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_escape_markup_keeps_apostrophe() {
        let escaped = escape_markup("O'Brien");
        assert_eq!(escaped, "O'Brien");
        assert!(!escaped.contains("&apos;"));
    }

    #[test]
    fn test_escape_markup_only_emits_telegram_entities() {
        let escaped = escape_markup("a'b\"c<d>e&f");
        let mut rest = escaped.as_str();
        while let Some(start) = rest.find('&') {
            let entity = &rest[start..];
            assert!(
                ["&amp;", "&lt;", "&gt;", "&quot;"]
                    .iter()
                    .any(|e| entity.starts_with(e)),
                "unsupported entity in {escaped}"
            );
            rest = &rest[start + 1..];
        }
    }

    #[test]
    fn test_escape_markup_does_not_double_decode() {
        assert_eq!(escape_markup("&amp;"), "&amp;amp;");
    }
}
