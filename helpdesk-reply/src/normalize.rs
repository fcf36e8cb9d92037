//! Text normalization applied before phrase lookup.

use std::sync::LazyLock;

use regex::Regex;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("whitespace pattern is valid"));

/// Removes ASCII punctuation, collapses runs of two or more whitespace characters into one space,
/// trims, and lower-cases. Idempotent.
///
/// A lone non-space whitespace character (e.g. a tab between two words) is kept as is.
pub fn normalize(text: &str) -> String {
    let stripped: String = text.chars().filter(|c| !c.is_ascii_punctuation()).collect();
    WHITESPACE_RUN
        .replace_all(&stripped, " ")
        .trim()
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_punctuation_and_case() {
        assert_eq!(normalize("Hello!"), "hello");
        assert_eq!(normalize("I can't remember my password"), "i cant remember my password");
        assert_eq!(normalize("thanks so much!!"), "thanks so much");
    }

    #[test]
    fn test_normalize_collapses_and_trims_whitespace() {
        assert_eq!(normalize("  How To Connect To Wifi?"), "how to connect to wifi");
        assert_eq!(normalize("hi \t\n there"), "hi there");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn test_normalize_punctuation_removal_can_create_runs() {
        assert_eq!(normalize("good - morning"), "good morning");
    }

    #[test]
    fn test_normalize_keeps_single_tab() {
        assert_eq!(normalize("thank\tyou"), "thank\tyou");
    }

    #[test]
    fn test_normalize_every_ascii_punctuation_char() {
        let all = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;
        assert_eq!(normalize(all), "");
        assert_eq!(normalize(&format!("a{}b", all)), "ab");
    }

    #[test]
    fn test_normalize_non_ascii_untouched_except_case() {
        assert_eq!(normalize("Grüße ¿Qué?"), "grüße ¿qué");
    }
}
