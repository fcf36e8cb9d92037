//! Phrase table: ordered trigger-phrase sets, each mapped to a [`ReplyKind`].

use std::collections::HashMap;

use thiserror::Error;

use crate::action::ReplyKind;
use crate::normalize::normalize;

pub const GREETING_PHRASES: &[&str] = &[
    "hello",
    "hi",
    "good morning",
    "good afternoon",
    "good evening",
    "hi there",
    "greetings",
];

pub const WIFI_PHRASES: &[&str] = &[
    "how do i connect to the wifi",
    "i cant connect to the wifi",
    "how to connect to wifi",
    "i dont know how to connect to the wifi",
    "help me connect to the wifi",
];

pub const COURSE_PHRASES: &[&str] = &[
    "where do i find my classes",
    "where are my classes",
    "i cant find my classes",
    "how do i access my classes",
];

pub const PASSWORD_PHRASES: &[&str] = &[
    "i forgot my password",
    "i cant remember my password",
    "ive forgotten my password",
    "how do i reset my password",
];

pub const THANK_YOU_PHRASES: &[&str] = &[
    "thank you",
    "thanks",
    "thank you so much",
    "thanks so much",
];

/// Why a set of phrase sets cannot form a table.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PhraseTableError {
    #[error("phrase {phrase:?} is not normalized (expected {expected:?})")]
    NotNormalized { phrase: String, expected: String },

    #[error("phrase {phrase:?} is mapped to both {first} and {second}")]
    Overlap {
        phrase: String,
        first: ReplyKind,
        second: ReplyKind,
    },

    #[error("phrase {0:?} is mapped to fallback; fallback is reserved for unmatched text")]
    FallbackTrigger(String),
}

/// Trigger phrases (normalized form) for one reply kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseSet {
    pub kind: ReplyKind,
    pub phrases: Vec<String>,
}

impl PhraseSet {
    pub fn new(kind: ReplyKind, phrases: &[&str]) -> Self {
        Self {
            kind,
            phrases: phrases.iter().map(|p| p.to_string()).collect(),
        }
    }

    fn matches(&self, text: &str) -> bool {
        self.phrases.iter().any(|p| p == text)
    }
}

/// Immutable, ordered phrase table. Lookup is exact equality; the first matching set wins.
#[derive(Debug, Clone)]
pub struct PhraseTable {
    sets: Vec<PhraseSet>,
}

impl PhraseTable {
    /// Builds a table after checking every phrase is normalized, no phrase maps to
    /// [`ReplyKind::Fallback`], and no phrase belongs to two sets.
    pub fn new(sets: Vec<PhraseSet>) -> Result<Self, PhraseTableError> {
        let table = Self { sets };
        table.validate()?;
        Ok(table)
    }

    /// The helpdesk table: greetings, wifi, courses, password reset, thanks.
    pub fn standard() -> Self {
        Self {
            sets: vec![
                PhraseSet::new(ReplyKind::Mention, GREETING_PHRASES),
                PhraseSet::new(ReplyKind::WifiHelp, WIFI_PHRASES),
                PhraseSet::new(ReplyKind::CourseLink, COURSE_PHRASES),
                PhraseSet::new(ReplyKind::PasswordReset, PASSWORD_PHRASES),
                PhraseSet::new(ReplyKind::ThankYou, THANK_YOU_PHRASES),
            ],
        }
    }

    pub fn validate(&self) -> Result<(), PhraseTableError> {
        let mut seen: HashMap<&str, ReplyKind> = HashMap::new();
        for set in &self.sets {
            for phrase in &set.phrases {
                if set.kind == ReplyKind::Fallback {
                    return Err(PhraseTableError::FallbackTrigger(phrase.clone()));
                }
                let expected = normalize(phrase);
                if expected != *phrase {
                    return Err(PhraseTableError::NotNormalized {
                        phrase: phrase.clone(),
                        expected,
                    });
                }
                if let Some(first) = seen.insert(phrase.as_str(), set.kind) {
                    if first != set.kind {
                        return Err(PhraseTableError::Overlap {
                            phrase: phrase.clone(),
                            first,
                            second: set.kind,
                        });
                    }
                }
            }
        }
        Ok(())
    }

    /// Kind of the first set containing `normalized`, if any.
    pub fn lookup(&self, normalized: &str) -> Option<ReplyKind> {
        self.sets
            .iter()
            .find(|set| set.matches(normalized))
            .map(|set| set.kind)
    }

    pub fn sets(&self) -> &[PhraseSet] {
        &self.sets
    }
}

impl Default for PhraseTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_is_valid() {
        assert_eq!(PhraseTable::standard().validate(), Ok(()));
    }

    #[test]
    fn test_lookup_exact_match_only() {
        let table = PhraseTable::standard();
        assert_eq!(table.lookup("hi there"), Some(ReplyKind::Mention));
        assert_eq!(table.lookup("thanks"), Some(ReplyKind::ThankYou));
        assert_eq!(table.lookup("hi there friend"), None);
        assert_eq!(table.lookup("Hello"), None);
        assert_eq!(table.lookup(""), None);
    }

    #[test]
    fn test_new_rejects_overlap() {
        let err = PhraseTable::new(vec![
            PhraseSet::new(ReplyKind::Mention, &["hi"]),
            PhraseSet::new(ReplyKind::ThankYou, &["thanks", "hi"]),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            PhraseTableError::Overlap {
                phrase: "hi".to_string(),
                first: ReplyKind::Mention,
                second: ReplyKind::ThankYou,
            }
        );
    }

    #[test]
    fn test_new_rejects_unnormalized_phrase() {
        let err =
            PhraseTable::new(vec![PhraseSet::new(ReplyKind::Mention, &["Hello!"])]).unwrap_err();
        assert!(matches!(
            err,
            PhraseTableError::NotNormalized { ref expected, .. } if expected == "hello"
        ));
    }

    #[test]
    fn test_new_rejects_fallback_trigger() {
        let err =
            PhraseTable::new(vec![PhraseSet::new(ReplyKind::Fallback, &["help"])]).unwrap_err();
        assert_eq!(err, PhraseTableError::FallbackTrigger("help".to_string()));
    }

    #[test]
    fn test_first_declared_set_wins_for_duplicates_in_same_kind() {
        let table = PhraseTable::new(vec![
            PhraseSet::new(ReplyKind::CourseLink, &["classes", "classes"]),
            PhraseSet::new(ReplyKind::ThankYou, &["ta"]),
        ])
        .unwrap();
        assert_eq!(table.lookup("classes"), Some(ReplyKind::CourseLink));
        assert_eq!(table.sets().len(), 2);
    }
}
