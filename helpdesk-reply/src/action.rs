//! Reply actions produced by the router.

use serde::Serialize;
use std::fmt;

use crate::content::{
    LinkChoice, COURSE_LINK_TEXT, FALLBACK_TEXT, MENTION_PREFIX, MENTION_SUFFIX,
    PASSWORD_RESET_TEXT, THANK_YOU_TEXT, WIFI_CHOICES, WIFI_PROMPT,
};
use crate::mention::encode_display_name;
use crate::router::Sender;

/// Discriminant of [`ReplyAction`]; what a phrase set maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyKind {
    Mention,
    WifiHelp,
    CourseLink,
    PasswordReset,
    ThankYou,
    Fallback,
}

impl ReplyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReplyKind::Mention => "mention",
            ReplyKind::WifiHelp => "wifi_help",
            ReplyKind::CourseLink => "course_link",
            ReplyKind::PasswordReset => "password_reset",
            ReplyKind::ThankYou => "thank_you",
            ReplyKind::Fallback => "fallback",
        }
    }
}

impl fmt::Display for ReplyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One outgoing reply with everything needed to render it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReplyAction {
    /// Greeting that mentions the sender. `display_name` is already markup-encoded.
    Mention { user_id: i64, display_name: String },
    /// Card with a prompt and one link per operating system.
    WifiHelp {
        prompt: &'static str,
        choices: &'static [LinkChoice],
    },
    CourseLink { text: &'static str },
    PasswordReset { text: &'static str },
    ThankYou { text: &'static str },
    Fallback { text: &'static str },
}

impl ReplyAction {
    /// Builds the action for `kind`, embedding the sender only where the kind needs it.
    pub fn build(kind: ReplyKind, sender: &Sender) -> Self {
        match kind {
            ReplyKind::Mention => ReplyAction::Mention {
                user_id: sender.id,
                display_name: encode_display_name(&sender.display_name),
            },
            ReplyKind::WifiHelp => ReplyAction::WifiHelp {
                prompt: WIFI_PROMPT,
                choices: WIFI_CHOICES,
            },
            ReplyKind::CourseLink => ReplyAction::CourseLink {
                text: COURSE_LINK_TEXT,
            },
            ReplyKind::PasswordReset => ReplyAction::PasswordReset {
                text: PASSWORD_RESET_TEXT,
            },
            ReplyKind::ThankYou => ReplyAction::ThankYou {
                text: THANK_YOU_TEXT,
            },
            ReplyKind::Fallback => ReplyAction::Fallback {
                text: FALLBACK_TEXT,
            },
        }
    }

    pub fn kind(&self) -> ReplyKind {
        match self {
            ReplyAction::Mention { .. } => ReplyKind::Mention,
            ReplyAction::WifiHelp { .. } => ReplyKind::WifiHelp,
            ReplyAction::CourseLink { .. } => ReplyKind::CourseLink,
            ReplyAction::PasswordReset { .. } => ReplyKind::PasswordReset,
            ReplyAction::ThankYou { .. } => ReplyKind::ThankYou,
            ReplyAction::Fallback { .. } => ReplyKind::Fallback,
        }
    }

    /// Plain-text rendering: the mention is shown as the encoded name, the card as its prompt.
    pub fn text(&self) -> String {
        match self {
            ReplyAction::Mention { display_name, .. } => {
                format!("{}{}{}", MENTION_PREFIX, display_name, MENTION_SUFFIX)
            }
            ReplyAction::WifiHelp { prompt, .. } => prompt.to_string(),
            ReplyAction::CourseLink { text }
            | ReplyAction::PasswordReset { text }
            | ReplyAction::ThankYou { text }
            | ReplyAction::Fallback { text } => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sender(name: &str) -> Sender {
        Sender {
            id: 9,
            display_name: name.to_string(),
        }
    }

    #[test]
    fn test_build_kind_round_trips() {
        for kind in [
            ReplyKind::Mention,
            ReplyKind::WifiHelp,
            ReplyKind::CourseLink,
            ReplyKind::PasswordReset,
            ReplyKind::ThankYou,
            ReplyKind::Fallback,
        ] {
            assert_eq!(ReplyAction::build(kind, &sender("Ada")).kind(), kind);
        }
    }

    #[test]
    fn test_mention_encodes_display_name() {
        let action = ReplyAction::build(ReplyKind::Mention, &sender("<b>Bob</b> & co"));
        assert_eq!(
            action,
            ReplyAction::Mention {
                user_id: 9,
                display_name: "&lt;b&gt;Bob&lt;/b&gt; &amp; co".to_string(),
            }
        );
        assert_eq!(
            action.text(),
            "Hi &lt;b&gt;Bob&lt;/b&gt; &amp; co. What can I help you with today?"
        );
    }

    #[test]
    fn test_mention_keeps_apostrophe_literal() {
        let action = ReplyAction::build(ReplyKind::Mention, &sender("Sean O'Brien"));
        assert_eq!(action.text(), "Hi Sean O'Brien. What can I help you with today?");
        assert!(!action.text().contains("&apos;"));
    }

    #[test]
    fn test_static_texts() {
        let s = sender("Ada");
        assert_eq!(
            ReplyAction::build(ReplyKind::CourseLink, &s).text(),
            "You can access your courses at https://bright.uvic.ca."
        );
        assert_eq!(
            ReplyAction::build(ReplyKind::ThankYou, &s).text(),
            "I'm always happy to help! :)"
        );
        assert_eq!(
            ReplyAction::build(ReplyKind::WifiHelp, &s).text(),
            "Select your operating system:"
        );
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ReplyKind::WifiHelp.to_string(), "wifi_help");
        assert_eq!(ReplyKind::Fallback.as_str(), "fallback");
    }
}
