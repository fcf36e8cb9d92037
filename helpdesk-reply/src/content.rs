//! Fixed reply content.

use dbot_core::LinkButton;
use serde::Serialize;

/// Text before the mention in the greeting reply.
pub const MENTION_PREFIX: &str = "Hi ";
/// Text after the mention in the greeting reply.
pub const MENTION_SUFFIX: &str = ". What can I help you with today?";

pub const WIFI_PROMPT: &str = "Select your operating system:";

/// One labelled link on the wifi help card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LinkChoice {
    pub label: &'static str,
    pub url: &'static str,
}

impl LinkChoice {
    pub fn to_button(&self) -> LinkButton {
        LinkButton {
            label: self.label.to_string(),
            url: self.url.to_string(),
        }
    }
}

pub const WIFI_CHOICES: &[LinkChoice] = &[
    LinkChoice {
        label: "Windows 10",
        url: "https://www.uvic.ca/systems/support/internettelephone/wireless/uvic-win10.php",
    },
    LinkChoice {
        label: "macOS",
        url: "https://www.uvic.ca/systems/support/internettelephone/wireless/uvic-defaultosx.php",
    },
    LinkChoice {
        label: "Android 8",
        url: "https://www.uvic.ca/systems/support/internettelephone/wireless/uvic-android8.php",
    },
];

pub const COURSE_LINK_TEXT: &str = "You can access your courses at https://bright.uvic.ca.";

pub const PASSWORD_RESET_TEXT: &str =
    "You can reset your Netlink password here (https://www.uvic.ca/netlink/recover/identifyIssue).";

pub const THANK_YOU_TEXT: &str = "I'm always happy to help! :)";

pub const FALLBACK_TEXT: &str =
    "Sorry, I don't know how to answer that. Please contact helpdesk@uvic.ca for further assistance.";
