//! Bot abstraction for delivering replies.
//!
//! [`Bot`] is transport-agnostic; dbot-telegram's `TelegramBotAdapter` implements it via teloxide.

use crate::error::Result;
use crate::types::{Chat, LinkButton, Mention};
use async_trait::async_trait;

/// Abstraction for sending replies. Implementations map to a transport (e.g. Telegram) and own the markup syntax.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a plain text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;

    /// Sends `prefix`, an inline mention of `mention`, then `suffix` as one message.
    /// `mention.name` is already markup-escaped; `prefix` and `suffix` are plain text.
    async fn send_mention(
        &self,
        chat: &Chat,
        prefix: &str,
        mention: &Mention,
        suffix: &str,
    ) -> Result<()>;

    /// Sends a card with a title and one clickable link per button.
    async fn send_link_card(&self, chat: &Chat, title: &str, links: &[LinkButton]) -> Result<()>;
}
