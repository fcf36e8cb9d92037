//! Wraps teloxide::Bot and implements [`dbot_core::Bot`]. Renders mentions as HTML text links and
//! link cards as a message with an inline URL keyboard.

use async_trait::async_trait;
use dbot_core::{
    escape_markup, Bot as CoreBot, Chat, DbotError, HandlerError, LinkButton, Mention, Result,
};
use teloxide::payloads::SendMessageSetters;
use teloxide::prelude::*;
use teloxide::types::{ChatId, InlineKeyboardButton, InlineKeyboardMarkup, ParseMode};

/// Thin wrapper around teloxide::Bot that implements dbot-core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

/// Telegram HTML for `prefix` + inline mention + `suffix`. `mention.name` must already be escaped.
pub fn mention_html(prefix: &str, mention: &Mention, suffix: &str) -> String {
    format!(
        "{}<a href=\"tg://user?id={}\">{}</a>{}",
        escape_markup(prefix),
        mention.user_id,
        mention.name,
        escape_markup(suffix)
    )
}

/// One URL button per row, in the given order.
pub fn link_keyboard(links: &[LinkButton]) -> Result<InlineKeyboardMarkup> {
    let rows = links
        .iter()
        .map(|link| -> Result<Vec<InlineKeyboardButton>> {
            let url = reqwest::Url::parse(&link.url)
                .map_err(|_| HandlerError::InvalidLink(link.url.clone()))?;
            Ok(vec![InlineKeyboardButton::url(link.label.clone(), url)])
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(InlineKeyboardMarkup::new(rows))
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(|e| DbotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn send_mention(
        &self,
        chat: &Chat,
        prefix: &str,
        mention: &Mention,
        suffix: &str,
    ) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), mention_html(prefix, mention, suffix))
            .parse_mode(ParseMode::Html)
            .await
            .map_err(|e| DbotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn send_link_card(&self, chat: &Chat, title: &str, links: &[LinkButton]) -> Result<()> {
        let keyboard = link_keyboard(links)?;
        self.bot
            .send_message(ChatId(chat.id), title.to_string())
            .reply_markup(keyboard)
            .await
            .map_err(|e| DbotError::Bot(e.to_string()))?;
        Ok(())
    }
}
