//! Chain handler that answers every message with the router's reply and delivers it through [`Bot`].

use std::sync::Arc;

use async_trait::async_trait;
use dbot_core::{Bot, Handler, HandlerResponse, LinkButton, Mention, Message, Result};
use tracing::{error, info, instrument};

use crate::action::ReplyAction;
use crate::content::{MENTION_PREFIX, MENTION_SUFFIX};
use crate::router::{IncomingMessage, MessageRouter, Sender};

/// Builds the router input from a core message. `bot_username` (without `@`) becomes the
/// recipient mention; non-text messages have no raw text.
pub fn incoming_from_core(message: &Message, bot_username: Option<&str>) -> IncomingMessage {
    IncomingMessage {
        sender: Sender {
            id: message.user.id,
            display_name: message.user.display_name(),
        },
        raw_text: message.text().map(str::to_string),
        recipient_mention: bot_username
            .filter(|u| !u.is_empty())
            .map(|u| format!("@{}", u)),
    }
}

/// Scripted helpdesk handler. Always ends the handle phase with `Reply(plain_text)`.
#[derive(Clone)]
pub struct ScriptedReplyHandler {
    router: MessageRouter,
    bot: Arc<dyn Bot>,
    bot_username: Arc<tokio::sync::RwLock<Option<String>>>,
}

impl ScriptedReplyHandler {
    /// `bot_username` is shared with the runner, which fills it from `get_me` at startup.
    pub fn new(
        router: MessageRouter,
        bot: Arc<dyn Bot>,
        bot_username: Arc<tokio::sync::RwLock<Option<String>>>,
    ) -> Self {
        Self {
            router,
            bot,
            bot_username,
        }
    }

    async fn deliver(&self, message: &Message, action: &ReplyAction) -> Result<()> {
        let chat = &message.chat;
        match action {
            ReplyAction::Mention {
                user_id,
                display_name,
            } => {
                let mention = Mention {
                    user_id: *user_id,
                    name: display_name.clone(),
                };
                self.bot
                    .send_mention(chat, MENTION_PREFIX, &mention, MENTION_SUFFIX)
                    .await
            }
            ReplyAction::WifiHelp { prompt, choices } => {
                let links: Vec<LinkButton> = choices.iter().map(|c| c.to_button()).collect();
                self.bot.send_link_card(chat, prompt, &links).await
            }
            other => self.bot.send_message(chat, &other.text()).await,
        }
    }
}

#[async_trait]
impl Handler for ScriptedReplyHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let bot_username = self.bot_username.read().await.clone();
        let incoming = incoming_from_core(message, bot_username.as_deref());
        let action = self.router.route(&incoming);
        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            reply_kind = %action.kind(),
            "step: scripted reply selected"
        );

        if let Err(e) = self.deliver(message, &action).await {
            error!(
                error = %e,
                user_id = message.user.id,
                reply_kind = %action.kind(),
                "Failed to send scripted reply"
            );
            return Err(e);
        }

        Ok(HandlerResponse::Reply(action.text()))
    }
}
