//! REPL runner: converts each teloxide message to a core [`dbot_core::Message`] and hands it to the
//! [`HandlerChain`] on its own task.

use anyhow::{Context, Result};
use dbot_core::ToCoreMessage;
use handler_chain::HandlerChain;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{debug, error, info, instrument, warn};

use super::adapters::TelegramMessageWrapper;
use super::config::TelegramConfig;

/// Builds a teloxide Bot from config, pointing it at a custom API URL when one is set.
pub fn build_bot(config: &TelegramConfig) -> Result<teloxide::Bot> {
    let bot = teloxide::Bot::new(config.bot_token.clone());
    match config.telegram_api_url {
        Some(ref url_str) => {
            let url = reqwest::Url::parse(url_str)
                .with_context(|| format!("invalid Telegram API URL: {}", url_str))?;
            info!(api_url = %url, "Using custom Telegram API URL");
            Ok(bot.set_api_url(url))
        }
        None => Ok(bot),
    }
}

/// Starts the REPL with the given bot and chain.
///
/// Calls `get_me()` first and stores the bot username in `bot_username` so handlers can strip the
/// bot's own @mention. Each message is processed on a spawned task; chain errors are logged.
#[instrument(skip(bot, handler_chain, bot_username))]
pub async fn run_repl(
    bot: teloxide::Bot,
    handler_chain: HandlerChain,
    bot_username: Arc<tokio::sync::RwLock<Option<String>>>,
) -> Result<()> {
    match bot.get_me().await {
        Ok(me) => {
            if let Some(username) = &me.user.username {
                *bot_username.write().await = Some(username.clone());
                info!(username = %username, "Bot username set before repl");
            }
        }
        Err(e) => warn!(error = %e, "get_me failed; self-mentions will not be stripped"),
    }

    let chain = handler_chain;
    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let chain = chain.clone();

        async move {
            let core_msg = TelegramMessageWrapper(&msg).to_core();
            debug!(
                user_id = core_msg.user.id,
                chat_id = core_msg.chat.id,
                message_type = %core_msg.message_type,
                "Dispatching update to handler chain"
            );

            tokio::spawn(async move {
                if let Err(e) = chain.handle(&core_msg).await {
                    error!(error = %e, user_id = core_msg.user.id, "Handler chain failed");
                }
            });

            Ok(())
        }
    })
    .await;

    Ok(())
}
