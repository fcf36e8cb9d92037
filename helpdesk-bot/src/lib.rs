//! # helpdesk_bot
//!
//! Assembly for the helpdesk bot: builds the handler chain (logging + scripted replies), wires it to
//! the Telegram runner, and offers an offline [`ask`] for trying the router from the command line.

pub mod cli;

use std::sync::Arc;

use anyhow::Result;
use dbot_core::{init_tracing, Bot};
use dbot_telegram::{build_bot, run_repl, TelegramBotAdapter, TelegramConfig};
use handler_chain::HandlerChain;
use handlers::LoggingHandler;
use helpdesk_reply::{IncomingMessage, MessageRouter, ReplyAction, ScriptedReplyHandler, Sender};
use tracing::info;

pub use cli::{Cli, Commands};

/// Chain used in production: logging first (so its `after` sees the final reply), then the scripted responder.
pub fn build_handler_chain(
    bot: Arc<dyn Bot>,
    bot_username: Arc<tokio::sync::RwLock<Option<String>>>,
) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(ScriptedReplyHandler::new(
            MessageRouter::new(),
            bot,
            bot_username,
        )))
}

/// Initializes logging and runs the Telegram REPL until shutdown.
pub async fn run_bot(config: TelegramConfig) -> Result<()> {
    init_tracing(&config.log_file)?;
    info!(log_file = %config.log_file, "Helpdesk bot starting");

    let bot = build_bot(&config)?;
    let bot_username = Arc::new(tokio::sync::RwLock::new(None));
    let adapter: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(bot.clone()));
    let chain = build_handler_chain(adapter, bot_username.clone());

    run_repl(bot, chain, bot_username).await
}

/// Routes `text` as if sent by `name`, stripping a leading `@bot_username`.
pub fn ask(text: &str, name: &str, bot_username: Option<&str>) -> ReplyAction {
    let mut incoming = IncomingMessage::new(
        Sender {
            id: 0,
            display_name: name.to_string(),
        },
        text,
    );
    if let Some(username) = bot_username.filter(|u| !u.is_empty()) {
        incoming = incoming.with_recipient_mention(format!("@{}", username));
    }
    MessageRouter::new().route(&incoming)
}
