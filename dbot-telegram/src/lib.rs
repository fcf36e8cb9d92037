//! # dbot-telegram
//!
//! Telegram bot framework layer: adapters, [`dbot_core::Bot`] implementation (text, mentions,
//! link cards), minimal config, REPL runner. Handles only Telegram connectivity and handler-chain
//! execution; reply selection lives in the handlers.

mod adapters;
mod bot_adapter;
mod config;
mod runner;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::{link_keyboard, mention_html, TelegramBotAdapter};
pub use config::{TelegramConfig, DEFAULT_LOG_FILE};
pub use runner::{build_bot, run_repl};
