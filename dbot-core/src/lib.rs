//! # dbot-core
//!
//! Core types and traits for the bot: [`Bot`], [`Handler`], message and user types,
//! markup escaping, and tracing initialization. Transport-agnostic; used by dbot-telegram,
//! handler-chain, and the reply handlers.

pub mod bot;
pub mod error;
pub mod logger;
pub mod markup;
pub mod types;

pub use bot::Bot;
pub use error::{DbotError, HandlerError, Result};
pub use logger::init_tracing;
pub use markup::escape_markup;
pub use types::{
    Chat, Handler, HandlerResponse, LinkButton, Mention, Message, ToCoreMessage, ToCoreUser,
    User,
};
