//! # helpdesk-reply
//!
//! Scripted helpdesk responder. [`MessageRouter::route`] strips the bot's own @mention, normalizes
//! the text, looks it up in a [`PhraseTable`], and yields exactly one [`ReplyAction`]. Routing is a
//! pure function; [`ScriptedReplyHandler`] plugs it into a handler chain and delivers the reply
//! through a [`dbot_core::Bot`].

pub mod action;
pub mod content;
mod handler;
pub mod mention;
pub mod normalize;
pub mod phrases;
mod router;

pub use action::{ReplyAction, ReplyKind};
pub use content::LinkChoice;
pub use handler::{incoming_from_core, ScriptedReplyHandler};
pub use mention::{encode_display_name, strip_recipient_mention};
pub use normalize::normalize;
pub use phrases::{PhraseSet, PhraseTable, PhraseTableError};
pub use router::{IncomingMessage, MessageRouter, Sender};
