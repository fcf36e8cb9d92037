//! MessageRouter: one incoming message in, exactly one reply action out.

use tracing::debug;

use crate::action::{ReplyAction, ReplyKind};
use crate::mention::strip_recipient_mention;
use crate::normalize::normalize;
use crate::phrases::PhraseTable;

/// Who sent the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sender {
    pub id: i64,
    pub display_name: String,
}

/// Input to [`MessageRouter::route`], built by the host runtime per turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingMessage {
    pub sender: Sender,
    /// Message text; `None` when the message carried no text.
    pub raw_text: Option<String>,
    /// Token the host uses to address the bot (e.g. `@helpdesk_bot`), stripped when leading.
    pub recipient_mention: Option<String>,
}

impl IncomingMessage {
    pub fn new(sender: Sender, raw_text: impl Into<String>) -> Self {
        Self {
            sender,
            raw_text: Some(raw_text.into()),
            recipient_mention: None,
        }
    }

    pub fn with_recipient_mention(mut self, mention: impl Into<String>) -> Self {
        self.recipient_mention = Some(mention.into());
        self
    }
}

/// Stateless router over an immutable [`PhraseTable`]. Cheap to clone and safe to share.
#[derive(Debug, Clone, Default)]
pub struct MessageRouter {
    table: PhraseTable,
}

impl MessageRouter {
    /// Router over [`PhraseTable::standard`].
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(table: PhraseTable) -> Self {
        Self { table }
    }

    /// Strips the self-mention, normalizes, and looks up the kind. Absent text is treated as empty.
    pub fn classify(&self, msg: &IncomingMessage) -> ReplyKind {
        let raw = msg.raw_text.as_deref().unwrap_or("");
        let text = match msg.recipient_mention.as_deref() {
            Some(mention) => strip_recipient_mention(raw, mention),
            None => raw,
        };
        let normalized = normalize(text);
        let kind = self.table.lookup(&normalized).unwrap_or(ReplyKind::Fallback);
        debug!(normalized = %normalized, reply_kind = %kind, "classified message");
        kind
    }

    /// Produces the reply for `msg`. Total and side-effect free.
    pub fn route(&self, msg: &IncomingMessage) -> ReplyAction {
        ReplyAction::build(self.classify(msg), &msg.sender)
    }
}
