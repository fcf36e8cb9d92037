//! Recording implementation of [`dbot_core::Bot`] for handler tests.
//!
//! Every delivery is sent as a [`Sent`] record on a channel so tests can assert on what would have
//! reached the chat without a transport.

use async_trait::async_trait;
use chrono::Utc;
use dbot_core::{Bot, Chat, DbotError, LinkButton, Mention, Message, Result, User};
use std::sync::Arc;
use tokio::sync::mpsc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sent {
    Text {
        chat_id: i64,
        text: String,
    },
    Mention {
        chat_id: i64,
        prefix: String,
        mention: Mention,
        suffix: String,
    },
    LinkCard {
        chat_id: i64,
        title: String,
        links: Vec<LinkButton>,
    },
}

pub struct RecordingBot {
    tx: mpsc::UnboundedSender<Sent>,
    fail: bool,
}

impl RecordingBot {
    pub fn with_receiver() -> (Arc<Self>, mpsc::UnboundedReceiver<Sent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Arc::new(Self { tx, fail: false }), rx)
    }

    /// A bot whose every send fails with [`DbotError::Bot`].
    pub fn failing() -> Arc<Self> {
        let (tx, _rx) = mpsc::unbounded_channel();
        Arc::new(Self { tx, fail: true })
    }

    fn record(&self, sent: Sent) -> Result<()> {
        if self.fail {
            return Err(DbotError::Bot("network unreachable".to_string()));
        }
        let _ = self.tx.send(sent);
        Ok(())
    }
}

#[async_trait]
impl Bot for RecordingBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.record(Sent::Text {
            chat_id: chat.id,
            text: text.to_string(),
        })
    }

    async fn send_mention(
        &self,
        chat: &Chat,
        prefix: &str,
        mention: &Mention,
        suffix: &str,
    ) -> Result<()> {
        self.record(Sent::Mention {
            chat_id: chat.id,
            prefix: prefix.to_string(),
            mention: mention.clone(),
            suffix: suffix.to_string(),
        })
    }

    async fn send_link_card(&self, chat: &Chat, title: &str, links: &[LinkButton]) -> Result<()> {
        self.record(Sent::LinkCard {
            chat_id: chat.id,
            title: title.to_string(),
            links: links.to_vec(),
        })
    }
}

pub fn make_message(content: &str) -> Message {
    Message {
        id: "msg_1".to_string(),
        user: User {
            id: 456,
            username: Some("sam_s".to_string()),
            first_name: Some("Sam".to_string()),
            last_name: Some("<Student>".to_string()),
        },
        chat: Chat {
            id: 123,
            chat_type: "group".to_string(),
        },
        content: content.to_string(),
        message_type: "text".to_string(),
        created_at: Utc::now(),
    }
}
