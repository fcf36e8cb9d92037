//! Logs each inbound message in `before()` and the chain outcome in `after()`; never stops the chain.

use async_trait::async_trait;
use dbot_core::{Handler, HandlerResponse, Message, Result};
use tracing::{debug, info, instrument};

/// Logging handler. Put it first in the chain so its `after()` runs last and sees the final response.
pub struct LoggingHandler;

#[async_trait]
impl Handler for LoggingHandler {
    #[instrument(skip(self, message))]
    async fn before(&self, message: &Message) -> Result<bool> {
        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            username = %message.user.username.as_deref().unwrap_or("unknown"),
            message_type = %message.message_type,
            message_content = %message.content,
            "Received message"
        );
        Ok(true)
    }

    #[instrument(skip(self, message, response))]
    async fn after(&self, message: &Message, response: &HandlerResponse) -> Result<()> {
        match response {
            HandlerResponse::Reply(text) => info!(
                user_id = message.user.id,
                chat_id = message.chat.id,
                reply_len = text.len(),
                "Replied to message"
            ),
            other => debug!(
                message_id = %message.id,
                response = ?other,
                "Processed message without reply"
            ),
        }
        Ok(())
    }
}
