use std::sync::Arc;

use async_trait::async_trait;
use teloxide::{prelude::*, RequestError};

/// Whatever delivers replies back to a chat.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send_text(&self, chat_id: ChatId, text: String) -> Result<(), RequestError>;
}

/// The transport as the handler tree receives it from its dependencies.
pub type SharedTransport = Arc<dyn Transport>;

#[async_trait]
impl Transport for Bot {
    async fn send_text(&self, chat_id: ChatId, text: String) -> Result<(), RequestError> {
        self.send_message(chat_id, text).await?;
        Ok(())
    }
}
