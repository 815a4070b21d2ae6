//! Chats protocol.

use async_trait::async_trait;

use crate::domain::{Chat, ChatMessage, WorkerError};

/// Port for chat operations.
#[async_trait]
pub trait ChatsApi: Send + Sync {
    /// Lists chats the user participates in.
    async fn chats_for_user(&self, user_id: &str) -> Result<Vec<Chat>, WorkerError>;

    /// Lists the most recent messages in a chat, newest first.
    async fn messages(&self, chat_id: &str, limit: u32) -> Result<Vec<ChatMessage>, WorkerError>;

    /// Sends a message and returns the stored record.
    async fn send_message(
        &self,
        chat_id: &str,
        message: &ChatMessage,
    ) -> Result<ChatMessage, WorkerError>;
}
