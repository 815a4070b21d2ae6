//! Chats worker - reads come from the document store, sends go through the
//! gateway.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{Chat, ChatMessage, Record, WorkerError};
use crate::gateway::{translate_store, ApiRequest, GatewayClient};
use crate::ports::{ChatsApi, Direction, DocumentStore, Query};
use crate::status::CallContext;
use crate::workers::{decode_docs, invalid};

pub struct ChatsWorker {
    store: Arc<dyn DocumentStore>,
    gateway: GatewayClient,
}

impl ChatsWorker {
    pub fn new(store: Arc<dyn DocumentStore>, gateway: GatewayClient) -> Self {
        Self { store, gateway }
    }
}

#[async_trait]
impl ChatsApi for ChatsWorker {
    async fn chats_for_user(&self, user_id: &str) -> Result<Vec<Chat>, WorkerError> {
        const CTX: CallContext = CallContext::new("chats", "list");
        let user_id = user_id.trim();
        if user_id.is_empty() {
            return Err(invalid(self.gateway.reporter(), &CTX, &["user_id"]));
        }

        let path = format!("users/{user_id}/chats");
        let result = match self.store.list(&path, Query::new()).await {
            Ok(docs) => decode_docs(docs),
            Err(e) => Err(translate_store(e)),
        };
        self.gateway.reporter().observe(&CTX, &result);
        result
    }

    async fn messages(&self, chat_id: &str, limit: u32) -> Result<Vec<ChatMessage>, WorkerError> {
        const CTX: CallContext = CallContext::new("chats", "messages");
        let chat_id = chat_id.trim();
        let mut missing = Vec::new();
        if chat_id.is_empty() {
            missing.push("chat_id");
        }
        if limit == 0 {
            missing.push("limit");
        }
        if !missing.is_empty() {
            return Err(invalid(self.gateway.reporter(), &CTX, &missing));
        }

        let path = format!("chats/{chat_id}/messages");
        let query = Query::new()
            .order_by("sent_at", Direction::Descending)
            .limit(limit);
        let result = match self.store.list(&path, query).await {
            Ok(docs) => decode_docs(docs),
            Err(e) => Err(translate_store(e)),
        };
        self.gateway.reporter().observe(&CTX, &result);
        result
    }

    async fn send_message(
        &self,
        chat_id: &str,
        message: &ChatMessage,
    ) -> Result<ChatMessage, WorkerError> {
        const CTX: CallContext = CallContext::new("chats", "send");
        let chat_id = chat_id.trim();
        let mut missing = Vec::new();
        if chat_id.is_empty() {
            missing.push("chat_id");
        }
        if message.body.trim().is_empty() {
            missing.push("body");
        }
        if !missing.is_empty() {
            return Err(self.gateway.invalid(&CTX, &missing));
        }

        let request = ApiRequest::post(format!("/chats/{chat_id}/messages")).json(message)?;
        self.gateway
            .execute(&CTX, request, ChatMessage::from_slice)
            .await
    }
}
