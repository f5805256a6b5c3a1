//! Support chat service
//!
//! Thin wrapper over the backend's GigaChat proxy. The AI service is
//! external; nothing here is ever served offline.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::api::{ApiClient, Endpoint};
use crate::utils::errors::{DomovoyError, Result};
use crate::utils::helpers::require_field;

/// One turn of the conversation history sent back to the proxy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    /// "user" or "assistant"
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone)]
pub struct SupportChatService {
    client: ApiClient,
}

impl SupportChatService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Send a message with the accumulated history, returning the assistant's
    /// reply text
    pub async fn send(&self, message: &str, history: &[ChatTurn]) -> Result<String> {
        require_field(message, "message")?;

        let body = json!({
            "message": message,
            "conversation_history": history,
        });
        let value = self.client.execute(Endpoint::SupportChat, Some(body)).await?;

        super::ensure_success(&value)?;
        value
            .get("response")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| DomovoyError::InvalidResponse("missing field `response`".into()))
    }

    /// Whether the AI proxy reports itself connected
    pub async fn status(&self) -> Result<bool> {
        let value = self.client.execute(Endpoint::SupportStatus, None).await?;
        Ok(value.get("status").and_then(Value::as_str) == Some("connected"))
    }
}
