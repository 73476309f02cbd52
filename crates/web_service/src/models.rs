//! DTO layer between the receptionist types and the JSON API.

use chrono::{DateTime, Utc};
use hotel_core::{Message, Role};
use reception::{EngineReply, ReplyKind};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct SessionCreatedResponse {
    pub session_id: Uuid,
    pub greeting: String,
}

#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ReplyResponse {
    pub action: ReplyKind,
    pub message: String,
}

impl From<EngineReply> for ReplyResponse {
    fn from(reply: EngineReply) -> Self {
        Self {
            action: reply.kind,
            message: reply.message,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageDto {
    pub role: Role,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl From<&Message> for MessageDto {
    fn from(message: &Message) -> Self {
        Self {
            role: message.role,
            text: message.text.clone(),
            timestamp: message.timestamp,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub session_id: Uuid,
    pub messages: Vec<MessageDto>,
}

/// Optional price band filter for the rooms listing.
#[derive(Debug, Deserialize)]
pub struct RoomsQuery {
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}
