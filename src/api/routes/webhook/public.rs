//! Public types for the webhook API
use serde::{Deserialize, Serialize};

/// Inbound message forwarded by the relay
#[derive(Debug, Deserialize, Serialize)]
pub struct WebhookRequest {
    pub message: String,
    #[serde(rename = "senderId")]
    pub sender_id: String,
}

/// Reply for the relay to deliver back to the sender
#[derive(Debug, Serialize, Deserialize)]
pub struct WebhookReply {
    pub reply: String,
    #[serde(rename = "senderId")]
    pub sender_id: String,
}
