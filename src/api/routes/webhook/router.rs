//! Router for the webhook API

use std::sync::{Arc, RwLock};

use axum::{Json, Router, extract::State};

use super::public::{WebhookReply, WebhookRequest};
use crate::api::state::AppState;
use crate::chat::orchestrator;

type SharedState = Arc<RwLock<AppState>>;

/// Handle one forwarded chat message and produce the reply for the
/// relay to deliver. Always 200: session failures become reply text.
async fn webhook_handler(
    State(state): State<SharedState>,
    Json(payload): Json<WebhookRequest>,
) -> Json<WebhookReply> {
    tracing::info!(
        "Message received from {}: {}",
        payload.sender_id,
        payload.message
    );

    let reply = orchestrator::respond(&state, &payload.sender_id, &payload.message).await;

    Json(WebhookReply {
        reply,
        sender_id: payload.sender_id,
    })
}

/// Create the webhook router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", axum::routing::post(webhook_handler))
}
