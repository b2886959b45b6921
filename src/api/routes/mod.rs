//! API routes module

pub mod oauth;
pub mod webhook;

use std::sync::{Arc, RwLock};

use crate::api::state::AppState;
use axum::Router;

type SharedState = Arc<RwLock<AppState>>;

/// Create the combined router. Paths match the contract the message
/// relay and the OAuth provider are configured with.
pub fn router() -> Router<SharedState> {
    Router::new()
        // Inbound messages from the relay
        .nest("/webhook", webhook::router())
        // Redirect target for the provider consent page
        .nest("/oauth2callback", oauth::router())
}
