//! Router for the OAuth redirect callback

use std::sync::{Arc, RwLock};

use axum::{Router, extract::Query, extract::State, http::StatusCode};

use super::public::CallbackQuery;
use crate::api::state::AppState;
use crate::auth::Credential;
use crate::google::oauth;

type SharedState = Arc<RwLock<AppState>>;

/// Completes the authorization-code exchange and stores the resulting
/// credential for the sender named in `state`.
async fn oauth_callback(
    State(shared): State<SharedState>,
    Query(params): Query<CallbackQuery>,
) -> (StatusCode, String) {
    let Some(code) = params.code else {
        return (
            StatusCode::BAD_REQUEST,
            "No authorization code provided.".to_string(),
        );
    };
    let Some(sender_id) = params.state else {
        return (
            StatusCode::BAD_REQUEST,
            "No state parameter provided.".to_string(),
        );
    };

    let (config, http) = {
        let state = shared.read().unwrap();
        (state.config.clone(), state.http.clone())
    };

    match oauth::exchange_code_for_token(&http, &config, &code).await {
        Ok(token) => {
            let credential = Credential::from_token_response(token);
            shared.write().unwrap().store.set(&sender_id, credential);
            tracing::info!("Stored calendar credential for sender {}", sender_id);
            (
                StatusCode::OK,
                "Calendar authorization successful! You can return to the chat and continue."
                    .to_string(),
            )
        }
        Err(err) => {
            tracing::error!("Authorization code exchange failed: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Calendar authorization failed. Please try again.".to_string(),
            )
        }
    }
}

/// Create the OAuth callback router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", axum::routing::get(oauth_callback))
}
