//! Per-message session orchestration: credential presence check, intent
//! dispatch, and error-to-reply mapping. Every inbound message yields
//! exactly one reply string and no error escapes this module.

use std::sync::{Arc, RwLock};

use crate::api::state::AppState;
use crate::calendar;
use crate::chat::intent::{self, Intent, TRIGGER_PHRASE};
use crate::core::{AppConfig, SessionError};
use crate::google::oauth;

type SharedState = Arc<RwLock<AppState>>;

const DETAILS_PROMPT: &str = "Sure! What's the event title, date (YYYY-MM-DD) and time (HH:MM)? \
     For example: Meeting 2025-12-25 10:00";

const RETRY_LATER: &str =
    "Sorry, I couldn't schedule the event. Please check the format or try again later.";

const NOT_UNDERSTOOD: &str =
    "I didn't understand. To schedule an event, say 'schedule event'.";

/// Handles one inbound message and produces the reply text.
pub async fn respond(state: &SharedState, sender_id: &str, message: &str) -> String {
    // Clone what the network calls need out of the lock; the guard must
    // not be held across an await.
    let (config, http, credential) = {
        let state = state.read().unwrap();
        (
            state.config.clone(),
            state.http.clone(),
            state.store.get(sender_id).cloned(),
        )
    };

    let Some(credential) = credential else {
        tracing::info!("No credential for sender {}; sending consent URL", sender_id);
        return consent_reply(&config, sender_id);
    };

    match intent::classify(message) {
        Intent::StartScheduling => DETAILS_PROMPT.to_string(),
        Intent::Unrecognized => NOT_UNDERSTOOD.to_string(),
        Intent::EventDetails(request) => {
            match calendar::create_event(&http, &config, &credential, &request).await {
                Ok(outcome) => {
                    if let Some(fresh) = outcome.renewed {
                        state.write().unwrap().store.set(sender_id, fresh);
                    }
                    tracing::info!(
                        "Scheduled event {} for sender {}",
                        outcome.event.event_id,
                        sender_id
                    );
                    format!(
                        "Event \"{}\" on {} at {} has been scheduled! {}",
                        request.title,
                        request.date.format("%Y-%m-%d"),
                        request.start_time.format("%H:%M"),
                        outcome.event.view_url
                    )
                }
                Err(SessionError::CredentialExpired) => {
                    // Self-heal: drop the dead credential so the next
                    // message restarts authorization cleanly.
                    state.write().unwrap().store.clear(sender_id);
                    format!(
                        "Your calendar access has expired and could not be renewed. \
                         Please authorize again by visiting this link:\n{}\n\
                         Then say '{}' to continue.",
                        oauth::consent_url(&config, sender_id),
                        TRIGGER_PHRASE
                    )
                }
                Err(SessionError::NotAuthenticated) => consent_reply(&config, sender_id),
                Err(err) => {
                    tracing::error!("Failed to schedule event for {}: {}", sender_id, err);
                    RETRY_LATER.to_string()
                }
            }
        }
    }
}

fn consent_reply(config: &AppConfig, sender_id: &str) -> String {
    format!(
        "I need authorization to access your calendar. Please visit this link once \
         to authorize:\n{}\nAfter authorizing, say '{}'.",
        oauth::consent_url(config, sender_id),
        TRIGGER_PHRASE
    )
}
