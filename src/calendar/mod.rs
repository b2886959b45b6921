//! Scheduling service: turns an [`EventRequest`] plus a credential into
//! a created calendar event, renewing the access token explicitly when
//! needed and mapping provider failures to session-level outcomes.

use chrono::{Duration, Utc};
use reqwest::Client;

use crate::auth::Credential;
use crate::chat::intent::EventRequest;
use crate::core::{AppConfig, SessionError};
use crate::google::gcal::{
    self, EventDateTime, EventPayload, EventReminders, InsertError, ReminderOverride,
};
use crate::google::oauth;

/// Every event gets a fixed one-hour window.
const EVENT_DURATION_MINS: i64 = 60;
const EMAIL_REMINDER_MINS: i64 = 24 * 60;
const POPUP_REMINDER_MINS: i64 = 10;

#[derive(Debug, Clone)]
pub struct ScheduledEvent {
    pub event_id: String,
    pub view_url: String,
}

/// Result of a successful creation. When the access token had to be
/// renewed on the way, the fresh credential rides along so the caller
/// can store it and skip the refresh next time.
#[derive(Debug)]
pub struct ScheduleOutcome {
    pub event: ScheduledEvent,
    pub renewed: Option<Credential>,
}

/// Creates a one-hour event on the sender's primary calendar.
///
/// Renewal is an explicit step: an expired access token is refreshed
/// here (and logged) when a refresh token exists, and fails with
/// [`SessionError::CredentialExpired`] when it does not. The provider
/// rejecting the token mid-call gets one refresh-and-retry before the
/// same expiry verdict.
pub async fn create_event(
    http: &Client,
    config: &AppConfig,
    credential: &Credential,
    request: &EventRequest,
) -> Result<ScheduleOutcome, SessionError> {
    if credential.is_unusable() {
        return Err(SessionError::NotAuthenticated);
    }

    let mut renewed: Option<Credential> = None;
    let mut access_token = credential.access_token.clone();
    if access_token.is_empty() || credential.is_expired(Utc::now()) {
        let fresh = renew(http, config, credential).await?;
        access_token = fresh.access_token.clone();
        renewed = Some(fresh);
    }

    let payload = build_payload(config, request);

    match gcal::insert_event(http, &config.calendar_api_url, &access_token, &payload).await {
        Ok(inserted) => Ok(ScheduleOutcome {
            event: ScheduledEvent {
                event_id: inserted.id,
                view_url: inserted.html_link,
            },
            renewed,
        }),
        Err(InsertError::Unauthorized) if renewed.is_none() => {
            // The token looked live but the provider disagreed. Renew
            // once and retry before giving up.
            let fresh = renew(http, config, credential).await?;
            let inserted =
                gcal::insert_event(http, &config.calendar_api_url, &fresh.access_token, &payload)
                    .await
                    .map_err(|e| match e {
                        InsertError::Unauthorized => SessionError::CredentialExpired,
                        InsertError::Other(msg) => SessionError::Provider(msg),
                    })?;
            Ok(ScheduleOutcome {
                event: ScheduledEvent {
                    event_id: inserted.id,
                    view_url: inserted.html_link,
                },
                renewed: Some(fresh),
            })
        }
        Err(InsertError::Unauthorized) => Err(SessionError::CredentialExpired),
        Err(InsertError::Other(msg)) => Err(SessionError::Provider(msg)),
    }
}

/// Explicit access token renewal. A credential without a refresh token
/// cannot be renewed, only reauthorized.
async fn renew(
    http: &Client,
    config: &AppConfig,
    credential: &Credential,
) -> Result<Credential, SessionError> {
    let Some(refresh_token) = credential.refresh_token.as_deref() else {
        tracing::info!("Access token expired with no refresh token; reauthorization required");
        return Err(SessionError::CredentialExpired);
    };

    tracing::info!("Renewing expired access token");
    let token = oauth::refresh_access_token(http, config, refresh_token).await?;
    let mut fresh = Credential::from_token_response(token);
    // Refresh responses omit the refresh token; the original grant
    // stays valid.
    if fresh.refresh_token.is_none() {
        fresh.refresh_token = credential.refresh_token.clone();
    }
    Ok(fresh)
}

fn build_payload(config: &AppConfig, request: &EventRequest) -> EventPayload {
    let start = request.date.and_time(request.start_time);
    let end = start + Duration::minutes(EVENT_DURATION_MINS);
    let fmt = "%Y-%m-%dT%H:%M:%S";

    EventPayload {
        summary: request.title.clone(),
        description: "Scheduled via chat bot".to_string(),
        start: EventDateTime {
            date_time: start.format(fmt).to_string(),
            time_zone: config.timezone.clone(),
        },
        end: EventDateTime {
            date_time: end.format(fmt).to_string(),
            time_zone: config.timezone.clone(),
        },
        reminders: EventReminders {
            use_default: false,
            overrides: vec![
                ReminderOverride {
                    method: "email".to_string(),
                    minutes: EMAIL_REMINDER_MINS,
                },
                ReminderOverride {
                    method: "popup".to_string(),
                    minutes: POPUP_REMINDER_MINS,
                },
            ],
        },
    }
}
