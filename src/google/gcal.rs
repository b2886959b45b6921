//! Google Calendar REST client for inserting events.

use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Start or end boundary of an event. The provider resolves `date_time`
/// in `time_zone`, so no local offset math is needed.
#[derive(Debug, Serialize)]
pub struct EventDateTime {
    #[serde(rename = "dateTime")]
    pub date_time: String,
    #[serde(rename = "timeZone")]
    pub time_zone: String,
}

#[derive(Debug, Serialize)]
pub struct ReminderOverride {
    pub method: String,
    pub minutes: i64,
}

#[derive(Debug, Serialize)]
pub struct EventReminders {
    #[serde(rename = "useDefault")]
    pub use_default: bool,
    pub overrides: Vec<ReminderOverride>,
}

#[derive(Debug, Serialize)]
pub struct EventPayload {
    pub summary: String,
    pub description: String,
    pub start: EventDateTime,
    pub end: EventDateTime,
    pub reminders: EventReminders,
}

#[derive(Debug, Deserialize)]
pub struct InsertedEvent {
    pub id: String,
    #[serde(rename = "htmlLink")]
    pub html_link: String,
}

/// Insert failure split by whether the access token was rejected. The
/// scheduler maps `Unauthorized` into refresh-or-expire handling.
#[derive(Debug)]
pub enum InsertError {
    Unauthorized,
    Other(String),
}

/// Creates an event on the sender's primary calendar.
pub async fn insert_event(
    http: &Client,
    api_base_url: &str,
    access_token: &str,
    event: &EventPayload,
) -> Result<InsertedEvent, InsertError> {
    let url = format!("{}/calendars/primary/events", api_base_url);

    let resp = http
        .post(&url)
        .bearer_auth(access_token)
        .json(event)
        .send()
        .await
        .map_err(|e| InsertError::Other(e.to_string()))?;

    let status = resp.status();
    if status == http::StatusCode::UNAUTHORIZED {
        return Err(InsertError::Unauthorized);
    }
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        tracing::error!("Event insert failed with {}: {}", status, body);
        return Err(InsertError::Other(format!(
            "calendar API returned {status}"
        )));
    }

    let inserted: InsertedEvent = resp
        .json()
        .await
        .map_err(|e| InsertError::Other(e.to_string()))?;
    tracing::debug!("Event created: {}", inserted.html_link);
    Ok(inserted)
}
