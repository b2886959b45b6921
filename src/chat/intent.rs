//! Classifies an inbound message into one of the fixed conversational
//! intents. The details grammar is `<title> <YYYY-MM-DD> <HH:MM>`,
//! matched against the whole message: the date and time are the last
//! two space-delimited fields and everything before them is the title.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveTime};
use regex::Regex;

/// Phrase that starts the scheduling exchange, matched
/// case-insensitively anywhere in the message.
pub const TRIGGER_PHRASE: &str = "schedule event";

static DATE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());
static TIME_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{2}:\d{2}$").unwrap());

/// Structured fields for one event, extracted from the message text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRequest {
    pub title: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    StartScheduling,
    EventDetails(EventRequest),
    Unrecognized,
}

/// Classifies a message. Pure: the same text always yields the same
/// intent and fields.
pub fn classify(text: &str) -> Intent {
    if text.to_lowercase().contains(TRIGGER_PHRASE) {
        return Intent::StartScheduling;
    }
    match parse_event_details(text) {
        Some(request) => Intent::EventDetails(request),
        None => Intent::Unrecognized,
    }
}

/// Whole-string grammar match. Either the full triple parses or the
/// message falls through; there is no partial extraction.
fn parse_event_details(text: &str) -> Option<EventRequest> {
    let mut fields = text.rsplitn(3, ' ');
    let time_token = fields.next()?;
    let date_token = fields.next()?;
    let title = fields.next()?.trim();

    if title.is_empty() || !DATE_TOKEN.is_match(date_token) || !TIME_TOKEN.is_match(time_token) {
        return None;
    }

    // Token shapes are right but the values may not name a real
    // instant (month 13, hour 25). chrono is the arbiter.
    let date = NaiveDate::parse_from_str(date_token, "%Y-%m-%d").ok()?;
    let start_time = NaiveTime::parse_from_str(time_token, "%H:%M").ok()?;

    Some(EventRequest {
        title: title.to_string(),
        date,
        start_time,
    })
}
