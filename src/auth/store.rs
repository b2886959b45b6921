//! In-memory credential storage keyed by sender identity.
//!
//! Tokens live only as long as the process; a restart means
//! reauthorization. The store itself is plain data guarded by the
//! server's shared state lock, so callers must not hold a reference
//! across an await point.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};

use crate::google::oauth::TokenResponse;

/// Delegated-access token bundle for one sender.
#[derive(Clone, Debug)]
pub struct Credential {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl Credential {
    pub fn from_token_response(token: TokenResponse) -> Self {
        let expires_at = token
            .expires_in
            .map(|secs| Utc::now() + Duration::seconds(secs));
        Self {
            access_token: token.access_token,
            refresh_token: token.refresh_token,
            expires_at,
        }
    }

    /// True when the provider gave us neither an access token nor a way
    /// to obtain one.
    pub fn is_unusable(&self) -> bool {
        self.access_token.is_empty() && self.refresh_token.is_none()
    }

    /// True when the access token is past its expiry. A credential with
    /// no recorded expiry is assumed live until the provider says
    /// otherwise.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }
}

#[derive(Default)]
pub struct CredentialStore {
    slots: HashMap<String, Credential>,
}

impl CredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, sender_id: &str) -> Option<&Credential> {
        self.slots.get(sender_id)
    }

    /// Stores a credential for the sender, replacing any previous one.
    pub fn set(&mut self, sender_id: &str, credential: Credential) {
        self.slots.insert(sender_id.to_string(), credential);
    }

    pub fn clear(&mut self, sender_id: &str) {
        self.slots.remove(sender_id);
    }
}
