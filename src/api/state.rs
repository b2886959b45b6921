use std::time::Duration;

use crate::auth::CredentialStore;
use crate::core::AppConfig;

pub struct AppState {
    pub store: CredentialStore,
    pub config: AppConfig,
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        // One client for all outbound provider calls, with a bounded
        // per-request timeout so a stuck provider can't hang a reply.
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            store: CredentialStore::new(),
            config,
            http,
        }
    }
}
