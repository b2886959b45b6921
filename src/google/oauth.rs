//! OAuth2 authorization-code flow against Google: consent URL
//! construction, code-for-token exchange, and explicit access token
//! refresh. Refresh is never done behind the caller's back; the
//! scheduling layer decides when to renew and observes the outcome.

use reqwest::Client;
use serde::Deserialize;

use crate::core::{AppConfig, SessionError};

const CALENDAR_SCOPE: &str = "https://www.googleapis.com/auth/calendar.events";

/// Token endpoint response for both code exchange and refresh. A
/// refresh response carries no `refresh_token`; the original one stays
/// valid.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expires_in: Option<i64>,
}

/// Builds the provider consent URL for one sender. Requests offline
/// access so a refresh token is issued, and carries the sender id in
/// `state` so the callback can key the stored credential.
pub fn consent_url(config: &AppConfig, sender_id: &str) -> String {
    format!(
        "{}?client_id={}&redirect_uri={}&response_type=code&scope={}&access_type=offline&prompt=consent&state={}",
        config.oauth_auth_url,
        urlencoding::encode(&config.client_id),
        urlencoding::encode(&config.redirect_uri),
        urlencoding::encode(CALENDAR_SCOPE),
        urlencoding::encode(sender_id)
    )
}

/// Exchanges an authorization code for a token bundle. A code is
/// single-use: replaying a consumed code fails here, there is no local
/// tracking.
pub async fn exchange_code_for_token(
    http: &Client,
    config: &AppConfig,
    code: &str,
) -> Result<TokenResponse, SessionError> {
    let params = [
        ("code", code),
        ("client_id", &config.client_id),
        ("client_secret", &config.client_secret),
        ("redirect_uri", &config.redirect_uri),
        ("grant_type", "authorization_code"),
    ];

    let resp = http
        .post(&config.oauth_token_url)
        .form(&params)
        .send()
        .await
        .map_err(|e| SessionError::AuthExchange(e.to_string()))?;

    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        tracing::warn!("Code exchange rejected with {}: {}", status, body);
        return Err(SessionError::AuthExchange(format!(
            "token endpoint returned {status}"
        )));
    }

    resp.json::<TokenResponse>()
        .await
        .map_err(|e| SessionError::AuthExchange(e.to_string()))
}

/// Obtains a fresh access token from a refresh token. Failure means the
/// grant was revoked or expired; callers map this to credential expiry.
pub async fn refresh_access_token(
    http: &Client,
    config: &AppConfig,
    refresh_token: &str,
) -> Result<TokenResponse, SessionError> {
    let params = [
        ("refresh_token", refresh_token),
        ("client_id", &config.client_id),
        ("client_secret", &config.client_secret),
        ("grant_type", "refresh_token"),
    ];

    let resp = http
        .post(&config.oauth_token_url)
        .form(&params)
        .send()
        .await
        .map_err(|e| SessionError::Provider(e.to_string()))?;

    if !resp.status().is_success() {
        tracing::warn!("Access token refresh rejected with {}", resp.status());
        return Err(SessionError::CredentialExpired);
    }

    resp.json::<TokenResponse>()
        .await
        .map_err(|e| SessionError::Provider(e.to_string()))
}
