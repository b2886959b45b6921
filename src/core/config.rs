use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    /// Base URL of the provider consent page
    pub oauth_auth_url: String,
    /// Base URL of the token endpoint used for code exchange and refresh
    pub oauth_token_url: String,
    /// Base URL of the calendar REST API
    pub calendar_api_url: String,
    /// Fixed timezone events are scheduled in. No per-user negotiation.
    pub timezone: String,
    /// Upper bound on any single outbound provider call, in seconds
    pub http_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        let client_id = env::var("GOOGLE_CLIENT_ID").expect("Missing GOOGLE_CLIENT_ID");
        let client_secret =
            env::var("GOOGLE_CLIENT_SECRET").expect("Missing GOOGLE_CLIENT_SECRET");
        let redirect_uri = env::var("GOOGLE_REDIRECT_URI")
            .unwrap_or_else(|_| "http://localhost:3000/oauth2callback".to_string());
        let oauth_auth_url = env::var("CALBOT_OAUTH_AUTH_URL")
            .unwrap_or_else(|_| "https://accounts.google.com/o/oauth2/v2/auth".to_string());
        let oauth_token_url = env::var("CALBOT_OAUTH_TOKEN_URL")
            .unwrap_or_else(|_| "https://oauth2.googleapis.com/token".to_string());
        let calendar_api_url = env::var("CALBOT_CALENDAR_API_URL")
            .unwrap_or_else(|_| "https://www.googleapis.com/calendar/v3".to_string());
        let timezone =
            env::var("CALBOT_TIMEZONE").unwrap_or_else(|_| "America/Sao_Paulo".to_string());
        let http_timeout_secs = env::var("CALBOT_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        Self {
            client_id,
            client_secret,
            redirect_uri,
            oauth_auth_url,
            oauth_token_url,
            calendar_api_url,
            timezone,
            http_timeout_secs,
        }
    }
}
