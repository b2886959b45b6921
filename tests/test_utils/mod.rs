//! Test utilities for integration tests
use std::sync::{Arc, RwLock};

use axum::{Router, body::Body};
use axum::http::{Request, StatusCode};
use serde_json::json;
use tower::util::ServiceExt;

use calbot::api::AppState;
use calbot::api::app;
use calbot::api::public::webhook::WebhookReply;
use calbot::core::AppConfig;

/// Builds a config with every provider endpoint pointed at the given
/// mock server so no test ever talks to the real provider.
pub fn test_config(provider_url: &str) -> AppConfig {
    AppConfig {
        client_id: String::from("test_client_id"),
        client_secret: String::from("test_client_secret"),
        redirect_uri: String::from("http://localhost:3000/oauth2callback"),
        oauth_auth_url: format!("{}/o/oauth2/v2/auth", provider_url),
        oauth_token_url: format!("{}/token", provider_url),
        calendar_api_url: format!("{}/calendar/v3", provider_url),
        timezone: String::from("America/Sao_Paulo"),
        http_timeout_secs: 5,
    }
}

/// Creates a test application router from the given config. Clones of
/// the returned router share the same credential store.
pub fn test_app(config: AppConfig) -> Router {
    let app_state = AppState::new(config);
    app(Arc::new(RwLock::new(app_state)))
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Posts one relay message to the webhook and returns the status plus
/// the decoded reply.
pub async fn post_webhook(app: &Router, sender_id: &str, message: &str) -> (StatusCode, WebhookReply) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/webhook")
                .method("POST")
                .header("content-type", "application/json")
                .body(Body::from(
                    json!({
                        "message": message,
                        "senderId": sender_id,
                    })
                    .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = body_to_string(response.into_body()).await;
    let reply: WebhookReply = serde_json::from_str(&body).unwrap();
    (status, reply)
}

/// Drives the OAuth redirect callback with the given query string.
pub async fn get_oauth_callback(app: &Router, query: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/oauth2callback{}", query))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = body_to_string(response.into_body()).await;
    (status, body)
}
