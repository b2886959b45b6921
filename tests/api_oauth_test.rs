//! Integration tests for the OAuth redirect callback

mod test_utils;

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::test_utils::{get_oauth_callback, post_webhook, test_app, test_config};

    fn token_body(access: &str, refresh: Option<&str>, expires_in: i64) -> String {
        let mut body = serde_json::json!({
            "access_token": access,
            "expires_in": expires_in,
            "token_type": "Bearer",
        });
        if let Some(refresh) = refresh {
            body["refresh_token"] = serde_json::json!(refresh);
        }
        body.to_string()
    }

    /// Tests callback returns 400 when no code is provided
    #[tokio::test]
    async fn it_returns_400_for_missing_code() {
        let server = mockito::Server::new_async().await;
        let app = test_app(test_config(&server.url()));

        let (status, body) = get_oauth_callback(&app, "").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("No authorization code"));
    }

    /// Tests callback returns 400 when the state parameter is missing,
    /// since there is no sender to store the credential for
    #[tokio::test]
    async fn it_returns_400_for_missing_state() {
        let server = mockito::Server::new_async().await;
        let app = test_app(test_config(&server.url()));

        let (status, body) = get_oauth_callback(&app, "?code=abc").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("state"));
    }

    /// Tests callback returns 500 when the provider rejects the code
    #[tokio::test]
    async fn it_returns_500_for_rejected_code() {
        let mut server = mockito::Server::new_async().await;
        let token_mock = server
            .mock("POST", "/token")
            .with_status(400)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error": "invalid_grant"}"#)
            .create_async()
            .await;

        let app = test_app(test_config(&server.url()));
        let (status, _) = get_oauth_callback(&app, "?code=bad-code&state=wa-123").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        token_mock.assert_async().await;
    }

    /// Tests a successful exchange stores the credential: the sender
    /// stops getting consent URLs on the very next message
    #[tokio::test]
    async fn it_stores_the_credential_on_success() {
        let mut server = mockito::Server::new_async().await;
        let token_mock = server
            .mock("POST", "/token")
            .match_body(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("code".into(), "good-code".into()),
                mockito::Matcher::UrlEncoded("grant_type".into(), "authorization_code".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(token_body("access-1", Some("refresh-1"), 3600))
            .create_async()
            .await;

        let app = test_app(test_config(&server.url()));

        let (status, body) = get_oauth_callback(&app, "?code=good-code&state=wa-123").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("successful"));
        token_mock.assert_async().await;

        // Now the sender is authorized: an unrecognized message gets
        // the fallback, not a consent URL.
        let (_, reply) = post_webhook(&app, "wa-123", "oi").await;
        let text = reply.reply;
        assert!(text.contains("didn't understand"));
        assert!(!text.contains("state=wa-123"));
    }

    /// Tests the credential is stored only for the sender in `state`
    #[tokio::test]
    async fn it_stores_the_credential_per_sender() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/token")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(token_body("access-1", Some("refresh-1"), 3600))
            .create_async()
            .await;

        let app = test_app(test_config(&server.url()));
        get_oauth_callback(&app, "?code=good-code&state=wa-1").await;

        let (_, other) = post_webhook(&app, "wa-2", "oi").await;
        assert!(other.reply.contains("state=wa-2"));
    }

    /// Tests replaying a consumed code fails: the first exchange
    /// succeeds, the provider rejects the second
    #[tokio::test]
    async fn it_fails_when_a_code_is_replayed() {
        let mut server = mockito::Server::new_async().await;
        let first = server
            .mock("POST", "/token")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(token_body("access-1", Some("refresh-1"), 3600))
            .create_async()
            .await;

        let app = test_app(test_config(&server.url()));

        let (status, _) = get_oauth_callback(&app, "?code=one-shot&state=wa-123").await;
        assert_eq!(status, StatusCode::OK);
        first.assert_async().await;

        // The provider treats the code as consumed from here on.
        first.remove_async().await;
        server
            .mock("POST", "/token")
            .with_status(400)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error": "invalid_grant"}"#)
            .create_async()
            .await;

        let (status, _) = get_oauth_callback(&app, "?code=one-shot&state=wa-123").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
