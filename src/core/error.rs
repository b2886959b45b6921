//! Session failure taxonomy. The orchestrator matches on these to decide
//! what to tell the user and whether to drop the stored credential.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    /// The authorization code was invalid, expired, or already consumed.
    #[error("authorization code exchange failed: {0}")]
    AuthExchange(String),

    /// No usable credential: neither an access token nor a refresh token.
    #[error("not authenticated with the calendar provider")]
    NotAuthenticated,

    /// The access token expired and no refresh capability remains. The
    /// caller should clear stored state and prompt reauthorization.
    #[error("calendar credential expired and cannot be renewed")]
    CredentialExpired,

    /// Any other upstream failure, including timeouts. Retryable by the
    /// user, never auto-retried here.
    #[error("calendar provider error: {0}")]
    Provider(String),
}
