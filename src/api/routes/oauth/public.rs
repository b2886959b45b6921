//! Public types for the OAuth callback API
use serde::Deserialize;

/// Query parameters the provider appends to the redirect. `state`
/// carries the sender id the consent URL was built for.
#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    pub code: Option<String>,
    pub state: Option<String>,
}
