//! Credential configuration for the TradeKing API.
//!
//! The API uses pre-obtained OAuth 1.0a credentials: an application consumer
//! key/secret pair and a per-user access token/secret pair. All four are
//! required before a client can be constructed; the callback URL is only
//! meaningful during the developer-portal authorization handshake and is
//! optional for runtime calls.

use serde::Deserialize;

use crate::api::error::{ApiError, ApiResult};

/// OAuth credential set for an authenticated session.
///
/// Immutable once the client is constructed. `Debug` redacts secret material.
#[derive(Clone, Deserialize)]
pub struct Credentials {
    /// Application consumer key
    pub consumer_key: String,
    /// Application consumer secret
    pub consumer_secret: String,
    /// User access token
    pub oauth_token: String,
    /// User access token secret
    pub oauth_token_secret: String,
    /// Authorization callback URL, unused for runtime calls
    #[serde(default)]
    pub callback_url: Option<String>,
}

impl Credentials {
    /// Create a credential set from the four required fields.
    pub fn new(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
        oauth_token: impl Into<String>,
        oauth_token_secret: impl Into<String>,
    ) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            oauth_token: oauth_token.into(),
            oauth_token_secret: oauth_token_secret.into(),
            callback_url: None,
        }
    }

    /// Set the authorization callback URL.
    pub fn with_callback_url(mut self, callback_url: impl Into<String>) -> Self {
        self.callback_url = Some(callback_url.into());
        self
    }

    /// Check that all four authentication fields are present.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidCredentials`] if any field is empty.
    pub fn validate(&self) -> ApiResult<()> {
        if self.consumer_key.is_empty()
            || self.consumer_secret.is_empty()
            || self.oauth_token.is_empty()
            || self.oauth_token_secret.is_empty()
        {
            return Err(ApiError::InvalidCredentials);
        }
        Ok(())
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &"<redacted>")
            .field("oauth_token", &self.oauth_token)
            .field("oauth_token_secret", &"<redacted>")
            .field("callback_url", &self.callback_url)
            .finish()
    }
}
