//! Token Types
//!
//! Client-credentials token response and the cached bearer token.

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::time::Duration;

/// Decoded token endpoint response.
///
/// `access_token` is guaranteed non-empty once the flow hands this out.
#[derive(Clone, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    /// Lifetime in seconds.
    #[serde(default)]
    pub expires_in: Option<u64>,
    #[serde(default)]
    pub scope: Option<String>,
}

impl TokenResponse {
    pub fn new(access_token: impl Into<String>, expires_in: Option<u64>) -> Self {
        Self {
            access_token: access_token.into(),
            token_type: Some("Bearer".to_string()),
            expires_in,
            scope: None,
        }
    }
}

impl std::fmt::Debug for TokenResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenResponse")
            .field("access_token", &"[REDACTED]")
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .field("scope", &self.scope)
            .finish()
    }
}

/// Cached bearer token. Replaced wholesale on refresh, never persisted.
#[derive(Clone)]
pub struct AccessToken {
    value: SecretString,
    /// Epoch milliseconds after which the token must not be handed out.
    /// Already reduced by the refresh margin.
    pub expires_at_ms: u64,
}

impl AccessToken {
    pub fn new(value: impl Into<String>, expires_at_ms: u64) -> Self {
        Self {
            value: SecretString::new(value.into()),
            expires_at_ms,
        }
    }

    /// Token value, for the Authorization header.
    pub fn secret(&self) -> &str {
        self.value.expose_secret()
    }

    /// Usable iff `now < expires_at_ms`.
    pub fn is_valid_at(&self, now_ms: u64) -> bool {
        now_ms < self.expires_at_ms
    }

    pub fn remaining_at(&self, now_ms: u64) -> Duration {
        Duration::from_millis(self.expires_at_ms.saturating_sub(now_ms))
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessToken")
            .field("value", &"[REDACTED]")
            .field("expires_at_ms", &self.expires_at_ms)
            .finish()
    }
}

/// Token lifecycle state as observed by the manager.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenState {
    /// Nothing acquired yet, or the cache was invalidated.
    NoToken,
    /// A usable token is cached.
    Valid { expires_in: Duration },
    /// The cached token is past its expiry minus margin.
    Stale,
}
