//! Configuration Types
//!
//! ITS client configuration types.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

/// Default resource request deadline.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Tokens are treated as expired this long before the server says so.
pub const DEFAULT_REFRESH_MARGIN: Duration = Duration::from_secs(300);

/// ITS client configuration.
#[derive(Clone, Debug)]
pub struct ItsConfig {
    /// Client credentials and token endpoint.
    pub credentials: Credentials,
    /// Base URL every path template is resolved against.
    pub base_url: Url,
    /// Resource request timeout.
    pub timeout: Duration,
    /// Token endpoint request timeout.
    pub token_timeout: Duration,
    /// Refresh margin subtracted from `expires_in`.
    pub refresh_margin: Duration,
    /// Injected as `program-id` when absent.
    pub default_program_id: Option<String>,
    /// Injected as `program-institution-id` when absent and accepted.
    pub default_program_institution_id: Option<String>,
    /// Whether configured defaults are injected at all.
    pub inject_defaults: bool,
    /// Credentials belong to an institution-level client.
    pub institution_client: bool,
    /// User-Agent header.
    pub user_agent: String,
}

/// Client credentials for the client-credentials grant.
#[derive(Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: SecretString,
    pub token_url: Url,
    pub scope: Option<String>,
    pub auth_method: ClientAuthMethod,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("token_url", &self.token_url.as_str())
            .field("scope", &self.scope)
            .field("auth_method", &self.auth_method)
            .finish()
    }
}

/// How client credentials are presented to the token endpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientAuthMethod {
    /// client_id and client_secret in the form body.
    #[default]
    ClientSecretPost,
    /// HTTP Basic Authentication header.
    ClientSecretBasic,
}

impl ClientAuthMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ClientSecretPost => "client_secret_post",
            Self::ClientSecretBasic => "client_secret_basic",
        }
    }
}

pub(crate) fn default_user_agent() -> String {
    format!("integrations-its/{}", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_debug_redacts_secret() {
        let credentials = Credentials {
            client_id: "client".to_string(),
            client_secret: SecretString::new("hunter2".to_string()),
            token_url: Url::parse("https://auth.example.com/connect/token").unwrap(),
            scope: None,
            auth_method: ClientAuthMethod::default(),
        };
        let debug = format!("{:?}", credentials);
        assert!(debug.contains("client"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_default_auth_method_posts_credentials() {
        assert_eq!(ClientAuthMethod::default(), ClientAuthMethod::ClientSecretPost);
        assert_eq!(ClientAuthMethod::ClientSecretBasic.as_str(), "client_secret_basic");
    }
}
