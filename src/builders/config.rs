//! Configuration Builder
//!
//! Fluent builder for ITS client configuration.

use std::time::Duration;

use secrecy::SecretString;
use url::Url;

use crate::error::{ConfigurationError, ItsResult};
use crate::types::config::default_user_agent;
use crate::types::{ClientAuthMethod, Credentials, ItsConfig, DEFAULT_REFRESH_MARGIN, DEFAULT_TIMEOUT};

/// ITS configuration builder.
#[derive(Clone, Debug)]
pub struct ItsConfigBuilder {
    pub(crate) client_id: Option<String>,
    pub(crate) client_secret: Option<SecretString>,
    pub(crate) token_url: Option<String>,
    pub(crate) base_url: Option<String>,
    pub(crate) scope: Option<String>,
    pub(crate) auth_method: ClientAuthMethod,
    pub(crate) timeout: Duration,
    pub(crate) token_timeout: Duration,
    pub(crate) refresh_margin: Duration,
    pub(crate) default_program_id: Option<String>,
    pub(crate) default_program_institution_id: Option<String>,
    pub(crate) inject_defaults: bool,
    pub(crate) institution_client: bool,
    pub(crate) user_agent: Option<String>,
}

impl Default for ItsConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ItsConfigBuilder {
    /// Create new configuration builder.
    pub fn new() -> Self {
        Self {
            client_id: None,
            client_secret: None,
            token_url: None,
            base_url: None,
            scope: None,
            auth_method: ClientAuthMethod::default(),
            timeout: DEFAULT_TIMEOUT,
            token_timeout: DEFAULT_TIMEOUT,
            refresh_margin: DEFAULT_REFRESH_MARGIN,
            default_program_id: None,
            default_program_institution_id: None,
            inject_defaults: true,
            institution_client: false,
            user_agent: None,
        }
    }

    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    pub fn client_secret(mut self, client_secret: impl Into<String>) -> Self {
        self.client_secret = Some(SecretString::new(client_secret.into()));
        self
    }

    /// Set the OAuth2 token endpoint.
    pub fn token_url(mut self, url: impl Into<String>) -> Self {
        self.token_url = Some(url.into());
        self
    }

    /// Set the API base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    pub fn auth_method(mut self, method: ClientAuthMethod) -> Self {
        self.auth_method = method;
        self
    }

    /// Set resource request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set token endpoint timeout.
    pub fn token_timeout(mut self, timeout: Duration) -> Self {
        self.token_timeout = timeout;
        self
    }

    pub fn refresh_margin(mut self, margin: Duration) -> Self {
        self.refresh_margin = margin;
        self
    }

    pub fn default_program_id(mut self, id: impl Into<String>) -> Self {
        self.default_program_id = Some(id.into());
        self
    }

    pub fn default_program_institution_id(mut self, id: impl Into<String>) -> Self {
        self.default_program_institution_id = Some(id.into());
        self
    }

    /// Enable or disable default identifier injection.
    pub fn inject_defaults(mut self, enable: bool) -> Self {
        self.inject_defaults = enable;
        self
    }

    /// Mark the credentials as an institution-level client.
    pub fn institution_client(mut self, institution_client: bool) -> Self {
        self.institution_client = institution_client;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build the ITS configuration.
    pub fn build(self) -> ItsResult<ItsConfig> {
        let client_id = required("client_id", self.client_id)?;
        let client_secret = self.client_secret.ok_or_else(|| missing("client_secret"))?;
        let token_url = parse_url("token_url", &required("token_url", self.token_url)?)?;
        let base_url = parse_url("base_url", &required("base_url", self.base_url)?)?;

        for (field, value) in [("timeout", self.timeout), ("token_timeout", self.token_timeout)] {
            if value.is_zero() {
                return Err(ConfigurationError::InvalidValue {
                    field: field.to_string(),
                    message: "must be greater than zero".to_string(),
                }
                .into());
            }
        }

        Ok(ItsConfig {
            credentials: Credentials {
                client_id,
                client_secret,
                token_url,
                scope: self.scope.filter(|s| !s.trim().is_empty()),
                auth_method: self.auth_method,
            },
            base_url,
            timeout: self.timeout,
            token_timeout: self.token_timeout,
            refresh_margin: self.refresh_margin,
            default_program_id: self.default_program_id.filter(|s| !s.trim().is_empty()),
            default_program_institution_id: self
                .default_program_institution_id
                .filter(|s| !s.trim().is_empty()),
            inject_defaults: self.inject_defaults,
            institution_client: self.institution_client,
            user_agent: self.user_agent.unwrap_or_else(default_user_agent),
        })
    }
}

/// Create a new ITS configuration builder.
pub fn its_config() -> ItsConfigBuilder {
    ItsConfigBuilder::new()
}

fn missing(field: &str) -> ConfigurationError {
    ConfigurationError::MissingRequired {
        field: field.to_string(),
    }
}

fn required(field: &str, value: Option<String>) -> Result<String, ConfigurationError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| missing(field))
}

fn parse_url(field: &str, raw: &str) -> Result<Url, ConfigurationError> {
    let invalid = |message: String| ConfigurationError::InvalidUrl {
        field: field.to_string(),
        url: raw.to_string(),
        message,
    };
    let url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(invalid(format!("unsupported scheme {}", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ItsError;
    use secrecy::ExposeSecret;

    fn complete() -> ItsConfigBuilder {
        ItsConfigBuilder::new()
            .client_id("test-client")
            .client_secret("test-secret")
            .token_url("https://identity.example.com/connect/token")
            .base_url("https://api.example.com")
    }

    #[test]
    fn test_builder_success() {
        let config = complete().scope("its.api").default_program_id("238").build().unwrap();

        assert_eq!(config.credentials.client_id, "test-client");
        assert_eq!(config.credentials.client_secret.expose_secret(), "test-secret");
        assert_eq!(config.credentials.scope.as_deref(), Some("its.api"));
        assert_eq!(config.default_program_id.as_deref(), Some("238"));
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert_eq!(config.refresh_margin, Duration::from_secs(300));
        assert!(config.inject_defaults);
        assert!(!config.institution_client);
        assert!(config.user_agent.starts_with("integrations-its/"));
    }

    #[test]
    fn test_builder_missing_fields() {
        let result = ItsConfigBuilder::new()
            .client_secret("s")
            .token_url("https://identity.example.com/connect/token")
            .base_url("https://api.example.com")
            .build();
        assert!(matches!(
            result,
            Err(ItsError::Configuration(ConfigurationError::MissingRequired { ref field })) if field == "client_id"
        ));

        let result = complete().client_id("  ").build();
        assert!(result.is_err());

        let result = ItsConfigBuilder::new()
            .client_id("c")
            .client_secret("s")
            .base_url("https://api.example.com")
            .build();
        assert!(matches!(
            result,
            Err(ItsError::Configuration(ConfigurationError::MissingRequired { ref field })) if field == "token_url"
        ));
    }

    #[test]
    fn test_builder_rejects_bad_urls() {
        let result = complete().base_url("not a url").build();
        assert!(matches!(
            result,
            Err(ItsError::Configuration(ConfigurationError::InvalidUrl { ref field, .. })) if field == "base_url"
        ));

        let result = complete().token_url("ftp://identity.example.com/token").build();
        assert!(result.is_err());
    }

    #[test]
    fn test_builder_rejects_zero_timeout() {
        let result = complete().timeout(Duration::ZERO).build();
        assert!(matches!(
            result,
            Err(ItsError::Configuration(ConfigurationError::InvalidValue { .. }))
        ));
    }

    #[test]
    fn test_blank_defaults_are_dropped() {
        let config = complete()
            .default_program_id("")
            .default_program_institution_id(" ")
            .build()
            .unwrap();
        assert!(config.default_program_id.is_none());
        assert!(config.default_program_institution_id.is_none());
    }
}
