//! Environment Loading
//!
//! Configuration from a Postman environment export and process
//! environment variables. Variables take precedence over file values.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, info};

use crate::builders::config::ItsConfigBuilder;
use crate::error::{ConfigurationError, ItsResult};
use crate::types::ItsConfig;

/// Names the Postman environment file read by [`ItsConfig::load`].
pub const ENV_FILE: &str = "ENV_FILE";

#[derive(Debug, Deserialize)]
struct PostmanEnvironment {
    #[serde(default)]
    values: Vec<PostmanVariable>,
}

#[derive(Debug, Deserialize)]
struct PostmanVariable {
    key: String,
    #[serde(default)]
    value: String,
    #[serde(default)]
    enabled: bool,
}

impl ItsConfigBuilder {
    /// Apply the enabled entries of a Postman environment export.
    ///
    /// Unknown keys are ignored.
    pub fn postman_environment(mut self, json: &str) -> Result<Self, ConfigurationError> {
        let environment: PostmanEnvironment =
            serde_json::from_str(json).map_err(|e| ConfigurationError::EnvironmentFile {
                path: "<inline>".to_string(),
                message: e.to_string(),
            })?;

        for variable in environment.values.into_iter().filter(|v| v.enabled) {
            let value = variable.value;
            match variable.key.as_str() {
                "baseUrl" => self.base_url = Some(value),
                "auth-url" => self.token_url = Some(value),
                "client-id" => self.client_id = Some(value),
                "client-secret" => self = self.client_secret(value),
                "scope" => self.scope = Some(value),
                "program-id" => self.default_program_id = Some(value),
                "program-institution-id" => self.default_program_institution_id = Some(value),
                other => debug!(key = other, "ignoring Postman variable"),
            }
        }
        Ok(self)
    }

    /// Read and apply a Postman environment file.
    pub fn postman_file(self, path: impl AsRef<Path>) -> Result<Self, ConfigurationError> {
        let path = path.as_ref();
        let shown = path.display().to_string();
        let json = std::fs::read_to_string(path).map_err(|e| ConfigurationError::EnvironmentFile {
            path: shown.clone(),
            message: e.to_string(),
        })?;
        let builder = self.postman_environment(&json).map_err(|e| match e {
            ConfigurationError::EnvironmentFile { message, .. } => {
                ConfigurationError::EnvironmentFile {
                    path: shown.clone(),
                    message,
                }
            }
            other => other,
        })?;
        info!(path = %shown, "loaded Postman environment");
        Ok(builder)
    }

    /// Overlay values from `lookup`, typically the process environment.
    pub fn env_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigurationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(value) = get("CLIENT_ID") {
            self.client_id = Some(value);
        }
        if let Some(value) = get("CLIENT_SECRET") {
            self = self.client_secret(value);
        }
        if let Some(value) = get("TOKEN_URL") {
            self.token_url = Some(value);
        }
        if let Some(value) = get("BASE_URL") {
            self.base_url = Some(value);
        }
        if let Some(value) = get("SCOPE") {
            self.scope = Some(value);
        }
        if let Some(value) = get("PROGRAM_ID").or_else(|| get("DEFAULT_PROGRAM_ID")) {
            self.default_program_id = Some(value);
        }
        if let Some(value) = get("PROGRAM_INSTITUTION_ID") {
            self.default_program_institution_id = Some(value);
        }
        if let Some(value) = get("ITS_TIMEOUT_SECS") {
            let secs: u64 = value.trim().parse().map_err(|_| ConfigurationError::InvalidValue {
                field: "ITS_TIMEOUT_SECS".to_string(),
                message: format!("expected whole seconds, got {}", value),
            })?;
            self.timeout = Duration::from_secs(secs);
        }
        if let Some(value) = get("ITS_INSTITUTION_CLIENT") {
            self.institution_client = parse_flag("ITS_INSTITUTION_CLIENT", &value)?;
        }
        Ok(self)
    }
}

fn parse_flag(field: &str, value: &str) -> Result<bool, ConfigurationError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigurationError::InvalidValue {
            field: field.to_string(),
            message: format!("expected a boolean, got {}", value),
        }),
    }
}

impl ItsConfig {
    /// Configuration from process environment variables alone.
    pub fn from_env() -> ItsResult<Self> {
        Ok(ItsConfigBuilder::new()
            .env_overrides(|name| std::env::var(name).ok())?
            .build()?)
    }

    /// Load the Postman file named by `ENV_FILE`, if set, then apply
    /// environment variable overrides.
    pub fn load() -> ItsResult<Self> {
        Self::load_with(|name| std::env::var(name).ok())
    }

    /// [`ItsConfig::load`] over an arbitrary variable source.
    pub fn load_with<F>(lookup: F) -> ItsResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = ItsConfigBuilder::new();
        if let Some(path) = lookup(ENV_FILE).filter(|p| !p.trim().is_empty()) {
            builder = builder.postman_file(path)?;
        }
        Ok(builder.env_overrides(lookup)?.build()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use secrecy::ExposeSecret;
    use std::collections::HashMap;

    const POSTMAN: &str = r#"{
        "id": "env",
        "name": "238-stg",
        "values": [
            {"key": "baseUrl", "value": "https://api-staging.example.com", "enabled": true},
            {"key": "auth-url", "value": "https://identity-staging.example.com/connect/token", "enabled": true},
            {"key": "client-id", "value": "file-client", "enabled": true},
            {"key": "client-secret", "value": "file-secret", "enabled": true},
            {"key": "scope", "value": "its.api", "enabled": true},
            {"key": "program-id", "value": "238", "enabled": true},
            {"key": "program-institution-id", "value": "1009048", "enabled": false},
            {"key": "vendor-id", "value": "5", "enabled": true}
        ]
    }"#;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_postman_environment_enabled_entries_only() {
        let config = ItsConfigBuilder::new()
            .postman_environment(POSTMAN)
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(config.base_url.as_str(), "https://api-staging.example.com/");
        assert_eq!(
            config.credentials.token_url.as_str(),
            "https://identity-staging.example.com/connect/token"
        );
        assert_eq!(config.credentials.client_id, "file-client");
        assert_eq!(config.credentials.client_secret.expose_secret(), "file-secret");
        assert_eq!(config.default_program_id.as_deref(), Some("238"));
        assert_eq!(config.default_program_institution_id, None);
    }

    #[test]
    fn test_environment_overrides_file() {
        let config = ItsConfigBuilder::new()
            .postman_environment(POSTMAN)
            .unwrap()
            .env_overrides(vars(&[
                ("CLIENT_ID", "env-client"),
                ("DEFAULT_PROGRAM_ID", "300"),
                ("PROGRAM_INSTITUTION_ID", "42"),
                ("ITS_TIMEOUT_SECS", "30"),
                ("ITS_INSTITUTION_CLIENT", "true"),
                ("SCOPE", ""),
            ]))
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(config.credentials.client_id, "env-client");
        assert_eq!(config.credentials.scope.as_deref(), Some("its.api"));
        assert_eq!(config.default_program_id.as_deref(), Some("300"));
        assert_eq!(config.default_program_institution_id.as_deref(), Some("42"));
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.institution_client);
    }

    #[test]
    fn test_program_id_wins_over_default_program_id() {
        let builder = ItsConfigBuilder::new()
            .env_overrides(vars(&[("PROGRAM_ID", "1"), ("DEFAULT_PROGRAM_ID", "2")]))
            .unwrap();
        assert_eq!(builder.default_program_id.as_deref(), Some("1"));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let err = ItsConfigBuilder::new()
            .env_overrides(vars(&[("ITS_TIMEOUT_SECS", "soon")]))
            .unwrap_err();
        assert!(matches!(err, ConfigurationError::InvalidValue { .. }));

        let err = ItsConfigBuilder::new()
            .env_overrides(vars(&[("ITS_INSTITUTION_CLIENT", "maybe")]))
            .unwrap_err();
        assert!(matches!(err, ConfigurationError::InvalidValue { .. }));

        let err = ItsConfigBuilder::new().postman_environment("{not json").unwrap_err();
        assert!(matches!(err, ConfigurationError::EnvironmentFile { .. }));
    }

    #[test]
    fn test_postman_file_from_disk() {
        let path = std::env::temp_dir().join(format!("its-env-{}.json", std::process::id()));
        std::fs::write(&path, POSTMAN).unwrap();

        let loaded = ItsConfigBuilder::new().postman_file(&path);
        std::fs::remove_file(&path).unwrap();

        let config = loaded.unwrap().build().unwrap();
        assert_eq!(config.credentials.client_id, "file-client");

        let err = ItsConfigBuilder::new().postman_file(&path).unwrap_err();
        match err {
            ConfigurationError::EnvironmentFile { path: shown, .. } => {
                assert_eq!(shown, path.display().to_string());
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_load_with_missing_file() {
        let err = ItsConfig::load_with(vars(&[(ENV_FILE, "/nonexistent/its-env.json")])).unwrap_err();
        assert_eq!(err.error_code(), "ITS_CONFIG");
    }

    #[test]
    fn test_load_with_variables_only() {
        let config = ItsConfig::load_with(vars(&[
            ("CLIENT_ID", "c"),
            ("CLIENT_SECRET", "s"),
            ("TOKEN_URL", "https://identity.example.com/connect/token"),
            ("BASE_URL", "https://api.example.com"),
        ]))
        .unwrap();
        assert_eq!(config.credentials.client_id, "c");
        assert!(config.default_program_id.is_none());
    }
}
