//! ITS Error Types
//!
//! Error hierarchy for token acquisition, local parameter validation and
//! remote API calls.

use std::time::Duration;
use thiserror::Error;

use crate::types::RequestParameters;

/// Result alias used throughout the crate.
pub type ItsResult<T> = Result<T, ItsError>;

/// Root error type for the ITS integration.
#[derive(Error, Debug)]
pub enum ItsError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    #[error("Timeout: {0}")]
    Timeout(#[from] TimeoutError),

    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),
}

impl ItsError {
    /// Get error code for telemetry.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "ITS_VALIDATION",
            Self::Auth(_) => "ITS_AUTH",
            Self::Timeout(_) => "ITS_TIMEOUT",
            Self::Api(_) => "ITS_API",
            Self::Network(_) => "ITS_NETWORK",
            Self::Configuration(_) => "ITS_CONFIG",
        }
    }

    /// Whether a caller may reasonably retry the same call.
    ///
    /// The client itself never retries.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Timeout(_) | Self::Network(_) => true,
            Self::Auth(e) => e.is_transient(),
            Self::Api(e) => e.status == 429 || e.status >= 500,
            Self::Validation(_) | Self::Configuration(_) => false,
        }
    }

    /// True for resource timeouts and token endpoint timeouts alike.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_) | Self::Auth(AuthError::Timeout { .. }))
    }

    /// HTTP status attached to the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api(e) => Some(e.status),
            Self::Auth(e) => e.status(),
            _ => None,
        }
    }
}

/// Kind of local parameter violation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViolationKind {
    /// A required parameter is absent.
    Missing,
    /// Neither of two alternatives was supplied.
    NeitherSupplied,
    /// Two mutually exclusive parameters were both supplied.
    Conflicting,
    /// Only one half of a parameter pair was supplied.
    IncompletePair,
    /// A parameter required by the client context or another value is absent.
    ConditionallyRequired,
    /// The request body is absent or malformed.
    InvalidBody,
}

/// Local validation failure. Raised before any network call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    /// Wire name of the offending parameter (or body field).
    pub parameter: String,
    /// Violation category.
    pub kind: ViolationKind,
    /// Human readable reason.
    pub message: String,
    /// Parameters that would satisfy the rule instead.
    pub alternatives: Vec<String>,
    /// Operation being validated, once known.
    pub operation_id: Option<String>,
}

impl ValidationError {
    pub fn new(parameter: impl Into<String>, kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            parameter: parameter.into(),
            kind,
            message: message.into(),
            alternatives: Vec::new(),
            operation_id: None,
        }
    }

    /// Shorthand for a plain missing required parameter.
    pub fn missing(parameter: &str) -> Self {
        Self::new(
            parameter,
            ViolationKind::Missing,
            format!("{} is required", parameter),
        )
    }

    pub fn with_alternatives<I, S>(mut self, alternatives: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.alternatives = alternatives.into_iter().map(Into::into).collect();
        self
    }

    pub fn for_operation(mut self, operation_id: &str) -> Self {
        self.operation_id = Some(operation_id.to_string());
        self
    }
}

/// Token acquisition failure.
///
/// `Clone` so a single shared refresh outcome can reach every waiter.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("token endpoint rejected the request with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("token response (status {status}) has no access_token: {body}")]
    MissingAccessToken { status: u16, body: String },

    #[error("token response (status {status}) could not be decoded: {message}")]
    MalformedResponse {
        status: u16,
        body: String,
        message: String,
    },

    #[error("token endpoint unreachable: {message}")]
    Transport { message: String },

    #[error("token request timed out after {timeout:?}")]
    Timeout { timeout: Duration },

    #[error("token refresh was aborted before completing")]
    Aborted,
}

impl AuthError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. }
            | Self::MissingAccessToken { status, .. }
            | Self::MalformedResponse { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw token endpoint body, for diagnostics.
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Rejected { body, .. }
            | Self::MissingAccessToken { body, .. }
            | Self::MalformedResponse { body, .. } => Some(body),
            _ => None,
        }
    }

    fn is_transient(&self) -> bool {
        match self {
            Self::Transport { .. } | Self::Timeout { .. } | Self::Aborted => true,
            Self::Rejected { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

/// Resource request exceeded its deadline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{method} {endpoint} did not complete within {timeout:?}")]
pub struct TimeoutError {
    pub method: String,
    pub endpoint: String,
    pub timeout: Duration,
}

/// Remote 4xx/5xx outcome, body passed through verbatim.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{method} {endpoint} returned status {status}: {body}")]
pub struct ApiError {
    pub status: u16,
    pub method: String,
    pub endpoint: String,
    pub operation_id: Option<String>,
    /// Parameters the request was sent with.
    pub params: RequestParameters,
    pub body: String,
}

impl ApiError {
    /// Message the server put in its JSON error body, if any.
    pub fn server_message(&self) -> Option<String> {
        let value: serde_json::Value = serde_json::from_str(&self.body).ok()?;
        if let Some(text) = value.as_str() {
            return Some(text.to_string());
        }
        ["ErrorMessage", "errorMessage", "Message", "message", "error_description", "error"]
            .iter()
            .find_map(|key| value.get(*key).and_then(|v| v.as_str()))
            .map(str::to_string)
    }

    /// 422 usually means a business rule the local validators do not model.
    pub fn is_business_rule_violation(&self) -> bool {
        self.status == 422
    }

    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status)
    }

    pub fn is_server_error(&self) -> bool {
        self.status >= 500
    }
}

/// Connection level failure of a resource request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    #[error("connection to {endpoint} failed: {message}")]
    ConnectionFailed { endpoint: String, message: String },

    #[error("invalid response from {endpoint}: {message}")]
    InvalidResponse { endpoint: String, message: String },

    #[error("request to {endpoint} could not be built: {message}")]
    InvalidRequest { endpoint: String, message: String },
}

/// Failure reported by an [`HttpTransport`](crate::core::HttpTransport).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("request timed out after {timeout:?}")]
    Timeout { timeout: Duration },

    #[error("connection failed: {message}")]
    Connection { message: String },

    #[error("invalid response: {message}")]
    InvalidResponse { message: String },

    #[error("invalid request: {message}")]
    InvalidRequest { message: String },
}

impl TransportError {
    /// Attach the endpoint a transport failure happened on.
    pub fn into_network_error(self, endpoint: &str) -> NetworkError {
        let endpoint = endpoint.to_string();
        match self {
            Self::Connection { message } => NetworkError::ConnectionFailed { endpoint, message },
            Self::InvalidResponse { message } => NetworkError::InvalidResponse { endpoint, message },
            Self::InvalidRequest { message } => NetworkError::InvalidRequest { endpoint, message },
            Self::Timeout { timeout } => NetworkError::ConnectionFailed {
                endpoint,
                message: format!("timed out after {:?}", timeout),
            },
        }
    }
}

impl From<TransportError> for AuthError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Timeout { timeout } => Self::Timeout { timeout },
            other => Self::Transport {
                message: other.to_string(),
            },
        }
    }
}

/// Configuration error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("Missing required field: {field}")]
    MissingRequired { field: String },

    #[error("Invalid URL for {field}: {url} ({message})")]
    InvalidUrl {
        field: String,
        url: String,
        message: String,
    },

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("Cannot load environment file {path}: {message}")]
    EnvironmentFile { path: String, message: String },
}
