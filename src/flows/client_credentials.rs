//! Client Credentials Flow
//!
//! RFC 6749 Section 4.4 - Client Credentials Grant against the ITS identity
//! provider.

use async_trait::async_trait;
use base64::Engine;
use parking_lot::Mutex;
use secrecy::ExposeSecret;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::core::{HttpBody, HttpMethod, HttpRequest, HttpTransport};
use crate::error::AuthError;
use crate::types::{ClientAuthMethod, Credentials, TokenResponse};

/// Client Credentials Flow interface.
#[async_trait]
pub trait ClientCredentialsFlow: Send + Sync {
    /// Perform one token request. Exactly one network call.
    async fn request_token(&self) -> Result<TokenResponse, AuthError>;
}

/// Client Credentials Flow implementation.
pub struct ClientCredentialsFlowImpl<T: HttpTransport + ?Sized> {
    credentials: Credentials,
    timeout: Duration,
    transport: Arc<T>,
}

impl<T: HttpTransport + ?Sized> ClientCredentialsFlowImpl<T> {
    /// Create new Client Credentials Flow.
    pub fn new(credentials: Credentials, timeout: Duration, transport: Arc<T>) -> Self {
        Self {
            credentials,
            timeout,
            transport,
        }
    }

    fn build_request_body(&self) -> Result<String, AuthError> {
        let mut params = vec![("grant_type", "client_credentials")];

        if self.credentials.auth_method == ClientAuthMethod::ClientSecretPost {
            params.push(("client_id", self.credentials.client_id.as_str()));
            params.push((
                "client_secret",
                self.credentials.client_secret.expose_secret().as_str(),
            ));
        }

        if let Some(scope) = self.credentials.scope.as_deref().filter(|s| !s.is_empty()) {
            params.push(("scope", scope));
        }

        serde_urlencoded::to_string(&params).map_err(|e| AuthError::Transport {
            message: format!("cannot encode token request: {}", e),
        })
    }

    fn build_request_headers(&self) -> HashMap<String, String> {
        let mut headers = HashMap::new();
        headers.insert(
            "content-type".to_string(),
            "application/x-www-form-urlencoded".to_string(),
        );
        headers.insert("accept".to_string(), "application/json".to_string());

        if self.credentials.auth_method == ClientAuthMethod::ClientSecretBasic {
            let credentials = format!(
                "{}:{}",
                self.credentials.client_id,
                self.credentials.client_secret.expose_secret()
            );
            let encoded = base64::engine::general_purpose::STANDARD.encode(credentials);
            headers.insert("authorization".to_string(), format!("Basic {}", encoded));
        }

        headers
    }
}

/// Turn a raw token endpoint reply into a token or an [`AuthError`].
pub(crate) fn interpret_token_response(status: u16, body: String) -> Result<TokenResponse, AuthError> {
    if !(200..300).contains(&status) {
        return Err(AuthError::Rejected { status, body });
    }

    let token: TokenResponse = match serde_json::from_str(&body) {
        Ok(token) => token,
        Err(e) => {
            return Err(AuthError::MalformedResponse {
                status,
                message: e.to_string(),
                body,
            })
        }
    };

    if token.access_token.is_empty() {
        return Err(AuthError::MissingAccessToken { status, body });
    }

    if token.expires_in == Some(0) {
        return Err(AuthError::MalformedResponse {
            status,
            message: "expires_in must be positive".to_string(),
            body,
        });
    }

    Ok(token)
}

#[async_trait]
impl<T: HttpTransport + ?Sized> ClientCredentialsFlow for ClientCredentialsFlowImpl<T> {
    async fn request_token(&self) -> Result<TokenResponse, AuthError> {
        let http_request = HttpRequest {
            method: HttpMethod::Post,
            url: self.credentials.token_url.to_string(),
            headers: self.build_request_headers(),
            body: Some(HttpBody::Text(self.build_request_body()?)),
            timeout: Some(self.timeout),
        };

        debug!(
            token_url = %self.credentials.token_url,
            auth_method = self.credentials.auth_method.as_str(),
            "requesting client credentials token"
        );

        let send = self.transport.send(http_request);
        let response = match tokio::time::timeout(self.timeout, send).await {
            Ok(result) => result?,
            Err(_) => {
                return Err(AuthError::Timeout {
                    timeout: self.timeout,
                })
            }
        };

        interpret_token_response(response.status, response.body)
    }
}

/// Mock Client Credentials Flow for testing.
///
/// Serves queued outcomes in order, then a default token.
#[derive(Default)]
pub struct MockClientCredentialsFlow {
    outcomes: Mutex<VecDeque<Result<TokenResponse, AuthError>>>,
    delay: Mutex<Option<Duration>>,
    calls: AtomicUsize,
}

impl MockClientCredentialsFlow {
    /// Create new mock flow.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful token.
    pub fn queue_token(&self, access_token: &str, expires_in: u64) -> &Self {
        self.outcomes
            .lock()
            .push_back(Ok(TokenResponse::new(access_token, Some(expires_in))));
        self
    }

    /// Queue an arbitrary token response.
    pub fn queue_response(&self, response: TokenResponse) -> &Self {
        self.outcomes.lock().push_back(Ok(response));
        self
    }

    /// Queue a failure.
    pub fn queue_error(&self, error: AuthError) -> &Self {
        self.outcomes.lock().push_back(Err(error));
        self
    }

    /// Delay every token request.
    pub fn set_delay(&self, delay: Duration) -> &Self {
        *self.delay.lock() = Some(delay);
        self
    }

    /// Number of token requests made.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ClientCredentialsFlow for MockClientCredentialsFlow {
    async fn request_token(&self) -> Result<TokenResponse, AuthError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;

        let delay = *self.delay.lock();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let queued = self.outcomes.lock().pop_front();
        queued.unwrap_or_else(|| Ok(TokenResponse::new(format!("mock-token-{}", call), Some(3600))))
    }
}
