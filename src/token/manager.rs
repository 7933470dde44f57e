//! Token Manager
//!
//! Caches the client-credentials bearer token and refreshes it on demand.
//! Concurrent callers during a refresh share one in-flight token request.

use async_trait::async_trait;
use futures::future::{BoxFuture, FutureExt, Shared};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::core::{Clock, SystemClock};
use crate::error::AuthError;
use crate::flows::ClientCredentialsFlow;
use crate::types::{AccessToken, TokenResponse, TokenState, DEFAULT_REFRESH_MARGIN};

/// Token manager interface.
#[async_trait]
pub trait TokenManager: Send + Sync {
    /// Get a valid access token, refreshing if necessary.
    async fn get_access_token(&self) -> Result<String, AuthError>;

    /// Current cache state, without I/O.
    fn state(&self) -> TokenState;

    /// Drop the cached token so the next call refreshes.
    fn invalidate(&self);
}

/// Token manager configuration.
#[derive(Debug, Clone)]
pub struct TokenManagerConfig {
    /// Subtracted from `expires_in` when the token is cached (default: 5 minutes).
    pub refresh_margin: Duration,
    /// Lifetime assumed when the token response carries no `expires_in`.
    pub default_lifetime: Duration,
}

impl Default for TokenManagerConfig {
    fn default() -> Self {
        Self {
            refresh_margin: DEFAULT_REFRESH_MARGIN,
            default_lifetime: Duration::from_secs(3600),
        }
    }
}

type RefreshFuture = Shared<BoxFuture<'static, Result<AccessToken, AuthError>>>;

#[derive(Default)]
struct TokenCache {
    token: Option<AccessToken>,
    in_flight: Option<RefreshFuture>,
}

struct ManagerInner {
    flow: Arc<dyn ClientCredentialsFlow>,
    clock: Arc<dyn Clock>,
    config: TokenManagerConfig,
    cache: Mutex<TokenCache>,
    refreshes: AtomicUsize,
}

impl ManagerInner {
    /// Epoch ms after which the token is no longer handed out.
    ///
    /// Lifetimes at or below the margin are used in full.
    fn expiry_for(&self, response: &TokenResponse, acquired_at_ms: u64) -> u64 {
        let expires_in = match response.expires_in {
            Some(secs) => secs,
            None => {
                warn!(
                    default_secs = self.config.default_lifetime.as_secs(),
                    "token response has no expires_in, assuming default lifetime"
                );
                self.config.default_lifetime.as_secs()
            }
        };

        let margin = self.config.refresh_margin.as_secs();
        let lifetime = if expires_in > margin {
            expires_in - margin
        } else {
            expires_in
        };

        acquired_at_ms.saturating_add(lifetime.saturating_mul(1000))
    }

    async fn fetch(&self) -> Result<AccessToken, AuthError> {
        let response = self.flow.request_token().await?;
        let acquired_at = self.clock.now_ms();
        let expires_at = self.expiry_for(&response, acquired_at);
        Ok(AccessToken::new(response.access_token, expires_at))
    }
}

/// Spawn the refresh so it outlives any single waiter.
fn start_refresh(inner: &Arc<ManagerInner>) -> RefreshFuture {
    let task_inner = Arc::clone(inner);
    let handle = tokio::spawn(async move {
        let outcome = task_inner.fetch().await;

        let mut cache = task_inner.cache.lock();
        cache.in_flight = None;
        if let Ok(token) = &outcome {
            cache.token = Some(token.clone());
        }
        drop(cache);

        match &outcome {
            Ok(token) => {
                let count = task_inner.refreshes.fetch_add(1, Ordering::SeqCst) + 1;
                info!(
                    valid_for_secs = token.remaining_at(task_inner.clock.now_ms()).as_secs(),
                    refresh_count = count,
                    "acquired access token"
                );
            }
            Err(e) => warn!(error = %e, "token refresh failed"),
        }

        outcome
    });

    async move { handle.await.unwrap_or(Err(AuthError::Aborted)) }
        .boxed()
        .shared()
}

/// Client-credentials token manager with single-flight refresh.
#[derive(Clone)]
pub struct ClientCredentialsTokenManager {
    inner: Arc<ManagerInner>,
}

impl ClientCredentialsTokenManager {
    /// Create a manager on the system clock.
    pub fn new(flow: Arc<dyn ClientCredentialsFlow>, config: TokenManagerConfig) -> Self {
        Self::with_clock(flow, config, Arc::new(SystemClock))
    }

    /// Create a manager on an injected clock.
    pub fn with_clock(
        flow: Arc<dyn ClientCredentialsFlow>,
        config: TokenManagerConfig,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            inner: Arc::new(ManagerInner {
                flow,
                clock,
                config,
                cache: Mutex::new(TokenCache::default()),
                refreshes: AtomicUsize::new(0),
            }),
        }
    }

    /// Successful refreshes so far.
    pub fn refresh_count(&self) -> usize {
        self.inner.refreshes.load(Ordering::SeqCst)
    }
}

impl std::fmt::Debug for ClientCredentialsTokenManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientCredentialsTokenManager")
            .field("config", &self.inner.config)
            .field("state", &self.state())
            .finish()
    }
}

#[async_trait]
impl TokenManager for ClientCredentialsTokenManager {
    async fn get_access_token(&self) -> Result<String, AuthError> {
        let refresh = {
            let mut cache = self.inner.cache.lock();
            let now = self.inner.clock.now_ms();

            if let Some(token) = cache.token.as_ref().filter(|t| t.is_valid_at(now)) {
                debug!(
                    remaining_secs = token.remaining_at(now).as_secs(),
                    "using cached access token"
                );
                return Ok(token.secret().to_string());
            }

            if let Some(in_flight) = cache.in_flight.clone() {
                debug!("joining in-flight token refresh");
                in_flight
            } else {
                let refresh = start_refresh(&self.inner);
                cache.in_flight = Some(refresh.clone());
                refresh
            }
        };

        refresh.await.map(|token| token.secret().to_string())
    }

    fn state(&self) -> TokenState {
        let cache = self.inner.cache.lock();
        let now = self.inner.clock.now_ms();
        match &cache.token {
            None => TokenState::NoToken,
            Some(token) if token.is_valid_at(now) => TokenState::Valid {
                expires_in: token.remaining_at(now),
            },
            Some(_) => TokenState::Stale,
        }
    }

    fn invalidate(&self) {
        self.inner.cache.lock().token = None;
        debug!("access token cache cleared");
    }
}

/// Mock token manager for testing.
pub struct MockTokenManager {
    token: String,
    next_error: Mutex<Option<AuthError>>,
    calls: AtomicUsize,
}

impl MockTokenManager {
    /// Create a mock that always hands out `token`.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            next_error: Mutex::new(None),
            calls: AtomicUsize::new(0),
        }
    }

    /// Fail the next call with `error`.
    pub fn fail_next(&self, error: AuthError) -> &Self {
        *self.next_error.lock() = Some(error);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TokenManager for MockTokenManager {
    async fn get_access_token(&self) -> Result<String, AuthError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(error) = self.next_error.lock().take() {
            return Err(error);
        }
        Ok(self.token.clone())
    }

    fn state(&self) -> TokenState {
        TokenState::Valid {
            expires_in: Duration::from_secs(3600),
        }
    }

    fn invalidate(&self) {}
}
