//! Authenticated Request Client
//!
//! Performs exactly one bearer-authenticated HTTP request and normalizes the
//! response. Non-2xx statuses are returned, never raised.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};
use url::Url;

use crate::core::{HttpBody, HttpMethod, HttpRequest, HttpTransport};
use crate::error::{ItsError, ItsResult, NetworkError, TimeoutError, TransportError};
use crate::token::TokenManager;
use crate::types::{ApiResponse, RequestBody, RequestParameters, ResponseBody};

/// Per-request inputs.
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    pub query: RequestParameters,
    pub body: Option<RequestBody>,
    /// Extra headers. `Authorization` is always overwritten.
    pub headers: HashMap<String, String>,
    /// Overrides the client-wide deadline.
    pub timeout: Option<Duration>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(mut self, query: impl Into<RequestParameters>) -> Self {
        self.query = query.into();
        self
    }

    pub fn body(mut self, body: impl Into<RequestBody>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Resolves paths against the base URL and attaches a bearer token.
pub struct AuthenticatedRequestClient {
    base_url: Url,
    transport: Arc<dyn HttpTransport>,
    token_manager: Arc<dyn TokenManager>,
    timeout: Duration,
}

impl AuthenticatedRequestClient {
    pub fn new(
        base_url: Url,
        transport: Arc<dyn HttpTransport>,
        token_manager: Arc<dyn TokenManager>,
        timeout: Duration,
    ) -> Self {
        Self {
            base_url: with_trailing_slash(base_url),
            transport,
            token_manager,
            timeout,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn token_manager(&self) -> &Arc<dyn TokenManager> {
        &self.token_manager
    }

    /// Resolve `path` and append `query`, repeating list-valued entries.
    pub fn resolve(&self, path: &str, query: &RequestParameters) -> Result<Url, NetworkError> {
        let mut url = self
            .base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| NetworkError::InvalidRequest {
                endpoint: path.to_string(),
                message: format!("cannot resolve path: {}", e),
            })?;

        if !self.is_within_base(&url) {
            return Err(NetworkError::InvalidRequest {
                endpoint: path.to_string(),
                message: format!("path resolves outside of {}", self.base_url),
            });
        }

        let pairs = query.to_query_pairs();
        if !pairs.is_empty() {
            let mut serializer = url.query_pairs_mut();
            for (name, value) in &pairs {
                serializer.append_pair(name, value);
            }
        }
        Ok(url)
    }

    /// Same origin as the base URL and under its path.
    fn is_within_base(&self, url: &Url) -> bool {
        url.scheme() == self.base_url.scheme()
            && url.host_str() == self.base_url.host_str()
            && url.port_or_known_default() == self.base_url.port_or_known_default()
            && url.username() == self.base_url.username()
            && url.path().starts_with(self.base_url.path())
    }

    /// Send one request. The deadline covers token acquisition and the
    /// resource call; an interrupted token refresh keeps running for
    /// other waiters.
    pub async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        options: RequestOptions,
    ) -> ItsResult<ApiResponse> {
        let deadline = options.timeout.unwrap_or(self.timeout);
        match tokio::time::timeout(deadline, self.dispatch(method, path, options, deadline)).await {
            Ok(result) => result,
            Err(_) => {
                warn!(%method, path, timeout_ms = deadline.as_millis() as u64, "ITS request timed out");
                Err(timeout_error(method, path, deadline))
            }
        }
    }

    async fn dispatch(
        &self,
        method: HttpMethod,
        path: &str,
        options: RequestOptions,
        deadline: Duration,
    ) -> ItsResult<ApiResponse> {
        let url = self.resolve(path, &options.query)?;
        let token = self.token_manager.get_access_token().await?;

        let mut request = HttpRequest::new(method, url.as_str());
        request.timeout = Some(deadline);
        set_header(&mut request.headers, "Accept", "application/json".to_string());
        for (name, value) in options.headers {
            set_header(&mut request.headers, &name, value);
        }
        set_header(&mut request.headers, "Authorization", format!("Bearer {}", token));

        match options.body {
            Some(RequestBody::Json(value)) => {
                set_header(&mut request.headers, "Content-Type", "application/json".to_string());
                request.body = Some(HttpBody::Text(value.to_string()));
            }
            Some(RequestBody::Multipart(parts)) => {
                request.body = Some(HttpBody::Multipart(parts));
            }
            None => {}
        }

        debug!(%method, url = %url, "dispatching ITS request");

        let response = self.transport.send(request).await.map_err(|e| match e {
            TransportError::Timeout { timeout } => timeout_error(method, path, timeout),
            other => ItsError::Network(other.into_network_error(path)),
        })?;

        let result = ApiResponse::new(response.status, response.headers, response.body);
        if matches!(&result.body, ResponseBody::Text(text) if !text.is_empty()) {
            warn!(%method, path, status = result.status, "response body is not JSON, keeping raw text");
        }

        debug!(%method, path, status = result.status, "ITS request completed");

        Ok(result)
    }
}

impl std::fmt::Debug for AuthenticatedRequestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthenticatedRequestClient")
            .field("base_url", &self.base_url.as_str())
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn timeout_error(method: HttpMethod, path: &str, timeout: Duration) -> ItsError {
    ItsError::Timeout(TimeoutError {
        method: method.to_string(),
        endpoint: path.to_string(),
        timeout,
    })
}

/// Insert replacing any header of the same name, ignoring case.
fn set_header(headers: &mut HashMap<String, String>, name: &str, value: String) {
    headers.retain(|existing, _| !existing.eq_ignore_ascii_case(name));
    headers.insert(name.to_string(), value);
}

fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MockHttpTransport, MultipartPart};
    use crate::error::AuthError;
    use crate::token::MockTokenManager;
    use serde_json::json;

    fn client_with(
        base: &str,
        transport: Arc<MockHttpTransport>,
        tokens: Arc<MockTokenManager>,
    ) -> AuthenticatedRequestClient {
        AuthenticatedRequestClient::new(
            Url::parse(base).unwrap(),
            transport,
            tokens,
            Duration::from_secs(5),
        )
    }

    fn setup() -> (AuthenticatedRequestClient, Arc<MockHttpTransport>, Arc<MockTokenManager>) {
        let transport = Arc::new(MockHttpTransport::new());
        let tokens = Arc::new(MockTokenManager::new("tok-1"));
        let client = client_with("https://api.example.com/its", transport.clone(), tokens.clone());
        (client, transport, tokens)
    }

    #[test]
    fn test_resolve_keeps_base_path_and_casing() {
        let (client, _, _) = setup();
        let url = client
            .resolve("/package/forms/Query", &RequestParameters::new())
            .unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/its/package/forms/Query");
    }

    #[test]
    fn test_resolve_repeats_list_values() {
        let (client, _, _) = setup();
        let query = RequestParameters::new()
            .with("program-id", 238)
            .with("examinee-id", vec!["a", "b"]);
        let url = client.resolve("/examinee/query", &query).unwrap();
        assert_eq!(
            url.query(),
            Some("examinee-id=a&examinee-id=b&program-id=238")
        );
    }

    #[test]
    fn test_resolve_rejects_paths_leaving_base() {
        let (client, _, _) = setup();
        for path in [
            "https://other.example.com/collect",
            "http://api.example.com/its/event/query",
            "https://api.example.com:8443/its/event/query",
            "../admin/x",
            "event/../../admin",
            "%2e%2e/admin",
        ] {
            let err = client.resolve(path, &RequestParameters::new()).unwrap_err();
            assert!(
                matches!(err, NetworkError::InvalidRequest { .. }),
                "{} resolved: {:?}",
                path,
                err
            );
        }

        let url = client
            .resolve("event/../Timezone/Query", &RequestParameters::new())
            .unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/its/Timezone/Query");
    }

    #[tokio::test]
    async fn test_foreign_host_gets_no_token() {
        let (client, transport, tokens) = setup();
        transport.queue_json_response(200, &json!({}));

        let err = client
            .request(
                HttpMethod::Get,
                "https://collector.example.net/x",
                RequestOptions::new(),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, ItsError::Network(NetworkError::InvalidRequest { .. })));
        assert_eq!(transport.request_count(), 0);
        assert_eq!(tokens.call_count(), 0);
    }

    #[tokio::test]
    async fn test_request_sets_auth_and_accept_headers() {
        let (client, transport, _) = setup();
        transport.queue_json_response(200, &json!({"ok": true}));

        let response = client
            .request(HttpMethod::Get, "/Timezone/Query", RequestOptions::new())
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.json(), Some(&json!({"ok": true})));

        let sent = transport.get_last_request().unwrap();
        assert_eq!(sent.header("authorization"), Some("Bearer tok-1"));
        assert_eq!(sent.header("accept"), Some("application/json"));
        assert!(sent.header("content-type").is_none());
    }

    #[tokio::test]
    async fn test_json_body_sets_content_type() {
        let (client, transport, _) = setup();
        transport.queue_json_response(201, &json!({}));

        client
            .request(
                HttpMethod::Post,
                "/event/create",
                RequestOptions::new().body(json!({"eventName": "Spring"})),
            )
            .await
            .unwrap();

        let sent = transport.get_last_request().unwrap();
        assert_eq!(sent.header("content-type"), Some("application/json"));
        assert_eq!(sent.body_text(), Some(r#"{"eventName":"Spring"}"#));
    }

    #[tokio::test]
    async fn test_multipart_body_has_no_json_content_type() {
        let (client, transport, _) = setup();
        transport.queue_json_response(200, &json!({}));

        let parts = vec![MultipartPart::file("import-data", "items.zip", None, vec![1, 2, 3])];
        client
            .request(
                HttpMethod::Post,
                "/iw-tool/import/import",
                RequestOptions::new().body(parts),
            )
            .await
            .unwrap();

        let sent = transport.get_last_request().unwrap();
        assert!(sent.header("content-type").is_none());
        assert!(matches!(sent.body, Some(HttpBody::Multipart(_))));
    }

    #[tokio::test]
    async fn test_non_success_status_is_returned() {
        let (client, transport, _) = setup();
        transport.queue_text_response(503, "maintenance");

        let response = client
            .request(HttpMethod::Get, "/event/query", RequestOptions::new())
            .await
            .unwrap();

        assert_eq!(response.status, 503);
        assert_eq!(response.text(), Some("maintenance"));
        assert!(response.json().is_none());
    }

    #[tokio::test]
    async fn test_caller_cannot_override_authorization() {
        let (client, transport, _) = setup();
        transport.queue_json_response(200, &json!({}));

        client
            .request(
                HttpMethod::Get,
                "/event/query",
                RequestOptions::new()
                    .header("authorization", "Bearer forged")
                    .header("X-Trace", "1"),
            )
            .await
            .unwrap();

        let sent = transport.get_last_request().unwrap();
        assert_eq!(sent.header("Authorization"), Some("Bearer tok-1"));
        assert_eq!(sent.header("x-trace"), Some("1"));
    }

    #[tokio::test]
    async fn test_transport_failures_are_mapped() {
        let (client, transport, _) = setup();
        transport.queue_error(TransportError::Timeout {
            timeout: Duration::from_secs(5),
        });
        transport.queue_error(TransportError::Connection {
            message: "refused".to_string(),
        });

        let timeout = client
            .request(HttpMethod::Get, "/event/query", RequestOptions::new())
            .await
            .unwrap_err();
        assert!(matches!(timeout, ItsError::Timeout(_)));

        let network = client
            .request(HttpMethod::Get, "/event/query", RequestOptions::new())
            .await
            .unwrap_err();
        assert!(matches!(
            network,
            ItsError::Network(NetworkError::ConnectionFailed { .. })
        ));
    }

    #[tokio::test]
    async fn test_deadline_produces_timeout_error() {
        let (client, transport, _) = setup();
        transport.set_delay(Duration::from_millis(200));
        transport.queue_json_response(200, &json!({}));

        let err = client
            .request(
                HttpMethod::Get,
                "/session/query",
                RequestOptions::new().timeout(Duration::from_millis(20)),
            )
            .await
            .unwrap_err();

        match err {
            ItsError::Timeout(e) => {
                assert_eq!(e.method, "GET");
                assert_eq!(e.endpoint, "/session/query");
                assert_eq!(e.timeout, Duration::from_millis(20));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_token_failure_sends_nothing() {
        let (client, transport, tokens) = setup();
        tokens.fail_next(AuthError::Rejected {
            status: 401,
            body: "invalid_client".to_string(),
        });

        let err = client
            .request(HttpMethod::Get, "/event/query", RequestOptions::new())
            .await
            .unwrap_err();

        assert!(matches!(err, ItsError::Auth(AuthError::Rejected { status: 401, .. })));
        assert_eq!(transport.request_count(), 0);
    }
}
