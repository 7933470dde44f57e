//! HTTP Transport
//!
//! HTTP client interface and implementations for token and resource requests.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};
use std::time::Duration;

use crate::error::TransportError;

/// HTTP request definition.
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// HTTP method.
    pub method: HttpMethod,
    /// Fully resolved request URL, query string included.
    pub url: String,
    /// Request headers.
    pub headers: HashMap<String, String>,
    /// Request body.
    pub body: Option<HttpBody>,
    /// Request timeout.
    pub timeout: Option<Duration>,
}

impl HttpRequest {
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HashMap::new(),
            body: None,
            timeout: None,
        }
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Body as text, when it is not multipart.
    pub fn body_text(&self) -> Option<&str> {
        match &self.body {
            Some(HttpBody::Text(text)) => Some(text),
            _ => None,
        }
    }
}

/// HTTP method.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Encoded request body.
#[derive(Clone, Debug, PartialEq)]
pub enum HttpBody {
    /// Pre-serialized body (JSON or form). Content-Type is set by the caller.
    Text(String),
    /// multipart/form-data; the transport chooses the boundary.
    Multipart(Vec<MultipartPart>),
}

/// One multipart/form-data field.
#[derive(Clone, Debug, PartialEq)]
pub struct MultipartPart {
    pub name: String,
    pub data: PartData,
}

#[derive(Clone, Debug, PartialEq)]
pub enum PartData {
    Text(String),
    File {
        file_name: String,
        content_type: Option<String>,
        bytes: Vec<u8>,
    },
}

impl MultipartPart {
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data: PartData::Text(value.into()),
        }
    }

    pub fn file(
        name: impl Into<String>,
        file_name: impl Into<String>,
        content_type: Option<&str>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            name: name.into(),
            data: PartData::File {
                file_name: file_name.into(),
                content_type: content_type.map(str::to_string),
                bytes,
            },
        }
    }
}

/// HTTP response definition.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers, lower-cased names.
    pub headers: HashMap<String, String>,
    /// Response body.
    pub body: String,
}

/// HTTP transport interface (for dependency injection).
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send an HTTP request. Non-2xx statuses are returned, not failed.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Default reqwest-based HTTP transport.
pub struct ReqwestHttpTransport {
    client: reqwest::Client,
    default_timeout: Duration,
}

impl ReqwestHttpTransport {
    /// Create transport with the given default timeout.
    pub fn new(default_timeout: Duration, user_agent: &str) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(default_timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| TransportError::InvalidRequest {
                message: format!("cannot build HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            default_timeout,
        })
    }

    /// Wrap an existing reqwest client.
    pub fn with_client(client: reqwest::Client, default_timeout: Duration) -> Self {
        Self {
            client,
            default_timeout,
        }
    }
}

fn multipart_form(parts: Vec<MultipartPart>) -> Result<reqwest::multipart::Form, TransportError> {
    let mut form = reqwest::multipart::Form::new();
    for part in parts {
        form = match part.data {
            PartData::Text(value) => form.text(part.name, value),
            PartData::File {
                file_name,
                content_type,
                bytes,
            } => {
                let mut file = reqwest::multipart::Part::bytes(bytes).file_name(file_name);
                if let Some(content_type) = content_type {
                    file = file.mime_str(&content_type).map_err(|e| {
                        TransportError::InvalidRequest {
                            message: format!("invalid part content type {}: {}", content_type, e),
                        }
                    })?;
                }
                form.part(part.name, file)
            }
        };
    }
    Ok(form)
}

#[async_trait]
impl HttpTransport for ReqwestHttpTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let timeout = request.timeout.unwrap_or(self.default_timeout);

        let mut req_builder = self
            .client
            .request(request.method.into(), &request.url)
            .timeout(timeout);

        for (key, value) in &request.headers {
            req_builder = req_builder.header(key, value);
        }

        req_builder = match request.body {
            Some(HttpBody::Text(body)) => req_builder.body(body),
            Some(HttpBody::Multipart(parts)) => req_builder.multipart(multipart_form(parts)?),
            None => req_builder,
        };

        let response = req_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                TransportError::Timeout { timeout }
            } else if e.is_builder() {
                TransportError::InvalidRequest {
                    message: e.to_string(),
                }
            } else {
                TransportError::Connection {
                    message: e.to_string(),
                }
            }
        })?;

        let status = response.status().as_u16();

        let mut headers = HashMap::new();
        for (key, value) in response.headers() {
            if let Ok(v) = value.to_str() {
                headers.insert(key.as_str().to_lowercase(), v.to_string());
            }
        }

        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                TransportError::Timeout { timeout }
            } else {
                TransportError::InvalidResponse {
                    message: e.to_string(),
                }
            }
        })?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

/// Mock HTTP transport for testing.
///
/// Responses are served first-in first-out; every request is recorded.
#[derive(Default)]
pub struct MockHttpTransport {
    responses: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
    request_history: Mutex<Vec<HttpRequest>>,
    default_response: Mutex<Option<HttpResponse>>,
    delay: Mutex<Option<Duration>>,
}

impl MockHttpTransport {
    /// Create new mock transport.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response to return.
    pub fn queue_response(&self, response: HttpResponse) -> &Self {
        self.responses.lock().push_back(Ok(response));
        self
    }

    /// Queue a JSON response.
    pub fn queue_json_response(&self, status: u16, body: &serde_json::Value) -> &Self {
        self.queue_response(HttpResponse {
            status,
            headers: HashMap::from([(
                "content-type".to_string(),
                "application/json".to_string(),
            )]),
            body: body.to_string(),
        })
    }

    /// Queue a plain text response.
    pub fn queue_text_response(&self, status: u16, body: &str) -> &Self {
        self.queue_response(HttpResponse {
            status,
            headers: HashMap::from([("content-type".to_string(), "text/plain".to_string())]),
            body: body.to_string(),
        })
    }

    /// Queue a transport failure.
    pub fn queue_error(&self, error: TransportError) -> &Self {
        self.responses.lock().push_back(Err(error));
        self
    }

    /// Set default response when queue is empty.
    pub fn set_default_response(&self, response: HttpResponse) -> &Self {
        *self.default_response.lock() = Some(response);
        self
    }

    /// Delay every response by `delay`.
    pub fn set_delay(&self, delay: Duration) -> &Self {
        *self.delay.lock() = Some(delay);
        self
    }

    /// Get request history.
    pub fn get_requests(&self) -> Vec<HttpRequest> {
        self.request_history.lock().clone()
    }

    /// Get last request.
    pub fn get_last_request(&self) -> Option<HttpRequest> {
        self.request_history.lock().last().cloned()
    }

    pub fn request_count(&self) -> usize {
        self.request_history.lock().len()
    }

    /// Clear request history.
    pub fn clear_history(&self) {
        self.request_history.lock().clear();
    }
}

#[async_trait]
impl HttpTransport for MockHttpTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.request_history.lock().push(request);

        let delay = *self.delay.lock();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let queued = self.responses.lock().pop_front();
        match queued {
            Some(result) => result,
            None => self
                .default_response
                .lock()
                .clone()
                .ok_or_else(|| TransportError::Connection {
                    message: "No mock response available".to_string(),
                }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_transport_serves_in_order() {
        let transport = MockHttpTransport::new();
        transport
            .queue_json_response(200, &serde_json::json!({"key": "first"}))
            .queue_text_response(500, "second");

        let first = transport
            .send(HttpRequest::new(HttpMethod::Get, "https://example.com/a"))
            .await
            .unwrap();
        let second = transport
            .send(HttpRequest::new(HttpMethod::Post, "https://example.com/b"))
            .await
            .unwrap();

        assert!(first.body.contains("first"));
        assert_eq!(second.status, 500);

        let history = transport.get_requests();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].url, "https://example.com/a");
        assert_eq!(history[1].method, HttpMethod::Post);
    }

    #[tokio::test]
    async fn test_mock_transport_empty_queue_fails() {
        let transport = MockHttpTransport::new();
        let result = transport
            .send(HttpRequest::new(HttpMethod::Get, "https://example.com"))
            .await;
        assert!(matches!(result, Err(TransportError::Connection { .. })));
    }

    #[test]
    fn test_header_lookup_ignores_case() {
        let mut request = HttpRequest::new(HttpMethod::Get, "https://example.com");
        request
            .headers
            .insert("Authorization".to_string(), "Bearer t".to_string());
        assert_eq!(request.header("authorization"), Some("Bearer t"));
    }

    #[test]
    fn test_http_method_as_str() {
        assert_eq!(HttpMethod::Get.as_str(), "GET");
        assert_eq!(HttpMethod::Post.as_str(), "POST");
        assert_eq!(HttpMethod::Put.as_str(), "PUT");
        assert_eq!(HttpMethod::Patch.as_str(), "PATCH");
        assert_eq!(HttpMethod::Delete.as_str(), "DELETE");
    }

    #[test]
    fn test_multipart_form_rejects_bad_mime() {
        let parts = vec![MultipartPart::file(
            "import-data",
            "items.zip",
            Some("not a mime"),
            vec![1, 2, 3],
        )];
        assert!(matches!(
            multipart_form(parts),
            Err(TransportError::InvalidRequest { .. })
        ));
    }
}
