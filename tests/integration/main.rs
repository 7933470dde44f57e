//! Integration tests using WireMock
//!
//! Full request cycle against a mock identity provider and ITS API: token
//! acquisition, validation, dispatch and error mapping.

mod operations;
mod raw;
mod token;

use integrations_its::{its_config, ItsClient, ItsConfig};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TOKEN_PATH: &str = "/connect/token";

/// Helper to create a mock server
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Configuration pointing both endpoints at `server`.
pub fn config_for(server: &MockServer) -> ItsConfig {
    its_config()
        .client_id("its-client")
        .client_secret("its-secret")
        .token_url(format!("{}{}", server.uri(), TOKEN_PATH))
        .base_url(server.uri())
        .build()
        .expect("valid config")
}

pub fn client_for(server: &MockServer) -> ItsClient {
    ItsClient::new(config_for(server)).expect("client builds")
}

pub fn token_response(access_token: &str, expires_in: u64) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "access_token": access_token,
        "token_type": "Bearer",
        "expires_in": expires_in,
    }))
}

/// Token endpoint answering `access_token` exactly `times` times.
pub async fn mount_token(server: &MockServer, access_token: &str, times: u64) {
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(token_response(access_token, 3600))
        .expect(times)
        .mount(server)
        .await;
}

/// Requests the server saw on `request_path`.
pub async fn requests_to(server: &MockServer, request_path: &str) -> Vec<wiremock::Request> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .into_iter()
        .filter(|r| r.url.path() == request_path)
        .collect()
}
