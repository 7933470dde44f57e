//! Raw passthrough

use super::*;
use integrations_its::{its_config, HttpMethod, ItsClient, ItsError, RawRequest, RequestParameters};
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};

#[tokio::test]
async fn test_raw_round_trip() {
    let server = setup_mock_server().await;
    mount_token(&server, "tok", 1).await;

    let body = json!({"timezones": [{"id": "UTC", "offset": 0}]});
    Mock::given(method("GET"))
        .and(path("/Timezone/Query"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client.raw("/Timezone/Query", RawRequest::get()).await.unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.json(), Some(&body));
    assert!(response.text().is_none());
}

#[tokio::test]
async fn test_raw_returns_non_success_and_text_bodies() {
    let server = setup_mock_server().await;
    mount_token(&server, "tok", 1).await;

    Mock::given(method("DELETE"))
        .and(path("/session/delete"))
        .and(query_param("session-code", "S-1"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client
        .raw(
            "/session/delete",
            RawRequest::new(HttpMethod::Delete)
                .query(RequestParameters::new().with("session-code", "S-1")),
        )
        .await
        .unwrap();

    assert_eq!(response.status, 404);
    assert_eq!(response.text(), Some("Not Found"));
    assert!(response.json().is_none());
}

#[tokio::test]
async fn test_raw_timeout() {
    let server = setup_mock_server().await;
    mount_token(&server, "tok", 1).await;

    Mock::given(method("GET"))
        .and(path("/result/query"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .raw(
            "/result/query",
            RawRequest::get().timeout(Duration::from_millis(200)),
        )
        .await
        .unwrap_err();

    assert!(err.is_timeout());
    assert!(matches!(err, ItsError::Timeout(_)));
}

#[tokio::test]
async fn test_raw_stays_on_base_url() {
    let server = setup_mock_server().await;
    mount_token(&server, "tok", 0).await;
    let collector = setup_mock_server().await;

    let client = ItsClient::new(
        its_config()
            .client_id("its-client")
            .client_secret("its-secret")
            .token_url(format!("{}{}", server.uri(), TOKEN_PATH))
            .base_url(format!("{}/its", server.uri()))
            .build()
            .unwrap(),
    )
    .unwrap();

    let foreign = client
        .raw(&format!("{}/collect", collector.uri()), RawRequest::get())
        .await
        .unwrap_err();
    assert!(matches!(foreign, ItsError::Network(_)));

    let escaped = client.raw("../admin/x", RawRequest::get()).await.unwrap_err();
    assert!(matches!(escaped, ItsError::Network(_)));

    assert!(collector.received_requests().await.unwrap_or_default().is_empty());
    assert!(requests_to(&server, "/admin/x").await.is_empty());
}
