//! Token acquisition, reuse and refresh

use super::*;
use integrations_its::{
    AuthError, ClientCredentialsFlowImpl, ClientCredentialsTokenManager, HttpTransport, ItsError,
    ManualClock, ReqwestHttpTransport, RequestParameters, TokenManagerConfig, TokenState,
};
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{body_string_contains, header, method, path};

#[tokio::test]
async fn test_token_reused_across_calls() {
    let server = setup_mock_server().await;
    mount_token(&server, "tok-1", 1).await;

    Mock::given(method("GET"))
        .and(path("/Timezone/Query"))
        .and(header("Authorization", "Bearer tok-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert_eq!(client.token_state(), TokenState::NoToken);

    client.system().query_timezones(RequestParameters::new()).await.unwrap();
    client.system().query_timezones(RequestParameters::new()).await.unwrap();

    assert_eq!(requests_to(&server, TOKEN_PATH).await.len(), 1);
    assert!(matches!(client.token_state(), TokenState::Valid { .. }));
}

#[tokio::test]
async fn test_token_request_is_form_encoded_client_credentials() {
    let server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("grant_type=client_credentials"))
        .and(body_string_contains("client_id=its-client"))
        .and(body_string_contains("client_secret=its-secret"))
        .respond_with(token_response("tok", 3600))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/signalr-domain/query"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    client
        .system()
        .query_signalr_domains(RequestParameters::new())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_token_refreshed_after_expiry_margin() {
    let server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(token_response("tok-1", 3600))
        .up_to_n_times(1)
        .expect(1)
        .with_priority(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(token_response("tok-2", 3600))
        .expect(1)
        .with_priority(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/Timezone/Query"))
        .and(header("Authorization", "Bearer tok-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/Timezone/Query"))
        .and(header("Authorization", "Bearer tok-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let config = config_for(&server);
    let transport: Arc<dyn HttpTransport> =
        Arc::new(ReqwestHttpTransport::new(config.timeout, &config.user_agent).unwrap());
    let flow = Arc::new(ClientCredentialsFlowImpl::new(
        config.credentials.clone(),
        config.token_timeout,
        transport.clone(),
    ));
    let clock = Arc::new(ManualClock::new(1_700_000_000_000));
    let manager = ClientCredentialsTokenManager::with_clock(
        flow,
        TokenManagerConfig::default(),
        clock.clone(),
    );
    let client = ItsClient::with_components(config, transport, Arc::new(manager));

    client.system().query_timezones(RequestParameters::new()).await.unwrap();

    // 3600 s lifetime minus the 300 s margin
    clock.advance(Duration::from_secs(3299));
    assert!(matches!(client.token_state(), TokenState::Valid { .. }));
    clock.advance(Duration::from_secs(1));
    assert_eq!(client.token_state(), TokenState::Stale);

    client.system().query_timezones(RequestParameters::new()).await.unwrap();
    assert_eq!(requests_to(&server, TOKEN_PATH).await.len(), 2);
}

#[tokio::test]
async fn test_concurrent_calls_share_one_token_request() {
    let server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(token_response("shared", 3600).set_delay(Duration::from_millis(200)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/Timezone/Query"))
        .and(header("Authorization", "Bearer shared"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(10)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let system = client.system();
    let calls = (0..10).map(|_| system.query_timezones(RequestParameters::new()));
    let results = futures::future::join_all(calls).await;

    assert!(results.iter().all(|r| r.is_ok()));
    assert_eq!(requests_to(&server, TOKEN_PATH).await.len(), 1);
}

#[tokio::test]
async fn test_rejected_credentials_surface_as_auth_error() {
    let server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"error": "invalid_client"})))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server);
    for _ in 0..2 {
        let err = client
            .system()
            .query_timezones(RequestParameters::new())
            .await
            .unwrap_err();
        match err {
            ItsError::Auth(AuthError::Rejected { status, body }) => {
                assert_eq!(status, 400);
                assert!(body.contains("invalid_client"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    assert!(requests_to(&server, "/Timezone/Query").await.is_empty());
    assert_eq!(client.token_state(), TokenState::NoToken);
}

#[tokio::test]
async fn test_missing_access_token_is_auth_error() {
    let server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token_type": "Bearer"})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .system()
        .query_timezones(RequestParameters::new())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ItsError::Auth(AuthError::MissingAccessToken { status: 200, .. })
    ));
}

#[tokio::test]
async fn test_invalidate_forces_new_token() {
    let server = setup_mock_server().await;
    mount_token(&server, "tok", 2).await;

    Mock::given(method("GET"))
        .and(path("/Timezone/Query"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.system().query_timezones(RequestParameters::new()).await.unwrap();
    client.invalidate_token();
    assert_eq!(client.token_state(), TokenState::NoToken);
    client.system().query_timezones(RequestParameters::new()).await.unwrap();
}
