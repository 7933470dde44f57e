//! Validated operations

use super::*;
use integrations_its::{
    catalog, its_config, ItsError, MultipartPart, ParamRequirement, RequestParameters,
    ViolationKind,
};
use pretty_assertions::assert_eq;
use wiremock::matchers::{header, header_regex, method, path};

#[tokio::test]
async fn test_event_class_business_rule_violation() {
    let server = setup_mock_server().await;
    mount_token(&server, "tok", 1).await;

    Mock::given(method("GET"))
        .and(path("/event-class/Query"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({"ErrorMessage": "no classes"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let params = RequestParameters::new()
        .with("program-id", "238")
        .with("program-institution-id", "1009048")
        .with("event-id", "3");

    let err = client.event_classes().query(params.clone()).await.unwrap_err();

    match err {
        ItsError::Api(e) => {
            assert_eq!(e.status, 422);
            assert_eq!(e.method, "GET");
            assert_eq!(e.endpoint, "/event-class/Query");
            assert_eq!(e.params, params);
            assert!(e.to_string().contains("no classes"));
            assert_eq!(e.server_message().as_deref(), Some("no classes"));
            assert!(e.is_business_rule_violation());
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_api_error_keeps_server_body_verbatim() {
    let server = setup_mock_server().await;
    mount_token(&server, "tok", 1).await;

    let raw = "{\"ErrorMessage\": \"no classes\", \"Code\": 7}";
    Mock::given(method("GET"))
        .and(path("/event-class/Query"))
        .respond_with(ResponseTemplate::new(422).set_body_raw(raw, "application/json"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .event_classes()
        .query(
            RequestParameters::new()
                .with("program-id", "238")
                .with("program-institution-id", "1009048")
                .with("event-id", "3"),
        )
        .await
        .unwrap_err();

    match err {
        ItsError::Api(e) => {
            assert_eq!(e.body, raw);
            assert_eq!(e.server_message().as_deref(), Some("no classes"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_missing_program_id_never_reaches_network() {
    let server = setup_mock_server().await;
    let client = client_for(&server);

    let err = client
        .event_classes()
        .query(
            RequestParameters::new()
                .with("program-institution-id", "1009048")
                .with("event-id", "3"),
        )
        .await
        .unwrap_err();

    match err {
        ItsError::Validation(e) => {
            assert_eq!(e.parameter, "program-id");
            assert_eq!(e.kind, ViolationKind::Missing);
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(server.received_requests().await.unwrap_or_default().is_empty());
}

#[tokio::test]
async fn test_program_id_checked_on_every_catalog_operation() {
    let server = setup_mock_server().await;
    let client = client_for(&server);

    for descriptor in catalog::all()
        .iter()
        .filter(|d| d.program_id == ParamRequirement::Required)
    {
        let err = client
            .call(descriptor.operation_id, RequestParameters::new(), None)
            .await
            .unwrap_err();
        match err {
            ItsError::Validation(e) => assert_eq!(e.parameter, "program-id"),
            other => panic!("{}: unexpected error: {:?}", descriptor.operation_id, other),
        }
    }

    assert!(server.received_requests().await.unwrap_or_default().is_empty());
}

#[tokio::test]
async fn test_exactly_one_event_identifier() {
    let server = setup_mock_server().await;
    let client = client_for(&server);
    let base = RequestParameters::new()
        .with("program-id", "238")
        .with("program-institution-id", "1009048");

    let neither = client
        .events()
        .query_authorizations(base.clone())
        .await
        .unwrap_err();
    let both = client
        .events()
        .query_authorizations(
            base.clone()
                .with("event-id", "1")
                .with("event-description", "Spring"),
        )
        .await
        .unwrap_err();

    match (neither, both) {
        (ItsError::Validation(a), ItsError::Validation(b)) => {
            assert_eq!(a.kind, ViolationKind::NeitherSupplied);
            assert_eq!(b.kind, ViolationKind::Conflicting);
            assert_ne!(a.message, b.message);
        }
        other => panic!("unexpected errors: {:?}", other),
    }
    assert!(server.received_requests().await.unwrap_or_default().is_empty());
}

#[tokio::test]
async fn test_path_casing_is_preserved() {
    let server = setup_mock_server().await;
    mount_token(&server, "tok", 1).await;

    Mock::given(method("GET"))
        .and(path("/package/forms/Query"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"formId": 1}])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/package/forms/query"))
        .respond_with(ResponseTemplate::new(404))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client
        .packages()
        .query_forms(
            RequestParameters::new()
                .with("program-id", "238")
                .with("program-institution-id", "1009048")
                .with("package-code", "PKG"),
        )
        .await
        .unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.json(), Some(&json!([{"formId": 1}])));
}

#[tokio::test]
async fn test_list_parameters_are_repeated() {
    let server = setup_mock_server().await;
    mount_token(&server, "tok", 1).await;

    Mock::given(method("GET"))
        .and(path("/examinee/query"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    client
        .examinees()
        .query(
            RequestParameters::new()
                .with("program-id", "238")
                .with("examinee-id", vec!["E-1", "E-2"]),
        )
        .await
        .unwrap();

    let sent = requests_to(&server, "/examinee/query").await;
    assert_eq!(sent.len(), 1);
    let ids: Vec<String> = sent[0]
        .url
        .query_pairs()
        .filter(|(k, _)| k == "examinee-id")
        .map(|(_, v)| v.into_owned())
        .collect();
    assert_eq!(ids, vec!["E-1".to_string(), "E-2".to_string()]);
}

#[tokio::test]
async fn test_configured_defaults_are_injected() {
    let server = setup_mock_server().await;
    mount_token(&server, "tok", 1).await;

    Mock::given(method("GET"))
        .and(path("/session/query"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let config = its_config()
        .client_id("its-client")
        .client_secret("its-secret")
        .token_url(format!("{}{}", server.uri(), TOKEN_PATH))
        .base_url(server.uri())
        .default_program_id("238")
        .build()
        .unwrap();
    let client = ItsClient::new(config).unwrap();

    client.sessions().query(RequestParameters::new()).await.unwrap();

    let sent = requests_to(&server, "/session/query").await;
    assert_eq!(sent[0].url.query(), Some("program-id=238"));
}

#[tokio::test]
async fn test_event_creation_body() {
    let server = setup_mock_server().await;
    mount_token(&server, "tok", 1).await;

    Mock::given(method("POST"))
        .and(path("/event/create"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"eventId": 77})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let params = RequestParameters::new().with("program-id", "238");

    let err = client
        .events()
        .create(params.clone(), json!({"eventName": "Spring"}))
        .await
        .unwrap_err();
    match err {
        ItsError::Validation(e) => assert_eq!(e.parameter, "eventDescription"),
        other => panic!("unexpected error: {:?}", other),
    }

    let response = client
        .events()
        .create(
            params,
            json!({"eventName": "Spring", "eventDescription": "Spring window"}),
        )
        .await
        .unwrap();
    assert_eq!(response.status, 201);
}

#[tokio::test]
async fn test_item_workshop_import_is_multipart() {
    let server = setup_mock_server().await;
    mount_token(&server, "tok", 1).await;

    Mock::given(method("POST"))
        .and(path("/iw-tool/import/import"))
        .and(header_regex("content-type", "^multipart/form-data"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"importId": "I-1"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let parts = vec![MultipartPart::file(
        "import-data",
        "items.zip",
        Some("application/zip"),
        b"PK\x03\x04".to_vec(),
    )];

    let response = client
        .item_workshop()
        .import(
            RequestParameters::new()
                .with("bank-id", "B1")
                .with("language", "en")
                .with("folder-id", "F1"),
            parts,
        )
        .await
        .unwrap();

    assert_eq!(response.json(), Some(&json!({"importId": "I-1"})));
    let sent = requests_to(&server, "/iw-tool/import/import").await;
    assert!(!sent[0].url.query().unwrap_or_default().contains("program-id"));
}

#[tokio::test]
async fn test_server_error_is_retryable() {
    let server = setup_mock_server().await;
    mount_token(&server, "tok", 1).await;

    Mock::given(method("GET"))
        .and(path("/Test/Query"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .testing()
        .query_tests(RequestParameters::new().with("program-id", "238"))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(503));
    assert!(err.is_retryable());
    match err {
        ItsError::Api(e) => assert_eq!(e.body, "maintenance"),
        other => panic!("unexpected error: {:?}", other),
    }
}
