//! Behavioural tests for the transport dispatcher against a mock server.
//!
//! These exercise the dispatcher contract end to end: header and body
//! construction, response decoding per expected shape, and the mapping of
//! HTTP statuses and transport failures onto the error taxonomy.

use reqwest::Method;
use serde::{Deserialize, Serialize};
use vpsc_core::config::ApiConfig;
use vpsc_core::dispatch::{Dispatcher, RequestDescriptor};
use vpsc_core::error::Error;
use wiremock::matchers::{bearer_token, body_string, header, method, path};
use wiremock::{Match, Mock, MockServer, Request, ResponseTemplate};

#[derive(Debug, Serialize)]
struct CreateKey {
    name: String,
    role: i64,
}

#[derive(Debug, Deserialize, PartialEq)]
struct Key {
    id: i64,
    name: String,
}

/// Matches requests carrying no content-type header and no body bytes.
struct NoBody;

impl Match for NoBody {
    fn matches(&self, request: &Request) -> bool {
        !request.headers.contains_key("content-type") && request.body.is_empty()
    }
}

fn dispatcher(server: &MockServer) -> Dispatcher {
    let config = ApiConfig::new("test-key").with_host(server.uri());
    Dispatcher::new(config).unwrap()
}

#[tokio::test]
async fn get_sends_bearer_and_no_content_type() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api-keys"))
        .and(bearer_token("test-key"))
        .and(NoBody)
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(1)
        .mount(&server)
        .await;

    let keys: Vec<Key> = dispatcher(&server)
        .execute_collection(RequestDescriptor::new(Method::GET, "/api-keys"))
        .await
        .unwrap();
    assert!(keys.is_empty());
}

#[tokio::test]
async fn post_sends_exact_body_bytes_and_content_type() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api-keys"))
        .and(bearer_token("test-key"))
        .and(header("content-type", "application/json"))
        .and(body_string(r#"{"name":"X","role":1}"#))
        .respond_with(
            ResponseTemplate::new(201).set_body_string(r#"{"id":0,"name":"X","role":1}"#),
        )
        .expect(1)
        .mount(&server)
        .await;

    let payload = CreateKey {
        name: "X".into(),
        role: 1,
    };
    let key: Key = dispatcher(&server)
        .execute_single(RequestDescriptor::new(Method::POST, "/api-keys").with_body(&payload))
        .await
        .unwrap();
    assert_eq!(key.id, 0);
    assert_eq!(key.name, "X");
}

#[tokio::test]
async fn delete_without_body_stays_header_clean() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api-keys/0"))
        .and(bearer_token("test-key"))
        .and(NoBody)
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    dispatcher(&server)
        .execute_none(RequestDescriptor::new(Method::DELETE, "/api-keys/0"))
        .await
        .unwrap();
}

#[tokio::test]
async fn accepted_202_yields_unit() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/servers/12/power-on"))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;

    dispatcher(&server)
        .execute_none(RequestDescriptor::new(Method::POST, "/servers/12/power-on"))
        .await
        .unwrap();
}

#[tokio::test]
async fn single_with_empty_body_is_contract_violation() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api-keys/0"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let err = dispatcher(&server)
        .execute_single::<Key, ()>(RequestDescriptor::new(Method::GET, "/api-keys/0"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::ContractViolation(_)));
}

#[tokio::test]
async fn single_with_malformed_body_is_decode_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api-keys/0"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let err = dispatcher(&server)
        .execute_single::<Key, ()>(RequestDescriptor::new(Method::GET, "/api-keys/0"))
        .await
        .unwrap_err();

    let Error::DecodeFailure { body, .. } = err else {
        panic!("expected DecodeFailure, got {err:?}");
    };
    assert_eq!(body, "<html>not json</html>");
}

#[tokio::test]
async fn single_with_wrong_shape_is_decode_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api-keys/0"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"[{"id":0}]"#))
        .mount(&server)
        .await;

    let err = dispatcher(&server)
        .execute_single::<Key, ()>(RequestDescriptor::new(Method::GET, "/api-keys/0"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::DecodeFailure { .. }));
}

#[tokio::test]
async fn collection_preserves_server_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api-keys"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"[{"id":2,"name":"b"},{"id":1,"name":"a"},{"id":2,"name":"b"}]"#,
        ))
        .mount(&server)
        .await;

    let keys: Vec<Key> = dispatcher(&server)
        .execute_collection(RequestDescriptor::new(Method::GET, "/api-keys"))
        .await
        .unwrap();

    // Order and duplicates exactly as served.
    let ids: Vec<i64> = keys.iter().map(|k| k.id).collect();
    assert_eq!(ids, vec![2, 1, 2]);
}

#[tokio::test]
async fn validation_error_carries_field_detail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api-keys"))
        .respond_with(ResponseTemplate::new(400).set_body_string(
            r#"{"code":"invalid","message":"Invalid input.","errors":{"non_field_errors":[{"code":"required","message":"this field is required"}]}}"#,
        ))
        .mount(&server)
        .await;

    let payload = CreateKey {
        name: String::new(),
        role: 1,
    };
    let err = dispatcher(&server)
        .execute_single::<Key, CreateKey>(
            RequestDescriptor::new(Method::POST, "/api-keys").with_body(&payload),
        )
        .await
        .unwrap_err();

    let Error::Validation { code, errors, .. } = err else {
        panic!("expected Validation, got {err:?}");
    };
    assert_eq!(code.as_deref(), Some("invalid"));
    let items = errors.unwrap().non_field_errors.unwrap();
    assert_eq!(items[0].code.as_deref(), Some("required"));
}

#[tokio::test]
async fn http_statuses_map_to_error_kinds() {
    let cases = [
        (404, "NOT_FOUND"),
        (409, "CONFLICT"),
        (429, "RATE_LIMITED"),
        (503, "UNAVAILABLE"),
        (418, "UNEXPECTED_STATUS"),
    ];

    for (status, expected_code) in cases {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/servers/1"))
            .respond_with(ResponseTemplate::new(status).set_body_string("nope"))
            .mount(&server)
            .await;

        let err = dispatcher(&server)
            .execute_single::<Key, ()>(RequestDescriptor::new(Method::GET, "/servers/1"))
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), expected_code, "status {status}");
    }
}

#[tokio::test]
async fn unexpected_status_keeps_raw_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/servers/1"))
        .respond_with(ResponseTemplate::new(502).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let err = dispatcher(&server)
        .execute_none(RequestDescriptor::new(Method::GET, "/servers/1"))
        .await
        .unwrap_err();

    let Error::UnexpectedStatus { status, body } = err else {
        panic!("expected UnexpectedStatus, got {err:?}");
    };
    assert_eq!(status, 502);
    assert_eq!(body, "upstream exploded");
}

#[tokio::test]
async fn refused_connection_is_transport_failure() {
    // Grab a port the OS considers free, then close it again.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let config = ApiConfig::new("test-key").with_host(format!("http://127.0.0.1:{port}"));
    let err = Dispatcher::new(config)
        .unwrap()
        .execute_none(RequestDescriptor::new(Method::GET, "/servers"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Transport(_)), "got {err:?}");
    assert_eq!(err.error_code(), "TRANSPORT_FAILURE");
}
