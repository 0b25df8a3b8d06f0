//! Unit tests for the request dispatcher against a mock server

use apic_providers::{ApiClient, AuthScheme, Error, NO_PARAMS, PostEncoding};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use mockito::{Matcher, Server};
use serde_json::json;

fn plain_client(url: &str) -> ApiClient {
    ApiClient::new("plain", AuthScheme::None, [("url", url)]).expect("Failed to create client")
}

fn basic_client(url: &str) -> ApiClient {
    ApiClient::new(
        "basic",
        AuthScheme::Basic,
        [("url", url), ("username", "alice"), ("password", "s3cret")],
    )
    .expect("Failed to create client")
}

#[test]
fn test_construction_requires_scheme_keys() {
    let result = ApiClient::new("basic", AuthScheme::Basic, [("url", "https://api.test")]);
    assert!(matches!(result, Err(Error::Configuration { .. })));

    let result = ApiClient::new("plain", AuthScheme::None, [("url", "")]);
    assert!(matches!(result, Err(Error::Configuration { .. })));
}

#[test]
fn test_header_value_is_validated_at_construction() {
    let result = ApiClient::new(
        "gateway",
        AuthScheme::ApiKey,
        [("url", "https://api.test"), ("api_key", "bad\nkey")],
    );
    assert!(matches!(result, Err(Error::Configuration { .. })));
}

#[test]
fn test_build_url_uses_credential_base() {
    let client = plain_client("https://api.test/");
    assert_eq!(client.build_url("/v1/users"), "https://api.test/v1/users");
    assert_eq!(client.name(), "plain");
}

#[test]
fn test_get_sends_json_headers_and_query() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/v1/users")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page".into(), "2".into()),
            Matcher::UrlEncoded("sort".into(), "name".into()),
        ]))
        .match_header("accept", "application/json")
        .match_header("content-type", "application/json")
        .match_header("x-api-key", Matcher::Missing)
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_header("x-request-id", "req-1")
        .with_body(r#"{"users": []}"#)
        .create();

    let client = plain_client(&server.url());
    let response = client
        .get("/v1/users", &[("page", "2"), ("sort", "name")])
        .unwrap();

    mock.assert();
    assert_eq!(response.status(), 200);
    assert!(response.is_success());
    assert_eq!(response.header("X-Request-Id"), Some("req-1"));
    assert!(response.url().starts_with(&format!("{}/v1/users", server.url())));
    assert_eq!(response.data()["users"], json!([]));
}

#[test]
fn test_get_without_params_sends_no_query() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/health")
        .with_status(200)
        .with_body("ok")
        .create();

    let response = plain_client(&server.url()).get("health", NO_PARAMS).unwrap();

    mock.assert();
    assert_eq!(response.body(), "ok");
    assert!(response.data().is_empty());
}

#[test]
fn test_post_json_body() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/v1/users")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({"name": "alice", "admin": true})))
        .with_status(201)
        .with_body(r#"{"id": 7}"#)
        .create();

    let response = plain_client(&server.url())
        .post(
            "v1/users",
            &json!({"name": "alice", "admin": true}),
            PostEncoding::Json,
        )
        .unwrap();

    mock.assert();
    assert_eq!(response.status(), 201);
    assert_eq!(response.data()["id"], json!(7));
}

#[test]
fn test_post_form_body() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/oauth/token")
        .match_header("content-type", "application/x-www-form-urlencoded")
        .match_header("accept", "application/json")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("grant_type".into(), "client_credentials".into()),
            Matcher::UrlEncoded("scope".into(), "read write".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"access_token": "t"}"#)
        .create();

    let response = plain_client(&server.url())
        .post(
            "/oauth/token",
            &[("grant_type", "client_credentials"), ("scope", "read write")],
            PostEncoding::Form,
        )
        .unwrap();

    mock.assert();
    assert_eq!(response.data()["access_token"], json!("t"));
}

#[test]
fn test_delete_sends_params_as_json_body() {
    let mut server = Server::new();
    let mock = server
        .mock("DELETE", "/v1/users/7")
        .match_body(Matcher::Json(json!({"reason": "duplicate"})))
        .with_status(204)
        .create();

    let response = plain_client(&server.url())
        .delete("/v1/users/7", &json!({"reason": "duplicate"}))
        .unwrap();

    mock.assert();
    assert_eq!(response.status(), 204);
    assert!(response.data().is_empty());
}

#[test]
fn test_delete_without_params_sends_no_body() {
    let mut server = Server::new();
    let mock = server
        .mock("DELETE", "/v1/users/7")
        .match_body(Matcher::Exact(String::new()))
        .with_status(204)
        .create();

    plain_client(&server.url())
        .delete("v1/users/7", NO_PARAMS)
        .unwrap();

    mock.assert();
}

#[test]
fn test_basic_auth_is_transport_level() {
    let mut server = Server::new();
    let expected = format!("Basic {}", STANDARD.encode("alice:s3cret"));
    let mock = server
        .mock("GET", "/v1/me")
        .match_header("authorization", expected.as_str())
        .match_header("accept", "application/json")
        .match_header("x-api-key", Matcher::Missing)
        .match_header("username", Matcher::Missing)
        .match_header("password", Matcher::Missing)
        .with_status(200)
        .with_body(r#"{"user": "alice"}"#)
        .expect(3)
        .create();

    let client = basic_client(&server.url());
    for path in ["/v1/me", "v1/me", "//v1/me"] {
        let response = client.get(path, NO_PARAMS).unwrap();
        assert_eq!(response.data()["user"], json!("alice"));
    }

    mock.assert();
}

#[test]
fn test_basic_headers_carry_no_credentials() {
    let client = basic_client("https://api.test");
    assert!(
        client
            .headers()
            .iter()
            .all(|(name, value)| !name.eq_ignore_ascii_case("authorization")
                && !value.contains("alice"))
    );
}

#[test]
fn test_error_statuses_are_returned_not_raised() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/missing")
        .with_status(404)
        .with_body(r#"{"message": "not found"}"#)
        .create();

    let response = plain_client(&server.url()).get("missing", NO_PARAMS).unwrap();
    assert_eq!(response.status(), 404);
    assert!(!response.is_success());
}

#[test]
fn test_transport_failure_is_network_error() {
    let client = plain_client("http://127.0.0.1:1");
    let error = client.get("anything", NO_PARAMS).unwrap_err();
    assert!(matches!(error, Error::Network { .. }));
}

#[test]
fn test_unencodable_parameters_are_not_sent() {
    let mut server = Server::new();
    let mock = server.mock("GET", Matcher::Any).expect(0).create();
    let form_mock = server.mock("POST", Matcher::Any).expect(0).create();
    let client = plain_client(&server.url());

    let nested = json!({"filter": {"status": "open"}});
    let error = client.get("invoices", &nested).unwrap_err();
    assert!(error.is_configuration());

    let error = client.post("invoices", &nested, PostEncoding::Form).unwrap_err();
    assert!(error.is_configuration());

    mock.assert();
    form_mock.assert();
}
