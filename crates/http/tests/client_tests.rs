//! Integration tests for the Bookshelf HTTP client

use bookshelf_core::{
    AuthenticationRequest, LoginForm, LoginOutcome, MemoryTokenStore, Navigator, Route,
    TokenStore, logout,
};
use bookshelf_http::{ApiClient, ClientError};
use serde_json::json;
use std::cell::RefCell;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Default)]
struct RecordingNavigator {
    visited: RefCell<Vec<Route>>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.visited.borrow_mut().push(route);
    }
}

impl RecordingNavigator {
    fn visited(&self) -> Vec<Route> {
        self.visited.borrow().clone()
    }
}

#[tokio::test]
async fn test_client_builder() {
    let client = ApiClient::builder()
        .base_url("http://localhost:8088/api/v1/")
        .build();

    assert!(client.is_ok());
    let client = client.unwrap();
    assert_eq!(client.base_url(), "http://localhost:8088/api/v1");
    assert!(client.token_store().is_none());
}

#[tokio::test]
async fn test_client_builder_requires_base_url() {
    let result = ApiClient::builder().build();
    assert!(matches!(result, Err(ClientError::Configuration(_))));
}

#[tokio::test]
async fn test_authenticate_posts_credentials() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/authenticate"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "email": "reader@example.com",
            "password": "secret"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": "abc123" })))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri()).unwrap();
    let response = client
        .authenticate(&AuthenticationRequest::new("reader@example.com", "secret"))
        .await
        .unwrap();

    assert_eq!(response.token.as_deref(), Some("abc123"));
}

#[tokio::test]
async fn test_token_attached_as_bearer_without_space() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/books"))
        .and(header("authorization", "Bearerabc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "content": [] })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ApiClient::builder()
        .base_url(mock_server.uri())
        .token_store(MemoryTokenStore::with_token("abc123").shared())
        .build()
        .unwrap();

    let body = client.get_json("/books").await.unwrap();
    assert_eq!(body, json!({ "content": [] }));
}

#[tokio::test]
async fn test_no_token_sends_no_authorization() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/books"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&mock_server)
        .await;

    let client = ApiClient::builder()
        .base_url(mock_server.uri())
        .token_store(MemoryTokenStore::new().shared())
        .build()
        .unwrap();

    client.get_json("/books").await.unwrap();

    let received = mock_server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
    assert!(received[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_error_handling() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/books/42"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/books"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri()).unwrap();

    let result = client.get_json("/books/42").await;
    assert!(matches!(result, Err(ClientError::NotFound(_))));

    let result = client.get_json("/books").await;
    assert!(matches!(result, Err(ClientError::AuthenticationFailed(_))));
}

#[tokio::test]
async fn test_login_flow_stores_token_and_authenticates_later_calls() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/authenticate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": "abc123" })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/books"))
        .and(header("authorization", "Bearerabc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let store = MemoryTokenStore::new().shared();
    let client = ApiClient::builder()
        .base_url(mock_server.uri())
        .token_store(store.clone())
        .build()
        .unwrap();
    let navigator = RecordingNavigator::default();

    let mut form = LoginForm::with_credentials("reader@example.com", "secret");
    let outcome = form.login(&client, store.as_ref(), &navigator).await;

    assert_eq!(outcome, LoginOutcome::Authenticated);
    assert_eq!(store.get().as_deref(), Some("abc123"));
    assert_eq!(navigator.visited(), vec![Route::Books]);

    client.get_json("/books").await.unwrap();

    logout(store.as_ref(), &navigator);
    assert_eq!(store.get(), None);
    assert_eq!(navigator.visited(), vec![Route::Books, Route::Login]);
}

#[tokio::test]
async fn test_login_flow_surfaces_validation_errors() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/authenticate"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "validationErrors": ["email required"]
        })))
        .mount(&mock_server)
        .await;

    let store = MemoryTokenStore::new().shared();
    let client = ApiClient::builder()
        .base_url(mock_server.uri())
        .token_store(store.clone())
        .build()
        .unwrap();
    let navigator = RecordingNavigator::default();

    let mut form = LoginForm::new();
    let outcome = form.login(&client, store.as_ref(), &navigator).await;

    assert_eq!(outcome, LoginOutcome::Failed);
    assert_eq!(form.errors(), ["email required".to_string()]);
    assert!(navigator.visited().is_empty());
    assert_eq!(store.get(), None);
}

#[tokio::test]
async fn test_login_flow_surfaces_error_msg() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/authenticate"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "businessErrorCode": 304,
            "errorMsg": "invalid credentials"
        })))
        .mount(&mock_server)
        .await;

    let store = MemoryTokenStore::new().shared();
    let client = ApiClient::new(mock_server.uri()).unwrap();
    let navigator = RecordingNavigator::default();

    let mut form = LoginForm::with_credentials("reader@example.com", "wrong");
    form.login(&client, store.as_ref(), &navigator).await;

    assert_eq!(form.errors(), ["invalid credentials".to_string()]);
}

#[tokio::test]
async fn test_login_flow_reports_unreachable_server() {
    let store = MemoryTokenStore::new().shared();
    let client = ApiClient::new("http://127.0.0.1:1").unwrap();
    let navigator = RecordingNavigator::default();

    let mut form = LoginForm::with_credentials("reader@example.com", "secret");
    let outcome = form.login(&client, store.as_ref(), &navigator).await;

    assert_eq!(outcome, LoginOutcome::Failed);
    assert_eq!(form.errors().len(), 1);
    assert!(form.errors()[0].starts_with("Request failed"));
}
