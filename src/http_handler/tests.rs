use super::common::HTTPError;
use super::http_client::{DEFAULT_BASE_URL, HTTPClient, shared_client};
use super::http_request::generate_post::GenerateRequest;
use super::http_request::request_common::{
    JSONBodyHTTPRequestType, NoBodyHTTPRequestType, RequestError,
};
use super::http_request::reset_post::ResetRequest;
use super::http_response::response_common::ResponseError;
use httpmock::prelude::*;
use std::sync::Arc;

#[test]
fn test_default_client_base_url() {
    let client = HTTPClient::default();
    assert_eq!(client.url(), "http://localhost:5000/");
    assert_eq!(client.url(), DEFAULT_BASE_URL);
}

#[test]
fn test_shared_client_is_one_instance() {
    let first = shared_client();
    let second = shared_client();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(first.url(), second.url());
    assert_eq!(first.url(), DEFAULT_BASE_URL);
}

#[test]
fn test_endpoint_join_collapses_slashes() {
    let trailing = HTTPClient::new("http://localhost:5000/");
    assert_eq!(trailing.join_endpoint("/generate"), "http://localhost:5000/generate");
    let bare = HTTPClient::new("http://localhost:5000");
    assert_eq!(bare.join_endpoint("/generate"), "http://localhost:5000/generate");
    assert_eq!(bare.join_endpoint("reset"), "http://localhost:5000/reset");
}

#[test]
fn test_whitespace_prompt_is_rejected() {
    assert!(matches!(GenerateRequest::new(""), Err(RequestError::EmptyPrompt)));
    assert!(matches!(GenerateRequest::new("  \t "), Err(RequestError::EmptyPrompt)));
    assert!(GenerateRequest::new("a bakery landing page").is_ok());
}

#[tokio::test]
async fn test_generate_round_trip() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/generate")
            .json_body(serde_json::json!({"prompt": "a bakery landing page"}));
        then.status(200)
            .json_body(serde_json::json!({"response": "<html><body>bakery</body></html>"}));
    });
    let client = HTTPClient::new(&server.base_url());
    let req = GenerateRequest::new("a bakery landing page").unwrap();
    let resp = req.send_request(&client).await.unwrap();
    mock.assert();
    assert_eq!(resp.markup(), "<html><body>bakery</body></html>");
}

#[tokio::test]
async fn test_reset_round_trip() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/reset");
        then.status(200).json_body(serde_json::json!({"response": "History cleared"}));
    });
    let client = HTTPClient::new(&server.base_url());
    let resp = (ResetRequest {}).send_request(&client).await.unwrap();
    mock.assert();
    assert_eq!(resp.message(), "History cleared");
}

#[tokio::test]
async fn test_server_error_maps_to_internal() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/generate");
        then.status(500);
    });
    let client = HTTPClient::new(&server.base_url());
    let req = GenerateRequest::new("a bakery landing page").unwrap();
    match req.send_request(&client).await {
        Err(HTTPError::HTTPResponseError(ResponseError::InternalServer)) => {}
        other => panic!("expected internal server error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_client_error_carries_status_and_body() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/generate");
        then.status(400).body("missing prompt");
    });
    let client = HTTPClient::new(&server.base_url());
    let req = GenerateRequest::new("a bakery landing page").unwrap();
    match req.send_request(&client).await {
        Err(HTTPError::HTTPResponseError(ResponseError::BadRequest(rejected))) => {
            assert_eq!(rejected.status(), 400);
            assert!(rejected.body().contains("missing prompt"));
        }
        other => panic!("expected bad request, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unreachable_backend_maps_to_no_connection() {
    // Port 1 is never bound in the test environment.
    let client = HTTPClient::new("http://127.0.0.1:1/");
    match (ResetRequest {}).send_request(&client).await {
        Err(HTTPError::HTTPResponseError(ResponseError::NoConnection)) => {}
        other => panic!("expected no connection, got {other:?}"),
    }
}
