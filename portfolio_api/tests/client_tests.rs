use std::time::Duration;

use assert_matches::assert_matches;
use httpmock::prelude::*;
use portfolio_api::{ApiClient, ApiConfig, ApiError};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Deserialize, PartialEq)]
struct Echo {
    ok: bool,
}

#[derive(Serialize)]
struct Payload<'a> {
    name: &'a str,
}

fn client_for(server: &MockServer, timeout: Duration) -> ApiClient {
    let config = ApiConfig::new(Some(server.base_url().parse().unwrap()), timeout);
    ApiClient::new(&config).unwrap()
}

/// A JSON GET lands under `/api/` and decodes the body.
#[tokio::test]
async fn test_get_decodes_json() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/projects")
                .header("accept", "application/json");
            then.status(200).json_body(json!({ "ok": true }));
        })
        .await;

    let client = client_for(&server, Duration::from_secs(5));
    let echo: Echo = client.get(&["projects"], &[]).await.unwrap();

    assert_eq!(echo, Echo { ok: true });
    mock.assert_async().await;
}

/// POST sends the serialized body with a JSON content type.
#[tokio::test]
async fn test_post_sends_json_body() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/contact")
                .header("content-type", "application/json")
                .json_body(json!({ "name": "Sam" }));
            then.status(200).json_body(json!({ "ok": true }));
        })
        .await;

    let client = client_for(&server, Duration::from_secs(5));
    let echo: Echo = client
        .post(&["contact"], &Payload { name: "Sam" })
        .await
        .unwrap();

    assert!(echo.ok);
    mock.assert_async().await;
}

/// Error statuses keep the status code and the backend's `detail`.
#[tokio::test]
async fn test_error_status_keeps_detail() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/blog/missing");
            then.status(404)
                .json_body(json!({ "detail": "Blog post not found" }));
        })
        .await;

    let client = client_for(&server, Duration::from_secs(5));
    let result: Result<Echo, _> = client.get(&["blog", "missing"], &[]).await;

    let err = result.unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.server_message(), Some("Blog post not found"));
}

/// A non JSON error page is kept as the raw body with no detail.
#[tokio::test]
async fn test_error_status_with_html_body() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/testimonials");
            then.status(502).body("<html>Bad Gateway</html>");
        })
        .await;

    let client = client_for(&server, Duration::from_secs(5));
    let result: Result<Echo, _> = client.get(&["testimonials"], &[]).await;

    assert_matches!(
        result,
        Err(ApiError::Status { status: 502, detail: None, ref body }) if body.contains("Bad Gateway")
    );
}

/// A 200 with a body of the wrong shape is a decode failure.
#[tokio::test]
async fn test_malformed_success_body() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/projects");
            then.status(200).body("not json");
        })
        .await;

    let client = client_for(&server, Duration::from_secs(5));
    let result: Result<Echo, _> = client.get(&["projects"], &[]).await;

    assert_matches!(result, Err(ApiError::Decode(_)));
}

/// Slow responses are cut off by the configured timeout.
#[tokio::test]
async fn test_timeout_is_transport_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/");
            then.status(200)
                .delay(Duration::from_secs(2))
                .json_body(json!({ "ok": true }));
        })
        .await;

    let client = client_for(&server, Duration::from_millis(200));
    let result: Result<Echo, _> = client.get(&[], &[]).await;

    let err = result.unwrap_err();
    assert!(err.is_timeout(), "expected timeout, got {err:?}");
}

/// Query pairs are encoded onto the request.
#[tokio::test]
async fn test_query_pairs_are_sent() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/blog")
                .query_param("page", "2")
                .query_param("category", "Business Analysis");
            then.status(200).json_body(json!({ "ok": true }));
        })
        .await;

    let client = client_for(&server, Duration::from_secs(5));
    let _: Echo = client
        .get(
            &["blog"],
            &[
                ("page", "2".to_owned()),
                ("category", "Business Analysis".to_owned()),
            ],
        )
        .await
        .unwrap();

    mock.assert_async().await;
}

/// An unreachable backend is a transport error, not a panic.
#[tokio::test]
async fn test_unreachable_backend() {
    let config = ApiConfig::from_values(Some("http://127.0.0.1:9"), Some("2"));
    let client = ApiClient::new(&config).unwrap();

    let result: Result<Echo, _> = client.get(&["projects"], &[]).await;
    assert_matches!(result, Err(ApiError::Transport(_)));
}
