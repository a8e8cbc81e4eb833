//! Tests for the HTTP client module

use super::*;
use crate::error::Error;
use crate::types::BackoffType;
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpClient {
    let config = HttpClientConfig::builder()
        .base_url(server.uri())
        .backoff(
            BackoffType::Constant,
            Duration::from_millis(10),
            Duration::from_secs(1),
        )
        .no_rate_limit()
        .build();
    HttpClient::with_config(config).unwrap()
}

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert_eq!(config.max_retries, 3);
    assert!(config.base_url.is_none());
    assert!(config.rate_limit.is_some());
    assert!(config.user_agent.starts_with("catalog-pager/"));
}

#[test]
fn test_http_client_config_builder() {
    let config = HttpClientConfig::builder()
        .base_url("https://api.example.com")
        .timeout(Duration::from_secs(60))
        .max_retries(5)
        .backoff(
            BackoffType::Linear,
            Duration::from_millis(200),
            Duration::from_secs(30),
        )
        .header("Accept-Language", "es")
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(config.base_url, Some("https://api.example.com".to_string()));
    assert_eq!(config.timeout, Duration::from_secs(60));
    assert_eq!(config.max_retries, 5);
    assert_eq!(config.backoff_type, BackoffType::Linear);
    assert_eq!(config.initial_backoff, Duration::from_millis(200));
    assert_eq!(config.max_backoff, Duration::from_secs(30));
    assert_eq!(
        config.default_headers.get("Accept-Language"),
        Some(&"es".to_string())
    );
    assert_eq!(config.user_agent, "test-agent/1.0");
}

#[test]
fn test_build_url_joins_slashes() {
    let config = HttpClientConfig::builder()
        .base_url("https://api.example.com/api/")
        .no_rate_limit()
        .build();
    let client = HttpClient::with_config(config).unwrap();

    assert_eq!(
        client.build_url("/characters"),
        "https://api.example.com/api/characters"
    );
    assert_eq!(
        client.build_url("planets"),
        "https://api.example.com/api/planets"
    );
    assert_eq!(
        client.build_url("http://other.example.com/x"),
        "http://other.example.com/x"
    );
}

#[tokio::test]
async fn test_http_client_get_json_with_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/characters"))
        .and(query_param("page", "2"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "value": 42
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let data: serde_json::Value = client
        .get_json(
            "/characters",
            &[("page", 2.to_string()), ("limit", 10.to_string())],
        )
        .await
        .unwrap();

    assert_eq!(data["value"], 42);
}

#[tokio::test]
async fn test_http_client_default_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/planets"))
        .and(header("Accept-Language", "es"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .header("Accept-Language", "es")
        .no_rate_limit()
        .build();

    let client = HttpClient::with_config(config).unwrap();
    let response = client.get("/planets", &[]).await.unwrap();

    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_http_client_404_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/characters/999"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not found"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.get("/characters/999", &[]).await.unwrap_err();

    assert!(matches!(err, Error::HttpStatus { status: 404, .. }));
}

#[tokio::test]
async fn test_http_client_invalid_json_is_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/characters"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .get_json::<serde_json::Value>("/characters", &[])
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Decode { .. }));
    assert!(!err.is_transport());
}

#[tokio::test]
async fn test_http_client_retry_on_500() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/planets"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(2)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/planets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let response = client.get("/planets", &[]).await.unwrap();

    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_http_client_rate_limit_retry() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/characters"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("retry-after", "1")
                .set_body_string("Rate limited"),
        )
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/characters"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let response = client.get("/characters", &[]).await.unwrap();

    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_http_client_max_retries_exceeded() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/characters"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Unavailable"))
        .expect(3)
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .max_retries(2)
        .backoff(
            BackoffType::Constant,
            Duration::from_millis(10),
            Duration::from_secs(1),
        )
        .no_rate_limit()
        .build();

    let client = HttpClient::with_config(config).unwrap();
    let err = client.get("/characters", &[]).await.unwrap_err();

    assert!(matches!(err, Error::HttpStatus { status: 503, .. }));
}

#[tokio::test]
async fn test_http_client_client_error_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/planets"))
        .respond_with(ResponseTemplate::new(400).set_body_string("bad limit"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.get("/planets", &[]).await.unwrap_err();

    assert!(!err.is_retryable());
    assert!(matches!(err, Error::HttpStatus { status: 400, ref body } if body == "bad limit"));
}

#[tokio::test]
async fn test_http_client_rate_limited_after_retries() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/characters"))
        .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "0"))
        .expect(2)
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .max_retries(1)
        .no_rate_limit()
        .build();

    let client = HttpClient::with_config(config).unwrap();
    let err = client.get("/characters", &[]).await.unwrap_err();

    assert!(matches!(
        err,
        Error::RateLimited {
            retry_after_seconds: 0
        }
    ));
}

#[tokio::test]
async fn test_http_client_connection_refused_is_retried() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let uri = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let config = HttpClientConfig::builder()
        .base_url(uri)
        .max_retries(1)
        .backoff(
            BackoffType::Constant,
            Duration::from_millis(1),
            Duration::from_millis(1),
        )
        .no_rate_limit()
        .build();

    let client = HttpClient::with_config(config).unwrap();
    let err = client.get("/planets", &[]).await.unwrap_err();

    assert!(matches!(err, Error::Http(_)));
    assert!(err.is_retryable());
}

#[test]
fn test_calculate_backoff_constant() {
    let config = HttpClientConfig::builder()
        .backoff(
            BackoffType::Constant,
            Duration::from_millis(100),
            Duration::from_secs(10),
        )
        .no_rate_limit()
        .build();

    let client = HttpClient::with_config(config).unwrap();

    assert_eq!(client.calculate_backoff(0), Duration::from_millis(100));
    assert_eq!(client.calculate_backoff(5), Duration::from_millis(100));
}

#[test]
fn test_calculate_backoff_linear() {
    let config = HttpClientConfig::builder()
        .backoff(
            BackoffType::Linear,
            Duration::from_millis(100),
            Duration::from_secs(10),
        )
        .no_rate_limit()
        .build();

    let client = HttpClient::with_config(config).unwrap();

    assert_eq!(client.calculate_backoff(0), Duration::from_millis(100));
    assert_eq!(client.calculate_backoff(1), Duration::from_millis(200));
    assert_eq!(client.calculate_backoff(2), Duration::from_millis(300));
}

#[test]
fn test_calculate_backoff_exponential_capped() {
    let config = HttpClientConfig::builder()
        .backoff(
            BackoffType::Exponential,
            Duration::from_millis(100),
            Duration::from_millis(500),
        )
        .no_rate_limit()
        .build();

    let client = HttpClient::with_config(config).unwrap();

    assert_eq!(client.calculate_backoff(0), Duration::from_millis(100));
    assert_eq!(client.calculate_backoff(1), Duration::from_millis(200));
    assert_eq!(client.calculate_backoff(2), Duration::from_millis(400));
    assert_eq!(client.calculate_backoff(10), Duration::from_millis(500));
    assert_eq!(client.calculate_backoff(40), Duration::from_millis(500));
}

#[test]
fn test_http_client_debug() {
    let client = HttpClient::with_config(HttpClientConfig::default()).unwrap();
    let debug_str = format!("{client:?}");
    assert!(debug_str.contains("HttpClient"));
    assert!(debug_str.contains("has_rate_limiter: true"));
}

#[tokio::test]
async fn test_http_client_with_rate_limiter() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/planets"))
        .respond_with(ResponseTemplate::new(200))
        .expect(3)
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .rate_limit(RateLimiterConfig::new(100, 10))
        .build();

    let client = HttpClient::with_config(config).unwrap();
    assert!(client.has_rate_limiter());

    for _ in 0..3 {
        let response = client.get("/planets", &[]).await.unwrap();
        assert_eq!(response.status(), 200);
    }
}
