//! Tests for the list capability

use super::*;
use crate::error::Error;
use crate::http::{HttpClient, HttpClientConfig};
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use test_case::test_case;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Debug, Clone, PartialEq, Deserialize)]
struct Row {
    id: u64,
    name: String,
}

fn client_for(server: &MockServer) -> HttpClient {
    let config = HttpClientConfig::builder()
        .base_url(server.uri())
        .max_retries(0)
        .timeout(Duration::from_secs(5))
        .no_rate_limit()
        .build();
    HttpClient::with_config(config).unwrap()
}

#[tokio::test]
async fn test_fetch_page_sends_page_and_limit() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/characters"))
        .and(query_param("page", "2"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{"id": 11, "name": "Gohan"}, {"id": 12, "name": "Piccolo"}],
            "meta": {"currentPage": 2, "totalPages": 6, "totalItems": 58}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let api: HttpListApi<Row> = HttpListApi::new(client_for(&mock_server), "/characters/");
    assert_eq!(api.resource(), "characters");

    let page = api.fetch_page(2, 10).await.unwrap();
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[0].name, "Gohan");
    assert_eq!(page.meta.current_page, 2);
    assert!(page.has_more());
}

#[test_case(0, 10, "page" ; "zero page")]
#[test_case(1, 0, "page_size" ; "zero page size")]
#[tokio::test]
async fn test_fetch_page_rejects_zero(page: u32, page_size: u32, field: &str) {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let api: HttpListApi<Row> = HttpListApi::new(client_for(&mock_server), "planets");
    let err = api.fetch_page(page, page_size).await.unwrap_err();

    match err {
        Error::InvalidArgument { name, .. } => assert_eq!(name, field),
        other => panic!("expected InvalidArgument, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_page_bad_shape_is_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/planets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": 1, "name": "Namek"}]
        })))
        .mount(&mock_server)
        .await;

    let api: HttpListApi<Row> = HttpListApi::new(client_for(&mock_server), "planets");
    let err = api.fetch_page(1, 10).await.unwrap_err();

    assert!(matches!(err, Error::Decode { .. }));
}

#[tokio::test]
async fn test_fetch_page_server_error_is_transport_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/planets"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let api: HttpListApi<Row> = HttpListApi::new(client_for(&mock_server), "planets");
    let err = api.fetch_page(1, 10).await.unwrap_err();

    assert!(err.is_transport());
}

#[tokio::test]
async fn test_fetch_one() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/planets/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 3, "name": "Vegeta"
        })))
        .mount(&mock_server)
        .await;

    let api: HttpListApi<Row> = HttpListApi::new(client_for(&mock_server), "planets");
    let row = api.fetch_one(3).await.unwrap();

    assert_eq!(
        row,
        Row {
            id: 3,
            name: "Vegeta".to_string()
        }
    );
}

#[tokio::test]
async fn test_fetch_one_missing_is_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/characters/404"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "message": "Character not found"
        })))
        .mount(&mock_server)
        .await;

    let api: HttpListApi<Row> = HttpListApi::new(client_for(&mock_server), "characters");
    let err = api.fetch_one(404).await.unwrap_err();

    assert!(matches!(err, Error::NotFound { id: 404, .. }));
}

#[tokio::test]
async fn test_arc_forwards_to_inner_api() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/characters"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [],
            "meta": {"currentPage": 1, "totalPages": 1}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let api: Arc<dyn ListApi<Row>> = Arc::new(HttpListApi::<Row>::new(
        client_for(&mock_server),
        "characters",
    ));
    let page = api.fetch_page(1, 10).await.unwrap();

    assert!(page.is_empty());
    assert!(!page.has_more());
}
