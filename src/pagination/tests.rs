//! Tests for pagination module

use super::*;
use crate::config::{ClientConfig, RetryPolicy};
use crate::error::ErrorKind;
use crate::http::HttpClient;
use crate::output::LineSink;
use futures::StreamExt;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// NextPage Tests
// ============================================================================

#[test]
fn test_next_page_with_url() {
    let next = NextPage::with_url("https://api.example.com/page2");
    assert!(next.is_continue());
    assert!(!next.is_done());
    assert_eq!(
        next,
        NextPage::Continue {
            url: "https://api.example.com/page2".to_string()
        }
    );
}

#[test]
fn test_next_page_done() {
    let next = NextPage::Done;
    assert!(next.is_done());
    assert!(!next.is_continue());
}

// ============================================================================
// Page Decoding Tests
// ============================================================================

#[test]
fn test_page_from_json() {
    let body = json!({
        "pagination": {"limit": 20, "page": 1, "next_page": "https://api.example.com/p?page=2"},
        "content": [
            {"public_id": "EB-1", "title": "Casa en venta", "property_type": "Casa"},
            {"public_id": "EB-2", "title": "Departamento"}
        ]
    })
    .to_string();

    let page = Page::from_json(&body).unwrap();
    assert_eq!(page.content.len(), 2);
    assert_eq!(page.titles().collect::<Vec<_>>(), vec!["Casa en venta", "Departamento"]);
    assert_eq!(page.next(), NextPage::with_url("https://api.example.com/p?page=2"));
}

#[test]
fn test_page_next_done_variants() {
    let absent = Page::from_json(r#"{"content":[],"pagination":{}}"#).unwrap();
    assert!(absent.next().is_done());

    let null = Page::from_json(r#"{"content":[],"pagination":{"next_page":null}}"#).unwrap();
    assert!(null.next().is_done());

    let empty = Page::from_json(r#"{"content":[],"pagination":{"next_page":""}}"#).unwrap();
    assert!(empty.next().is_done());
}

#[test]
fn test_page_missing_title_is_empty() {
    let page =
        Page::from_json(r#"{"content":[{"title":null},{"id":7},{"title":"X"}],"pagination":{}}"#)
            .unwrap();
    assert_eq!(page.titles().collect::<Vec<_>>(), vec!["", "", "X"]);
}

#[test]
fn test_page_rejects_missing_keys() {
    let err = Page::from_json(r#"{"pagination":{}}"#).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
    assert!(err.to_string().contains("content"));

    let err = Page::from_json(r#"{"content":[]}"#).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
    assert!(err.to_string().contains("pagination"));

    let err = Page::from_json(r#"{"content":null,"pagination":{}}"#).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
}

#[test]
fn test_page_rejects_non_json() {
    assert_eq!(Page::from_json("").unwrap_err().kind(), ErrorKind::Parse);
    assert_eq!(
        Page::from_json("<html>oops</html>").unwrap_err().kind(),
        ErrorKind::Parse
    );
}

// ============================================================================
// Paginator Tests
// ============================================================================

fn client_for(server: &MockServer) -> HttpClient {
    let config = ClientConfig::new(
        "123",
        format!("{}/fakeapi", server.uri()),
        Duration::from_secs(5),
    )
    .unwrap();
    HttpClient::with_retry(config, RetryPolicy::new(3, Duration::from_millis(1))).unwrap()
}

async fn mount_chain(server: &MockServer) {
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path("/fakeapi"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "pagination": {"next_page": format!("{base}/fakeapi?page=3")},
            "content": [{"title": "Title 2"}]
        })))
        .expect(1)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/fakeapi"))
        .and(query_param("page", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "pagination": {"next_page": ""},
            "content": [{"title": "Title 3"}, {"title": "Title 4"}]
        })))
        .expect(1)
        .mount(server)
        .await;

    // Catch-all for the first page, mounted last so the query matchers win
    Mock::given(method("GET"))
        .and(path("/fakeapi"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "pagination": {"next_page": format!("{base}/fakeapi?page=2")},
            "content": [{"title": "Title 1"}]
        })))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_collect_titles_follows_chain() {
    let mock_server = MockServer::start().await;
    mount_chain(&mock_server).await;

    let client = client_for(&mock_server);
    let paginator = PropertyPaginator::new(&client);
    let titles = paginator
        .collect_titles(client.config().base_endpoint())
        .await
        .unwrap();

    assert_eq!(titles, vec!["Title 1", "Title 2", "Title 3", "Title 4"]);
}

#[tokio::test]
async fn test_print_all_into_line_sink() {
    let mock_server = MockServer::start().await;
    mount_chain(&mock_server).await;

    let client = client_for(&mock_server);
    let mut sink = LineSink::new(Vec::new());
    let summary = PropertyPaginator::new(&client)
        .print_all(&mut sink)
        .await
        .unwrap();

    assert_eq!(summary, PaginationSummary { pages: 3, titles: 4 });
    let written = String::from_utf8(sink.into_inner()).unwrap();
    assert_eq!(written, "Title 1\nTitle 2\nTitle 3\nTitle 4\n");
}

#[tokio::test]
async fn test_titles_stream_is_lazy() {
    let mock_server = MockServer::start().await;
    mount_chain(&mock_server).await;

    let client = client_for(&mock_server);
    let paginator = PropertyPaginator::new(&client);
    let mut titles = Box::pin(paginator.titles(client.config().base_endpoint()));

    assert_eq!(titles.next().await.unwrap().unwrap(), "Title 1");
    assert_eq!(mock_server.received_requests().await.unwrap().len(), 1);

    assert_eq!(titles.next().await.unwrap().unwrap(), "Title 2");
    assert_eq!(mock_server.received_requests().await.unwrap().len(), 2);

    let rest: Vec<String> = titles.map(|t| t.unwrap()).collect().await;
    assert_eq!(rest, vec!["Title 3", "Title 4"]);
    assert_eq!(mock_server.received_requests().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_single_empty_page_emits_nothing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"content": [], "pagination": {}})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let mut sink: Vec<String> = Vec::new();
    let summary = PropertyPaginator::new(&client)
        .print_all(&mut sink)
        .await
        .unwrap();

    assert_eq!(summary, PaginationSummary { pages: 1, titles: 0 });
    assert!(sink.is_empty());
}

#[tokio::test]
async fn test_parse_error_ends_stream() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(""))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let paginator = PropertyPaginator::new(&client);
    let items: Vec<_> = paginator
        .titles(client.config().base_endpoint())
        .collect()
        .await;

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].as_ref().unwrap_err().kind(), ErrorKind::Parse);
}

#[tokio::test]
async fn test_error_on_later_page_keeps_earlier_titles() {
    let mock_server = MockServer::start().await;
    let base = mock_server.uri();

    Mock::given(method("GET"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "pagination": {"next_page": format!("{base}/fakeapi?page=2")},
            "content": [{"title": "Only"}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let mut sink: Vec<String> = Vec::new();
    let err = PropertyPaginator::new(&client)
        .print_all(&mut sink)
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert_eq!(sink, vec!["Only"]);
}
