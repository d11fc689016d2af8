//! HttpEventSource against a mock HTTP server

use mockito::Matcher;
use smartcity_server::client::{EventListView, EventSource, FetchError, HttpEventSource, ListDisplay};

#[tokio::test]
async fn test_fetch_sends_query_and_parses_page() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v1/events")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page".into(), "2".into()),
            Matcher::UrlEncoded("limit".into(), "12".into()),
            Matcher::UrlEncoded("category".into(), "concert".into()),
            Matcher::UrlEncoded("dateRange".into(), "upcoming".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "events": [{
                    "_id": "3d5b7b8e-1c52-4a4c-8f0e-5b7a1f6d9c11",
                    "title": "Symphony Under the Stars",
                    "startDate": "2024-07-20T19:00:00Z",
                    "endDate": "2024-07-20T22:00:00Z",
                    "category": "concert",
                    "location": {"type": "online"}
                }],
                "pagination": {"page": 2, "limit": 12, "total": 13, "pages": 2}
            }"#,
        )
        .create_async()
        .await;

    let source = HttpEventSource::new(&format!("{}/api/v1", server.url()));
    let mut view = EventListView::new();
    view.set_category("concert");
    let ticket = view.begin_fetch();
    let mut params = ticket.params.clone();
    params.insert("page", "2".to_string());

    let page = source.fetch_events(&params).await.unwrap();
    mock.assert_async().await;
    assert_eq!(page.total, 13);
    assert_eq!(page.pages, 2);
    assert_eq!(page.events[0].title, "Symphony Under the Stars");
}

#[tokio::test]
async fn test_partial_payload_defaults() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/events")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"events": []}"#)
        .create_async()
        .await;

    let source = HttpEventSource::new(&server.url());
    let mut view = EventListView::new();
    view.refresh(&source).await;

    assert_eq!(view.error(), None);
    assert_eq!(view.total(), 0);
    assert_eq!(view.pages(), 1);
    assert_eq!(view.display(), ListDisplay::Empty);
}

#[tokio::test]
async fn test_non_success_status() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/events")
        .match_query(Matcher::Any)
        .with_status(502)
        .with_body("Bad Gateway")
        .create_async()
        .await;

    let source = HttpEventSource::new(&server.url());
    let view = EventListView::new();
    let result = source.fetch_events(&view.query_params()).await;
    assert!(matches!(result, Err(FetchError::Status(502))));
}

#[tokio::test]
async fn test_invalid_body() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/events")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    let source = HttpEventSource::new(&server.url());
    let view = EventListView::new();
    let result = source.fetch_events(&view.query_params()).await;
    assert!(matches!(result, Err(FetchError::Decode(_))));
}
