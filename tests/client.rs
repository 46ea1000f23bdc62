use quickfeed::app::{ErrorKind, QuickfeedError};
use quickfeed::client::{ClientConfig, FeedClient, HttpFeedClient};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpFeedClient {
    let config = ClientConfig::default().with_base_url(server.uri());
    HttpFeedClient::new(&config).expect("client")
}

#[tokio::test]
async fn lists_categories_in_service_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["world", "tech", "sport"])))
        .mount(&server)
        .await;

    let categories = client_for(&server).list_categories().await.unwrap();
    assert_eq!(categories, vec!["world", "tech", "sport"]);
}

#[tokio::test]
async fn category_listing_failure_is_remote_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/categories"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = client_for(&server).list_categories().await.unwrap_err();
    assert!(matches!(err, QuickfeedError::Remote { status: 503 }));
    assert_eq!(err.kind(), ErrorKind::Remote);
}

#[tokio::test]
async fn articles_decode_and_ignore_unknown_fields() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/news/tech"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "title": "Chips &amp; Dip",
                "thumbnail": null,
                "published": "2 hours ago",
                "category": "tech",
                "link": "https://news.example/a",
                "source": "wire"
            },
            {
                "title": "Second",
                "thumbnail": "https://img.example/b.png",
                "published": "yesterday",
                "category": "tech",
                "link": "https://news.example/b"
            }
        ])))
        .mount(&server)
        .await;

    let articles = client_for(&server).list_articles("tech").await.unwrap();
    assert_eq!(articles.len(), 2);
    assert_eq!(articles[0].title, "Chips & Dip");
    assert_eq!(articles[0].thumbnail, None);
    assert_eq!(articles[1].thumbnail.as_deref(), Some("https://img.example/b.png"));
}

#[tokio::test]
async fn non_ok_article_listing_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/news/tech"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let articles = client_for(&server).list_articles("tech").await.unwrap();
    assert!(articles.is_empty());
}

#[tokio::test]
async fn malformed_article_listing_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/news/tech"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client_for(&server).list_articles("tech").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
}

#[tokio::test]
async fn summary_sends_encoded_link_and_trims() {
    let link = "https://news.example/a?id=1&ref=home";
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/scrape"))
        .and(query_param("url", link))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "summary": "  Prices rose &quot;sharply&quot;. " })),
        )
        .mount(&server)
        .await;

    let summary = client_for(&server).fetch_summary(link).await.unwrap();
    assert_eq!(summary, "Prices rose \"sharply\".");
}

#[tokio::test]
async fn summary_not_found_is_remote_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/scrape"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch_summary("https://news.example/gone")
        .await
        .unwrap_err();
    assert!(matches!(err, QuickfeedError::Remote { status: 404 }));
}

#[tokio::test]
async fn summary_without_field_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/scrape"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "text": "wrong key" })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch_summary("https://news.example/a")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
}

#[tokio::test]
async fn definition_uses_word_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/define"))
        .and(query_param("word", "sharply"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "meaning": "In a sudden way." })),
        )
        .mount(&server)
        .await;

    let meaning = client_for(&server).fetch_definition("sharply").await.unwrap();
    assert_eq!(meaning, "In a sudden way.");
}

#[tokio::test]
async fn definition_not_found_is_remote_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/define"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch_definition("zyzzyva")
        .await
        .unwrap_err();
    assert!(matches!(err, QuickfeedError::Remote { status: 404 }));
}

#[tokio::test]
async fn definition_without_meaning_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/define"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "word": "sharply" })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch_definition("sharply")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
}
