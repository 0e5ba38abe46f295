//! Integration tests for `BingNewsSource` using wiremock HTTP mocks.

use newslens_analysis::{AnalysisError, Analyzer, ArticleSource, BingNewsSource};
use newslens_core::Taxonomy;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FEED: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<rss version="2.0"><channel><title>Tesla latest news - Bing News</title>
<item><title>Tesla recall issued for battery fault</title>
<link>https://example.com/recall</link>
<description>The &lt;b&gt;recall&lt;/b&gt; covers older models.</description></item>
<item><title>Tesla unveils new AI interface</title>
<link>https://example.com/interface</link>
<description>A redesigned dashboard ships next month.</description></item>
<item><title>Tesla faces backlash over factory safety</title>
<link>https://example.com/factory</link></item>
</channel></rss>"#;

fn test_source(server: &MockServer, max_articles: usize) -> BingNewsSource {
    BingNewsSource::new(
        &format!("{}/news/search", server.uri()),
        5,
        "newslens-test",
        max_articles,
        200,
    )
    .expect("client construction should not fail")
}

async fn mount_feed(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/news/search"))
        .and(query_param("q", "Tesla latest news"))
        .and(query_param("format", "rss"))
        .respond_with(ResponseTemplate::new(200).set_body_string(FEED))
        .mount(server)
        .await;
}

#[tokio::test]
async fn fetch_articles_parses_feed_items() {
    let server = MockServer::start().await;
    mount_feed(&server).await;

    let articles = test_source(&server, 10)
        .fetch_articles("Tesla")
        .await
        .expect("should fetch articles");

    assert_eq!(articles.len(), 3);
    assert_eq!(
        articles[0].title.as_deref(),
        Some("Tesla recall issued for battery fault")
    );
    assert_eq!(
        articles[0].summary.as_deref(),
        Some("The recall covers older models.")
    );
    assert_eq!(articles[2].summary, None);
}

#[tokio::test]
async fn fetch_articles_respects_max_articles() {
    let server = MockServer::start().await;
    mount_feed(&server).await;

    let articles = test_source(&server, 2)
        .fetch_articles("Tesla")
        .await
        .expect("should fetch articles");

    assert_eq!(articles.len(), 2);
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let result = test_source(&server, 10).fetch_articles("Tesla").await;

    assert!(
        matches!(result, Err(AnalysisError::UnexpectedStatus { status: 503, .. })),
        "unexpected result: {result:?}"
    );
}

#[tokio::test]
async fn malformed_feed_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<rss><item><title>x</item>"))
        .mount(&server)
        .await;

    let result = test_source(&server, 10).fetch_articles("Tesla").await;

    assert!(matches!(result, Err(AnalysisError::Xml(_))));
}

#[tokio::test]
async fn analyzer_reports_on_fetched_feed() {
    let server = MockServer::start().await;
    mount_feed(&server).await;

    let analyzer = Analyzer::new(&Taxonomy::builtin()).expect("builtin taxonomy");
    let report = analyzer
        .analyze_company(&test_source(&server, 10), "Tesla")
        .await;

    assert_eq!(report.articles.len(), 3);
    assert_eq!(report.articles[1].topics, vec!["Technology"]);
    let score = report
        .comparative_sentiment_score
        .expect("non-empty batch has scores");
    assert_eq!(score.topic_overlap.common_topics, vec!["Manufacturing", "Safety"]);
}

#[tokio::test]
async fn unreachable_feed_degrades_to_empty_report() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let analyzer = Analyzer::new(&Taxonomy::builtin()).expect("builtin taxonomy");
    let report = analyzer
        .analyze_company(&test_source(&server, 10), "Tesla")
        .await;

    assert!(report.articles.is_empty());
    assert_eq!(report.final_sentiment_analysis, "No data available");
}
