//! Integration tests for `GuardianClient` using wiremock HTTP mocks.

use newsq_guardian::GuardianClient;
use wiremock::matchers::{method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> GuardianClient {
    GuardianClient::with_base_url("test-key", 30, base_url)
        .expect("client construction should not fail")
}

fn result_json(title: &str, trail: &str, body: &str) -> serde_json::Value {
    serde_json::json!({
        "webPublicationDate": "2024-04-05T12:34:56Z",
        "webTitle": title,
        "webUrl": "https://www.theguardian.com/us-news/2025/apr/05/test-article",
        "fields": {
            "trailText": trail,
            "body": body
        }
    })
}

#[tokio::test]
async fn search_sends_expected_query_parameters() {
    let server = MockServer::start().await;

    let body = serde_json::json!({ "response": { "results": [] } });

    Mock::given(method("GET"))
        .and(query_param("q", "\"Technology\""))
        .and(query_param("api-key", "test-key"))
        .and(query_param("show-fields", "trailText,body"))
        .and(query_param("page-size", "10"))
        .and(query_param("order-by", "newest"))
        .and(query_param("from-date", "2024-01-01"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let date = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let articles = client
        .search_articles("Technology", Some(date))
        .await
        .expect("search should succeed");

    assert!(articles.is_empty());
}

#[tokio::test]
async fn search_omits_from_date_when_not_given() {
    let server = MockServer::start().await;

    let body = serde_json::json!({ "response": { "results": [] } });

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    client
        .search_articles("Technology", None)
        .await
        .expect("search should succeed");

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(
        !requests[0].url.query().unwrap_or("").contains("from-date"),
        "from-date should be absent: {:?}",
        requests[0].url.query()
    );
}

#[tokio::test]
async fn search_keeps_only_whole_word_matches() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "response": {
            "results": [
                result_json("Planets align over the Pacific", "", "No mention in the body."),
                result_json("Night sky watch", "A week of planets and meteors", "More below."),
                result_json("Gardening on a budget", "", "The planets never come up. Wait, yes they do: planets."),
                result_json("Planetside gaming review", "planetside again", "planetside once more"),
                result_json("Unrelated story", "Nothing here", "Nothing there")
            ]
        }
    });

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let articles = client
        .search_articles("planets", None)
        .await
        .expect("search should succeed");

    // "Planetside" is a substring, not a whole-word match; the last result
    // matches nowhere. Order is preserved from upstream.
    assert_eq!(articles.len(), 3);
    assert_eq!(articles[0].web_title, "Planets align over the Pacific");
    assert_eq!(articles[1].web_title, "Night sky watch");
    assert_eq!(articles[2].web_title, "Gardening on a budget");
}

#[tokio::test]
async fn search_truncates_body_to_preview_limit() {
    let server = MockServer::start().await;

    let long_body = format!("planets {}", "x".repeat(2500));
    let body = serde_json::json!({
        "response": { "results": [ result_json("A story", "trail", &long_body) ] }
    });

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let articles = client
        .search_articles("planets", None)
        .await
        .expect("search should succeed");

    assert_eq!(articles.len(), 1);
    assert!(articles[0].content_preview.chars().count() <= 1000);
    assert_eq!(articles[0].summary, "trail");
}

#[tokio::test]
async fn search_tolerates_results_without_fields() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "response": {
            "results": [{
                "webPublicationDate": "2024-04-05T12:34:56Z",
                "webTitle": "Planets on parade",
                "webUrl": "https://www.theguardian.com/science/planets"
            }]
        }
    });

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let articles = client
        .search_articles("planets", None)
        .await
        .expect("search should succeed");

    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0].summary, "");
    assert_eq!(articles[0].content_preview, "");
}

#[tokio::test]
async fn http_error_status_returns_err() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.search_articles("planets", None).await;
    assert!(result.is_err(), "expected Err on HTTP 500, got: {result:?}");
}

#[tokio::test]
async fn malformed_envelope_returns_deserialize_err() {
    let server = MockServer::start().await;

    let body = serde_json::json!({ "unexpected": true });

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.search_articles("planets", None).await;
    assert!(result.is_err());
    let msg = result.unwrap_err().to_string();
    assert!(
        msg.contains("deserialization"),
        "expected a deserialization error, got: {msg}"
    );
}
