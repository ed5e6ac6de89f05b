use std::time::{Duration, Instant};

use feed_engine::{FailureKind, FetchSettings, Fetcher, ReqwestFetcher};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fetcher_with(settings: FetchSettings) -> ReqwestFetcher {
    ReqwestFetcher::new(settings).expect("client builds")
}

#[tokio::test]
async fn fetcher_returns_json_body_and_metadata() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/episode"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"results": []})))
        .mount(&server)
        .await;

    let fetcher = fetcher_with(FetchSettings::default());
    let url = format!("{}/api/episode", server.uri());

    let output = fetcher.get(&url).await.expect("fetch ok");
    assert_eq!(output.metadata.url, url);
    assert_eq!(output.metadata.status, 200);
    assert!(output
        .metadata
        .content_type
        .as_deref()
        .unwrap_or_default()
        .starts_with("application/json"));
    assert_eq!(output.bytes, br#"{"results":[]}"#);
    assert_eq!(output.metadata.byte_len, output.bytes.len() as u64);
}

#[tokio::test]
async fn fetcher_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let fetcher = fetcher_with(FetchSettings::default());
    let url = format!("{}/missing", server.uri());

    let err = fetcher.get(&url).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(404));
}

#[tokio::test]
async fn fetcher_times_out_at_the_configured_bound() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_secs(30))
                .set_body_json(serde_json::json!({})),
        )
        .mount(&server)
        .await;

    let bound = Duration::from_millis(200);
    let fetcher = fetcher_with(FetchSettings {
        request_timeout: bound,
        ..FetchSettings::default()
    });
    let url = format!("{}/slow", server.uri());

    let started = Instant::now();
    let err = fetcher.get(&url).await.unwrap_err();
    let elapsed = started.elapsed();

    assert_eq!(err.kind, FailureKind::Timeout);
    assert!(elapsed >= bound, "gave up early after {elapsed:?}");
    assert!(
        elapsed < Duration::from_secs(5),
        "gave up far too late after {elapsed:?}"
    );
}

#[tokio::test]
async fn fetcher_rejects_unexpected_content_type() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/page"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw("<html></html>", "text/html; charset=utf-8"),
        )
        .mount(&server)
        .await;

    let fetcher = fetcher_with(FetchSettings::default());
    let url = format!("{}/page", server.uri());

    let err = fetcher.get(&url).await.unwrap_err();
    assert_eq!(
        err.kind,
        FailureKind::UnsupportedContentType {
            content_type: "text/html; charset=utf-8".to_string()
        }
    );
}

#[tokio::test]
async fn fetcher_rejects_too_large_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/large"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("[0,1,2,3,4,5]", "application/json"))
        .mount(&server)
        .await;

    let fetcher = fetcher_with(FetchSettings {
        max_bytes: 10,
        ..FetchSettings::default()
    });
    let url = format!("{}/large", server.uri());

    let err = fetcher.get(&url).await.unwrap_err();
    assert_eq!(
        err.kind,
        FailureKind::TooLarge {
            max_bytes: 10,
            actual: Some(13)
        }
    );
}

#[tokio::test]
async fn fetcher_reports_invalid_url() {
    let fetcher = fetcher_with(FetchSettings::default());
    let err = fetcher.get("not a url").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidRequest);
}

#[tokio::test]
async fn fetcher_reports_unreachable_host_as_network_error() {
    // Nothing listens on port 1.
    let url = "http://127.0.0.1:1/api";
    let fetcher = fetcher_with(FetchSettings {
        request_timeout: Duration::from_secs(2),
        ..FetchSettings::default()
    });
    let err = fetcher.get(url).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Network);
}
