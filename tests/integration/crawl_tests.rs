//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and test
//! the full crawl cycle end-to-end.

use reqwest::Client;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use web_harvester::config::{Config, CrawlerConfig, ExtractConfig};
use web_harvester::crawler::{run_crawl, Coordinator, CrawlOptions, Fetcher};
use web_harvester::output::{render_report, ExtractionBundle, ReportSections};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Builds a coordinator whose fetches time out quickly
fn test_coordinator(options: CrawlOptions) -> Coordinator {
    let client = Client::builder()
        .timeout(Duration::from_millis(500))
        .build()
        .expect("Failed to build test client");
    Coordinator::new(Fetcher::with_client(client), options)
}

fn sequential() -> CrawlOptions {
    CrawlOptions::default()
}

/// Mounts an HTML page that must be fetched exactly `expected` times
async fn mount_page(server: &MockServer, route: &str, body: &str, expected: u64) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .expect(expected)
        .mount(server)
        .await;
}

fn page_urls(pages: &[web_harvester::PageResult]) -> Vec<String> {
    pages.iter().map(|page| page.url.clone()).collect()
}

#[tokio::test]
async fn test_depth_one_fetches_only_seed() {
    let server = MockServer::start().await;
    mount_page(&server, "/", r#"<a href="/child">Child</a>"#, 1).await;
    mount_page(&server, "/child", "never fetched", 0).await;

    let output = test_coordinator(sequential()).crawl(&server.uri(), 1).await;

    assert_eq!(page_urls(&output.pages), vec![server.uri()]);
    assert_eq!(output.stats.requests, 1);
    assert_eq!(output.stats.failures, 0);
}

#[tokio::test]
async fn test_zero_depth_fetches_nothing() {
    let server = MockServer::start().await;
    mount_page(&server, "/", "seed", 0).await;

    let output = test_coordinator(sequential()).crawl(&server.uri(), 0).await;

    assert!(output.pages.is_empty());
    assert!(output.xss_candidates.is_empty());
    assert_eq!(output.stats.requests, 0);
}

#[tokio::test]
async fn test_cycle_fetches_each_page_once() {
    let server = MockServer::start().await;
    mount_page(&server, "/", r#"<a href="/b">B</a>"#, 1).await;
    mount_page(&server, "/b", r#"<a href="/">Back to A</a>"#, 1).await;

    let output = test_coordinator(sequential()).crawl(&server.uri(), 2).await;

    assert_eq!(
        page_urls(&output.pages),
        vec![server.uri(), format!("{}/b", server.uri())]
    );
    assert_eq!(output.stats.requests, 2);
}

#[tokio::test]
async fn test_cycle_terminates_with_large_depth() {
    let server = MockServer::start().await;
    mount_page(&server, "/", r#"<a href="/b">B</a>"#, 1).await;
    mount_page(&server, "/b", r#"<a href="/c">C</a><a href="/">A</a>"#, 1).await;
    mount_page(&server, "/c", r#"<a href="/b">B</a><a href="/">A</a>"#, 1).await;

    let output = test_coordinator(sequential()).crawl(&server.uri(), 50).await;

    assert_eq!(output.pages.len(), 3);
    assert_eq!(output.stats.requests, 3);
    assert_eq!(output.stats.urls_visited, 3);
}

#[tokio::test]
async fn test_depth_first_pre_order() {
    let server = MockServer::start().await;
    mount_page(&server, "/", r#"<a href="/b">B</a><a href="/c">C</a>"#, 1).await;
    mount_page(&server, "/b", r#"<a href="/d">D</a>"#, 1).await;
    mount_page(&server, "/c", "leaf", 1).await;
    mount_page(&server, "/d", "leaf", 1).await;

    let output = test_coordinator(sequential()).crawl(&server.uri(), 3).await;

    let base = server.uri();
    assert_eq!(
        page_urls(&output.pages),
        vec![
            base.clone(),
            format!("{}/b", base),
            format!("{}/d", base),
            format!("{}/c", base),
        ]
    );
}

#[tokio::test]
async fn test_request_count_counts_distinct_urls() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/",
        r##"
            <a href="/b">one</a>
            <a href="/b">two</a>
            <a href="/b#section">three</a>
            <a href="mailto:someone@example.com">mail</a>
        "##,
        1,
    )
    .await;
    mount_page(&server, "/b", "leaf", 1).await;

    let output = test_coordinator(sequential()).crawl(&server.uri(), 2).await;

    assert_eq!(output.stats.requests, 2);
    assert_eq!(output.pages.len(), 2);
}

#[tokio::test]
async fn test_timeout_only_empties_failed_subtree() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/",
        r#"<a href="/slow">Slow</a><a href="/fast">Fast</a> owner@example.com"#,
        1,
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"<a href="/hidden">Hidden</a> slow@example.com"#)
                .set_delay(Duration::from_secs(3)),
        )
        .expect(1)
        .mount(&server)
        .await;
    mount_page(&server, "/fast", "fast@example.com", 1).await;
    mount_page(&server, "/hidden", "never fetched", 0).await;

    let output = test_coordinator(sequential()).crawl(&server.uri(), 3).await;

    let base = server.uri();
    assert_eq!(
        page_urls(&output.pages),
        vec![base.clone(), format!("{}/fast", base)]
    );
    assert_eq!(output.stats.requests, 3);
    assert_eq!(output.stats.failures, 1);

    let extract = ExtractConfig {
        emails: true,
        ..ExtractConfig::default()
    };
    let bundle = ExtractionBundle::aggregate(&output, &extract);
    assert!(bundle.emails.contains("owner@example.com"));
    assert!(bundle.emails.contains("fast@example.com"));
    assert!(!bundle.emails.contains("slow@example.com"));
}

#[tokio::test]
async fn test_error_status_page_is_expanded() {
    let server = MockServer::start().await;
    mount_page(&server, "/", r#"<a href="/broken">Broken</a>"#, 1).await;
    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(
            ResponseTemplate::new(500).set_body_string(r#"<a href="/status">Status page</a>"#),
        )
        .expect(1)
        .mount(&server)
        .await;
    mount_page(&server, "/status", "all good", 1).await;

    let output = test_coordinator(sequential()).crawl(&server.uri(), 3).await;

    assert_eq!(output.pages.len(), 3);
    assert_eq!(output.stats.failures, 0);
}

#[tokio::test]
async fn test_xss_candidates_collected_during_traversal() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/",
        r#"<a href="/search?q=1&foo=2">Search</a><a href="/plain">Plain</a>"#,
        1,
    )
    .await;
    mount_page(&server, "/search", "results", 1).await;
    mount_page(&server, "/plain", "plain", 1).await;

    let options = CrawlOptions {
        check_xss: true,
        ..CrawlOptions::default()
    };
    let output = test_coordinator(options).crawl(&server.uri(), 2).await;

    assert_eq!(
        output.xss_candidates,
        vec![format!("{}/search?q=1&foo=2 (q)", server.uri())]
    );
}

#[tokio::test]
async fn test_xss_disabled_collects_nothing() {
    let server = MockServer::start().await;
    mount_page(&server, "/", r#"<a href="/search?q=1">Search</a>"#, 1).await;
    mount_page(&server, "/search", "results", 1).await;

    let output = test_coordinator(sequential()).crawl(&server.uri(), 2).await;

    assert!(output.xss_candidates.is_empty());
}

#[tokio::test]
async fn test_concurrent_crawl_fetches_same_pages_once() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/",
        r#"<a href="/a">A</a><a href="/b">B</a><a href="/c">C</a>"#,
        1,
    )
    .await;
    mount_page(&server, "/a", r#"<a href="/shared">S</a><a href="/">Home</a>"#, 1).await;
    mount_page(&server, "/b", r#"<a href="/shared">S</a><a href="/a">A</a>"#, 1).await;
    mount_page(&server, "/c", r#"<a href="/shared">S</a>"#, 1).await;
    mount_page(&server, "/shared", "shared", 1).await;

    let options = CrawlOptions {
        max_concurrent_fetches: 4,
        ..CrawlOptions::default()
    };
    let output = test_coordinator(options).crawl(&server.uri(), 3).await;

    let mut urls = page_urls(&output.pages);
    urls.sort();
    let base = server.uri();
    assert_eq!(
        urls,
        vec![
            base.clone(),
            format!("{}/a", base),
            format!("{}/b", base),
            format!("{}/c", base),
            format!("{}/shared", base),
        ]
    );
    assert_eq!(output.stats.requests, 5);
}

#[tokio::test]
async fn test_cancellation_keeps_partial_results() {
    let server = MockServer::start().await;
    mount_page(&server, "/", r#"<a href="/slow">Slow</a><a href="/later">Later</a>"#, 1).await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("slow")
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;
    mount_page(&server, "/later", "never fetched", 0).await;

    let client = Client::builder()
        .timeout(Duration::from_secs(10))
        .build()
        .unwrap();
    let cancel = CancellationToken::new();
    let coordinator = Coordinator::new(Fetcher::with_client(client), CrawlOptions::default())
        .with_cancellation(cancel.clone());

    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(300)).await;
        cancel.cancel();
    });

    let output = coordinator.crawl(&server.uri(), 2).await;

    assert!(output.stats.cancelled);
    assert_eq!(page_urls(&output.pages), vec![server.uri()]);
    assert_eq!(output.stats.requests, 2);
}

#[tokio::test]
async fn test_run_crawl_deadline() {
    let server = MockServer::start().await;
    mount_page(&server, "/", r#"<a href="/slow">Slow</a>"#, 1).await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("slow")
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let config = CrawlerConfig {
        seed_url: server.uri(),
        max_depth: 2,
        crawl_deadline_secs: Some(1),
        ..CrawlerConfig::default()
    };
    let caller_token = CancellationToken::new();
    let output = run_crawl(&config, caller_token.clone()).await.unwrap();

    assert!(output.stats.cancelled);
    assert_eq!(output.pages.len(), 1);
    assert!(!caller_token.is_cancelled());
}

#[tokio::test]
async fn test_end_to_end_report() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/",
        r#"<html><body>
            <h1>Home</h1>
            <a href="/about">About</a>
            <a href="javascript:void(0)">Nothing</a>
            <p>Reach us at info@example.com</p>
        </body></html>"#,
        1,
    )
    .await;
    mount_page(
        &server,
        "/about",
        r#"<html><body>
            <h1>About</h1>
            <a href="/">Home</a>
            <p>info@example.com or jobs@example.com</p>
        </body></html>"#,
        1,
    )
    .await;

    let mut config = Config::default();
    config.crawler.seed_url = server.uri();
    config.crawler.max_depth = 2;
    config.crawler.check_xss = true;
    config.extract.emails = true;
    config.extract.links = true;
    config.extract.selector = Some("h1".to_string());

    let output = run_crawl(&config.crawler, CancellationToken::new())
        .await
        .unwrap();
    let bundle = ExtractionBundle::aggregate(&output, &config.extract);
    let report = render_report(&bundle, ReportSections::from_config(&config));

    let base = server.uri();
    let expected = format!(
        "Emails:\n\
         info@example.com\n\
         jobs@example.com\n\
         Links:\n\
         {base}/\n\
         {base}/about\n\
         Selector Data:\n\
         About\n\
         Home\n\
         Potential XSS Vulnerabilities:\n",
        base = base
    );
    assert_eq!(report, expected);
    assert_eq!(output.stats.requests, 2);
}
