//! Integration tests for the search
//!
//! These tests use wiremock to serve a small wiki and run the full
//! search cycle end-to-end over HTTP.

use tempfile::TempDir;
use wikipath::config::Config;
use wikipath::{run_search, SearchOutcome, SearchRequest};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration pointing at the mock wiki, cache disabled
fn create_test_config(site_base: &str, blacklist: &[&str]) -> Config {
    let mut config = Config::default();
    config.links.site_base = site_base.to_string();
    config.fetch.user_agent = "TestBot/1.0".to_string();
    config.fetch.timeout_secs = 5;
    config.fetch.use_cache = false;
    config.blacklist.pages = blacklist.iter().map(|s| s.to_string()).collect();
    config
}

/// Renders an article whose body links to each of `links`
fn article(links: &[&str]) -> String {
    let anchors: String = links
        .iter()
        .map(|l| format!(r#"<li><a href="/wiki/{}" title="{}">{}</a></li>"#, l, l, l))
        .collect();
    format!(
        r#"<html><head><title>Article</title></head><body>
        <a href="/wiki/Main_Page">Main page</a>
        <a href="/wiki/Special:Random">Random</a>
        <ul>{}</ul>
        </body></html>"#,
        anchors
    )
}

/// Mounts a wiki article on the mock server
async fn mount_article(server: &MockServer, name: &str, links: &[&str]) {
    Mock::given(method("GET"))
        .and(path(format!("/wiki/{}", name)))
        .respond_with(ResponseTemplate::new(200).set_body_raw(article(links), "text/html"))
        .mount(server)
        .await;
}

fn wiki(server: &MockServer, name: &str) -> String {
    format!("{}/wiki/{}", server.uri(), name)
}

fn found_path(outcome: &SearchOutcome) -> Vec<String> {
    outcome
        .path()
        .expect("expected a path to be found")
        .to_vec()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_full_search_finds_chain() {
    let server = MockServer::start().await;
    mount_article(&server, "Linux", &["Kernel", "Unix"]).await;
    mount_article(&server, "Kernel", &["Operating_system"]).await;
    mount_article(&server, "Unix", &["Bell_Labs"]).await;
    mount_article(&server, "Bell_Labs", &["Rutgers_University-Camden"]).await;
    mount_article(&server, "Operating_system", &[]).await;

    let config = create_test_config(&server.uri(), &["Main_Page"]);
    let request = SearchRequest::new(
        wiki(&server, "Linux"),
        wiki(&server, "Rutgers_University-Camden"),
        4,
    );

    let report = run_search(&config, &request).await.unwrap();

    assert_eq!(
        found_path(&report.outcome),
        vec![
            wiki(&server, "Linux"),
            wiki(&server, "Unix"),
            wiki(&server, "Bell_Labs"),
            wiki(&server, "Rutgers_University-Camden"),
        ]
    );
    assert_eq!(report.start, wiki(&server, "Linux"));
    // Main_Page is linked from every article
    assert!(report.stats.links_blacklisted >= 1);
}

#[tokio::test]
async fn test_blacklisted_link_never_fetched() {
    let server = MockServer::start().await;
    mount_article(&server, "A", &["B", "C"]).await;
    Mock::given(method("GET"))
        .and(path("/wiki/B"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(article(&["C"]), "text/html"))
        .expect(0)
        .mount(&server)
        .await;

    let config = create_test_config(&server.uri(), &["B", "Main_Page"]);
    let request = SearchRequest::new(wiki(&server, "A"), wiki(&server, "C"), 2);

    let report = run_search(&config, &request).await.unwrap();

    assert_eq!(
        found_path(&report.outcome),
        vec![wiki(&server, "A"), wiki(&server, "C")]
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_exhausted_graph_reports_not_found() {
    let server = MockServer::start().await;
    mount_article(&server, "A", &["B"]).await;
    mount_article(&server, "B", &["A"]).await;

    let config = create_test_config(&server.uri(), &["Main_Page"]);
    let request = SearchRequest::new(wiki(&server, "A"), wiki(&server, "Nowhere"), 5);

    let report = run_search(&config, &request).await.unwrap();

    assert_eq!(report.outcome, SearchOutcome::NotFound);
    assert_eq!(report.stats.pages_expanded, 2);
}

#[tokio::test]
async fn test_failed_and_non_html_pages_skipped() {
    let server = MockServer::start().await;
    mount_article(&server, "A", &["Missing", "Data", "B"]).await;
    mount_article(&server, "B", &["T"]).await;
    Mock::given(method("GET"))
        .and(path("/wiki/Data"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("{}", "application/json"))
        .mount(&server)
        .await;
    // "Missing" is not mounted, so the server answers 404

    let mut config = create_test_config(&server.uri(), &["Main_Page"]);
    config.search.workers = 1;
    let request = SearchRequest::new(wiki(&server, "A"), wiki(&server, "T"), 3);

    let report = run_search(&config, &request).await.unwrap();

    assert_eq!(
        found_path(&report.outcome),
        vec![wiki(&server, "A"), wiki(&server, "B"), wiki(&server, "T")]
    );
    assert_eq!(report.stats.fetch_failures, 2);
}

#[tokio::test]
async fn test_cached_pages_not_refetched() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wiki/A"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(article(&["T"]), "text/html"))
        .expect(1)
        .mount(&server)
        .await;

    let cache_dir = TempDir::new().unwrap();
    let mut config = create_test_config(&server.uri(), &["Main_Page"]);
    config.fetch.use_cache = true;
    config.fetch.cache_dir = cache_dir.path().join("pages").display().to_string();

    let request = SearchRequest::new(wiki(&server, "A"), wiki(&server, "T"), 2);

    for _ in 0..2 {
        let report = run_search(&config, &request).await.unwrap();
        assert_eq!(
            found_path(&report.outcome),
            vec![wiki(&server, "A"), wiki(&server, "T")]
        );
    }

    assert!(cache_dir.path().join("pages").is_dir());
}

#[tokio::test]
async fn test_fragment_in_target_is_ignored() {
    let server = MockServer::start().await;
    mount_article(&server, "A", &["T#History"]).await;

    let config = create_test_config(&server.uri(), &["Main_Page"]);
    let request = SearchRequest::new(
        wiki(&server, "A"),
        format!("{}#Overview", wiki(&server, "T")),
        2,
    );

    let report = run_search(&config, &request).await.unwrap();

    assert_eq!(
        found_path(&report.outcome),
        vec![wiki(&server, "A"), wiki(&server, "T")]
    );
}
