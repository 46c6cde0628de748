//! Tests for year-availability discovery.
//!
//! Each test simulates a static catalog with a mock server: a mounted
//! per-year document means the year exists, everything else 404s.

use encore_client::{CatalogClient, CatalogConfig};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_year(server: &MockServer, year: i32) {
    Mock::given(method("GET"))
        .and(path(format!("/data/releases_{year}.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(server)
        .await;
}

fn client_for(server: &MockServer) -> CatalogClient {
    CatalogClient::new(CatalogConfig::new(server.uri())).unwrap()
}

#[tokio::test]
async fn finds_years_inside_the_window() {
    let server = MockServer::start().await;
    mount_year(&server, 2022).await;
    mount_year(&server, 2023).await;
    // At the forward edge of the window, reachable without expansion
    mount_year(&server, 2030).await;

    let client = client_for(&server);
    let years = client.discovery().available_years(2025).await.unwrap();

    assert_eq!(years, vec![2030, 2023, 2022]);
}

#[tokio::test]
async fn expansion_reaches_past_the_window() {
    let server = MockServer::start().await;
    // Edge of the initial window around 2025
    mount_year(&server, 2035).await;
    // Outside the window, only reachable through the expansion phase
    mount_year(&server, 2037).await;

    let client = client_for(&server);
    let years = client.discovery().available_years(2025).await.unwrap();

    assert_eq!(years, vec![2037, 2035]);
}

#[tokio::test]
async fn empty_catalog_skips_expansion() {
    let server = MockServer::start().await;

    let client = client_for(&server);
    let years = client.discovery().available_years(2025).await.unwrap();

    assert!(years.is_empty());

    // Only the initial window was probed: 10 back + 10 forward + the
    // reference year itself.
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 21);
}

#[tokio::test]
async fn non_success_status_means_absent() {
    let server = MockServer::start().await;
    mount_year(&server, 2023).await;
    Mock::given(method("GET"))
        .and(path("/data/releases_2024.json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let years = client.discovery().available_years(2025).await.unwrap();

    assert_eq!(years, vec![2023]);
}

#[tokio::test]
async fn unreachable_catalog_yields_no_years() {
    // Nothing listens on this port; every probe fails to connect.
    let config = CatalogConfig {
        base_url: "http://127.0.0.1:9".into(),
        probe_window_years: 2,
        expansion_margin_years: 1,
    };
    let client = CatalogClient::new(config).unwrap();

    let years = client.discovery().available_years(2025).await.unwrap();
    assert!(years.is_empty());
}

#[tokio::test]
async fn window_and_margin_are_configurable() {
    let server = MockServer::start().await;
    mount_year(&server, 2024).await;

    let config = CatalogConfig {
        base_url: server.uri(),
        probe_window_years: 2,
        expansion_margin_years: 1,
    };
    let client = CatalogClient::new(config).unwrap();

    let years = client.discovery().available_years(2025).await.unwrap();
    assert_eq!(years, vec![2024]);

    // Initial window [2023, 2027] plus expansion probes at 2023 and 2025.
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 7);
}

#[tokio::test]
async fn single_probe_reports_existence() {
    let server = MockServer::start().await;
    mount_year(&server, 2024).await;

    let client = client_for(&server);
    assert!(client.discovery().probe_year(2024).await.unwrap());
    assert!(!client.discovery().probe_year(2020).await.unwrap());
}
