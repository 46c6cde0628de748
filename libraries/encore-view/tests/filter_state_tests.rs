//! Integration tests for the release filter state against a mock catalog.

use encore_client::{CatalogClient, CatalogConfig};
use encore_core::FilterPeriod;
use encore_view::ReleaseFilterState;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_year(server: &MockServer, year: i32) {
    Mock::given(method("GET"))
        .and(path(format!("/data/releases_{year}.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(server)
        .await;
}

#[tokio::test]
async fn refresh_populates_years_and_clears_loading() {
    let server = MockServer::start().await;
    mount_year(&server, 2023).await;
    mount_year(&server, 2024).await;

    let client = CatalogClient::new(CatalogConfig::new(server.uri())).unwrap();
    let mut state = ReleaseFilterState::new();
    assert!(state.is_loading());

    state.refresh(&client, 2025).await;

    assert!(!state.is_loading());
    assert_eq!(state.available_years(), [2024, 2023]);
}

#[tokio::test]
async fn auto_select_fires_once_across_refreshes() {
    let server = MockServer::start().await;
    mount_year(&server, 2023).await;
    mount_year(&server, 2024).await;

    let client = CatalogClient::new(CatalogConfig::new(server.uri())).unwrap();
    let mut state = ReleaseFilterState::new();

    // User starts on "all time"; the first discovery completion defaults
    // to the newest year.
    let mut selection = FilterPeriod::AllTime;
    state.refresh(&client, 2025).await;
    if let Some(default) = state.default_selection(selection) {
        selection = default;
    }
    assert_eq!(selection, FilterPeriod::Year(2024));

    // User explicitly returns to "all time"; a second discovery
    // completion must not override it.
    selection = FilterPeriod::AllTime;
    state.refresh(&client, 2025).await;
    assert_eq!(state.default_selection(selection), None);
    assert_eq!(selection, FilterPeriod::AllTime);
}

#[tokio::test]
async fn discovery_failure_degrades_to_empty() {
    // Nothing listens here; discovery settles with no years and the
    // component leaves its loading state.
    let config = CatalogConfig {
        base_url: "http://127.0.0.1:9".into(),
        probe_window_years: 1,
        expansion_margin_years: 1,
    };
    let client = CatalogClient::new(config).unwrap();

    let mut state = ReleaseFilterState::new();
    state.refresh(&client, 2025).await;

    assert!(!state.is_loading());
    assert!(state.available_years().is_empty());
    assert_eq!(state.default_selection(FilterPeriod::AllTime), None);
}
