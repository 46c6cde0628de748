//! Main catalog client.

use crate::config::CatalogConfig;
use crate::discovery::DiscoveryClient;
use crate::error::{CatalogError, Result};
use encore_core::{Artist, Release};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Client for a static Encore release catalog.
///
/// The catalog is a tree of JSON documents and image assets under a fixed
/// base URL; the client only ever issues GET requests against predictable
/// paths.
///
/// # Example
///
/// ```ignore
/// use encore_client::{CatalogClient, CatalogConfig};
///
/// let config = CatalogConfig::new("https://releases.example.com");
/// let client = CatalogClient::new(config)?;
///
/// let years = client.discovery().available_years(2025).await?;
/// let releases = client.fetch_releases(years[0]).await?;
/// println!("{} releases in {}", releases.len(), years[0]);
/// ```
#[derive(Debug)]
pub struct CatalogClient {
    http: Client,
    base: Url,
    config: CatalogConfig,
}

impl CatalogClient {
    /// Create a new client with the given configuration.
    pub fn new(config: CatalogConfig) -> Result<Self> {
        if config.base_url.is_empty() {
            return Err(CatalogError::InvalidUrl("URL cannot be empty".into()));
        }

        // Normalize: a trailing slash would produce an empty path segment
        let trimmed = config.base_url.trim_end_matches('/');
        if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
            return Err(CatalogError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let base = Url::parse(trimmed).map_err(|e| CatalogError::InvalidUrl(e.to_string()))?;

        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("Encore/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(CatalogError::Request)?;

        Ok(Self { http, base, config })
    }

    /// The normalized catalog base URL.
    pub fn base_url(&self) -> &str {
        self.base.as_str()
    }

    /// The configuration this client was built from.
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Access year-availability discovery operations.
    pub fn discovery(&self) -> DiscoveryClient<'_> {
        DiscoveryClient::new(&self.http, self)
    }

    /// Fetch the releases recorded for a single year.
    ///
    /// A missing per-year document maps to [`CatalogError::NotFound`].
    pub async fn fetch_releases(&self, year: i32) -> Result<Vec<Release>> {
        let url = self.year_data_url(year)?;
        debug!(url = %url, year, "Fetching releases");

        let response = self.http.get(url).send().await?;
        let status = response.status();

        if status.is_success() {
            let releases: Vec<Release> = response.json().await.map_err(|e| {
                CatalogError::ParseError(format!("Failed to parse releases for {year}: {e}"))
            })?;

            debug!(year, count = releases.len(), "Fetched releases");
            Ok(releases)
        } else if status.as_u16() == 404 {
            Err(CatalogError::NotFound {
                resource: format!("releases for {year}"),
            })
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(CatalogError::ServerError {
                status: status.as_u16(),
                message,
            })
        }
    }

    /// Fetch an artist record by name.
    pub async fn fetch_artist(&self, name: &str) -> Result<Artist> {
        let url = self.endpoint(&["data", "artists", &format!("{name}.json")])?;
        debug!(url = %url, artist = %name, "Fetching artist");

        let response = self.http.get(url).send().await?;
        let status = response.status();

        if status.is_success() {
            response.json().await.map_err(|e| {
                CatalogError::ParseError(format!("Failed to parse artist {name}: {e}"))
            })
        } else if status.as_u16() == 404 {
            Err(CatalogError::NotFound {
                resource: format!("artist {name}"),
            })
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(CatalogError::ServerError {
                status: status.as_u16(),
                message,
            })
        }
    }

    /// URL of the per-year release document.
    pub(crate) fn year_data_url(&self, year: i32) -> Result<Url> {
        self.endpoint(&["data", &format!("releases_{year}.json")])
    }

    /// Build a catalog URL from path segments, percent-encoding each one.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| CatalogError::InvalidUrl("base URL cannot hold a path".into()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}
