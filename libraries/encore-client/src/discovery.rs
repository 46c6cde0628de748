//! Year-availability discovery.
//!
//! The catalog publishes one release document per year. Discovery finds
//! the years that have data by probing the per-year paths: a symmetric
//! window around a reference year first, then a fixed margin beyond the
//! minimum and maximum years found. Probes within a phase run
//! concurrently and all settle before the phase completes; a failed
//! probe means "year absent", nothing more.

use crate::client::CatalogClient;
use crate::error::Result;
use futures_util::future::join_all;
use reqwest::Client;
use std::collections::BTreeSet;
use tracing::{debug, trace};
use url::Url;

/// Discovery operations for a catalog.
pub struct DiscoveryClient<'a> {
    http: &'a Client,
    catalog: &'a CatalogClient,
}

impl<'a> DiscoveryClient<'a> {
    pub(crate) fn new(http: &'a Client, catalog: &'a CatalogClient) -> Self {
        Self { http, catalog }
    }

    /// Discover the years with catalog data around `reference_year`.
    ///
    /// Returns the distinct years whose per-year document exists, sorted
    /// descending (most recent first). When the initial window finds
    /// nothing, the expansion phase is skipped and the result is empty.
    pub async fn available_years(&self, reference_year: i32) -> Result<Vec<i32>> {
        let window = i32::from(self.catalog.config().probe_window_years);
        let margin = i32::from(self.catalog.config().expansion_margin_years);

        let initial = (reference_year - window)..=(reference_year + window);
        let mut found = self.probe_phase(initial).await?;

        // Expand outward past the edge hits; nothing to expand around
        // when the window came up empty.
        if let (Some(min), Some(max)) = (found.first().copied(), found.last().copied()) {
            let earlier = (min - margin)..=(min - 1);
            let later = (max + 1)..=(max + margin);
            let expanded = self.probe_phase(earlier.chain(later)).await?;
            found.extend(expanded);
        }

        let years: Vec<i32> = found.into_iter().rev().collect();
        debug!(reference_year, ?years, "Year discovery complete");
        Ok(years)
    }

    /// Probe one candidate year; `true` iff the per-year document exists.
    ///
    /// Network errors and non-success statuses collapse to `false` and
    /// are never retried.
    pub async fn probe_year(&self, year: i32) -> Result<bool> {
        let url = self.catalog.year_data_url(year)?;
        Ok(self.probe(year, url).await)
    }

    /// Run all probes for one phase concurrently and join the hits.
    async fn probe_phase(&self, years: impl Iterator<Item = i32>) -> Result<BTreeSet<i32>> {
        let mut probes = Vec::new();
        for year in years {
            let url = self.catalog.year_data_url(year)?;
            probes.push(async move { self.probe(year, url).await.then_some(year) });
        }

        Ok(join_all(probes).await.into_iter().flatten().collect())
    }

    async fn probe(&self, year: i32, url: Url) -> bool {
        match self.http.get(url).send().await {
            Ok(response) => {
                let status = response.status();
                let hit = status.is_success();
                trace!(year, %status, hit, "Year probe settled");
                hit
            }
            Err(error) => {
                trace!(year, %error, "Year probe failed");
                false
            }
        }
    }
}
