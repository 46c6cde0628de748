//! Release filter state: discovered years and the one-time default.

use encore_client::CatalogClient;
use encore_core::FilterPeriod;
use tracing::warn;

/// View-state for the release filter dropdown.
///
/// Holds the discovered years (newest first), the loading flag, and the
/// latch guarding the one-time "default to the newest year" transition.
#[derive(Debug, Clone)]
pub struct ReleaseFilterState {
    available_years: Vec<i32>,
    loading: bool,
    default_applied: bool,
}

impl Default for ReleaseFilterState {
    fn default() -> Self {
        Self::new()
    }
}

impl ReleaseFilterState {
    /// Create an empty state, marked as loading until the first refresh.
    pub fn new() -> Self {
        Self {
            available_years: Vec::new(),
            loading: true,
            default_applied: false,
        }
    }

    /// Run year discovery and store the result.
    ///
    /// A discovery failure is logged and degrades to an empty year list;
    /// the state always leaves loading afterwards, keeping the component
    /// usable but data-less.
    pub async fn refresh(&mut self, client: &CatalogClient, reference_year: i32) {
        self.loading = true;

        match client.discovery().available_years(reference_year).await {
            Ok(years) => self.available_years = years,
            Err(error) => {
                warn!(%error, "Year discovery failed");
                self.available_years.clear();
            }
        }

        self.loading = false;
    }

    /// Apply the one-time default: the first time discovery results are
    /// consulted while the selection is still "all time", switch to the
    /// newest discovered year.
    ///
    /// Returns the new selection at most once per state instance. Later
    /// calls return `None` regardless of how the selection or the year
    /// list changes, so an explicit user choice of "all time" is never
    /// overridden.
    pub fn default_selection(&mut self, current: FilterPeriod) -> Option<FilterPeriod> {
        if self.default_applied {
            return None;
        }

        // No results delivered yet; keep the latch for the first delivery.
        let newest = *self.available_years.first()?;
        self.default_applied = true;

        (current == FilterPeriod::AllTime).then_some(FilterPeriod::Year(newest))
    }

    /// Discovered years, newest first.
    pub fn available_years(&self) -> &[i32] {
        &self.available_years
    }

    /// Whether discovery is still in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }
}
