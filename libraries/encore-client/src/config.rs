//! Catalog client configuration.

use serde::{Deserialize, Serialize};

/// Configuration for a [`CatalogClient`](crate::CatalogClient).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Base URL of the static catalog, e.g. `https://releases.example.com`
    pub base_url: String,

    /// Years probed in each direction around the reference year during
    /// the initial discovery phase
    #[serde(default = "default_probe_window_years")]
    pub probe_window_years: u16,

    /// Extra years probed beyond the minimum/maximum discovered years
    /// during the expansion phase
    #[serde(default = "default_expansion_margin_years")]
    pub expansion_margin_years: u16,
}

impl CatalogConfig {
    /// Create a configuration with the default probe window and margin.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            probe_window_years: default_probe_window_years(),
            expansion_margin_years: default_expansion_margin_years(),
        }
    }
}

fn default_probe_window_years() -> u16 {
    10
}

fn default_expansion_margin_years() -> u16 {
    5
}
