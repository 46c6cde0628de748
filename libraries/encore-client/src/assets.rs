//! Artwork asset addressing.
//!
//! Per-artist backdrop and cover images live under a predictable path
//! convention keyed by the URL-encoded artist name. The fallback assets
//! are fixed, well-known paths used uniformly when a primary image
//! fails to load.

use crate::client::CatalogClient;
use crate::error::Result;
use url::Url;

/// Backdrop shown when an artist's own backdrop fails to load.
pub const FALLBACK_BACKDROP: &str = "/images/fallback/backdrop.jpg";

/// Cover shown when an artist's own cover fails to load.
pub const FALLBACK_COVER: &str = "/images/fallback/cover.jpg";

impl CatalogClient {
    /// URL of an artist's backdrop image.
    pub fn backdrop_url(&self, artist_name: &str) -> Result<Url> {
        self.endpoint(&["images", "artists", artist_name, "backdrop.jpg"])
    }

    /// URL of an artist's cover image.
    pub fn cover_url(&self, artist_name: &str) -> Result<Url> {
        self.endpoint(&["images", "artists", artist_name, "cover.jpg"])
    }
}
