//! Release list state: projection plus the load-more callback.

use encore_core::{project_releases, FilterPeriod, Release};
use std::fmt;

/// Callback invoked when the user requests additional results.
pub type LoadMoreFn = Box<dyn FnMut() + Send>;

/// View-state for the release list component.
///
/// Owns the raw release collection and the pagination hook; the visible
/// rows are always derived through the projection, never cached.
pub struct ReleaseListState {
    releases: Vec<Release>,
    has_more: bool,
    on_load_more: Option<LoadMoreFn>,
}

impl ReleaseListState {
    /// Create a list over a fully-loaded release collection.
    pub fn new(releases: Vec<Release>) -> Self {
        Self {
            releases,
            has_more: false,
            on_load_more: None,
        }
    }

    /// Attach a load-more callback and mark further pages available.
    pub fn with_load_more(mut self, has_more: bool, callback: LoadMoreFn) -> Self {
        self.has_more = has_more;
        self.on_load_more = Some(callback);
        self
    }

    /// The rows to render for the given filter, newest first.
    pub fn visible(&self, period: FilterPeriod) -> Vec<Release> {
        project_releases(&self.releases, period)
    }

    /// Replace the backing collection after a load-more round-trip.
    pub fn set_releases(&mut self, releases: Vec<Release>, has_more: bool) {
        self.releases = releases;
        self.has_more = has_more;
    }

    /// Whether further pages can be requested.
    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// Invoke the load-more callback, if more results are available.
    ///
    /// Returns whether a request was actually issued.
    pub fn request_more(&mut self) -> bool {
        if !self.has_more {
            return false;
        }

        if let Some(callback) = self.on_load_more.as_mut() {
            callback();
            true
        } else {
            false
        }
    }
}

impl fmt::Debug for ReleaseListState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReleaseListState")
            .field("releases", &self.releases.len())
            .field("has_more", &self.has_more)
            .field("on_load_more", &self.on_load_more.is_some())
            .finish()
    }
}
