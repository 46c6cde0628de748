//! Artist detail page state.

use crate::image::ImageSlot;
use encore_client::{FALLBACK_BACKDROP, FALLBACK_COVER};
use encore_core::{project_releases, Artist, FilterPeriod, Release};

/// View-state for one artist detail page.
///
/// Owns the backdrop and cover [`ImageSlot`]s and the artist's releases,
/// pre-sorted newest first for rendering.
#[derive(Debug, Clone)]
pub struct ArtistDetailState {
    artist: Artist,
    backdrop: ImageSlot,
    cover: ImageSlot,
    releases: Vec<Release>,
}

impl ArtistDetailState {
    /// Build the page state from a fetched artist record.
    ///
    /// Artists without their own artwork paths render the fallback assets
    /// from the start.
    pub fn new(artist: Artist) -> Self {
        let backdrop = ImageSlot::new(
            artist
                .backdrop_image
                .clone()
                .unwrap_or_else(|| FALLBACK_BACKDROP.to_string()),
            FALLBACK_BACKDROP,
        );
        let cover = ImageSlot::new(
            artist
                .cover_image
                .clone()
                .unwrap_or_else(|| FALLBACK_COVER.to_string()),
            FALLBACK_COVER,
        );
        let releases = project_releases(&artist.releases, FilterPeriod::AllTime);

        Self {
            artist,
            backdrop,
            cover,
            releases,
        }
    }

    /// The artist record this page renders.
    pub fn artist(&self) -> &Artist {
        &self.artist
    }

    /// Backdrop image slot.
    pub fn backdrop(&self) -> &ImageSlot {
        &self.backdrop
    }

    /// Backdrop image slot, for reporting a load failure.
    pub fn backdrop_mut(&mut self) -> &mut ImageSlot {
        &mut self.backdrop
    }

    /// Cover image slot.
    pub fn cover(&self) -> &ImageSlot {
        &self.cover
    }

    /// Cover image slot, for reporting a load failure.
    pub fn cover_mut(&mut self) -> &mut ImageSlot {
        &mut self.cover
    }

    /// The artist's releases, newest first.
    pub fn releases(&self) -> &[Release] {
        &self.releases
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn release(id: &str, year: i32) -> Release {
        Release {
            id: id.into(),
            title: format!("Release {id}"),
            artist: "Aurora Drift".into(),
            release_date: NaiveDate::from_ymd_opt(year, 6, 1).unwrap(),
        }
    }

    fn artist() -> Artist {
        Artist {
            name: "Aurora Drift".into(),
            color: Some(0x4A_A3_5A),
            backdrop_image: Some("/images/artists/Aurora%20Drift/backdrop.jpg".into()),
            cover_image: None,
            releases: vec![release("old", 2021), release("new", 2024)],
        }
    }

    #[test]
    fn releases_are_sorted_newest_first() {
        let state = ArtistDetailState::new(artist());
        let ids: Vec<&str> = state.releases().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["new", "old"]);
    }

    #[test]
    fn missing_cover_uses_fallback_immediately() {
        let state = ArtistDetailState::new(artist());
        assert_eq!(state.cover().current(), FALLBACK_COVER);
        assert_eq!(
            state.backdrop().current(),
            "/images/artists/Aurora%20Drift/backdrop.jpg"
        );
    }

    #[test]
    fn backdrop_failure_swaps_to_fallback_once() {
        let mut state = ArtistDetailState::new(artist());
        state.backdrop_mut().mark_failed();

        assert_eq!(state.backdrop().current(), FALLBACK_BACKDROP);
        // The cover is independent and untouched
        assert!(!state.cover().has_failed());
    }
}
