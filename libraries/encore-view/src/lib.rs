//! Encore View State
//!
//! Per-component view-state for the release browsing surfaces: the
//! release filter with its discovered years and one-time default, the
//! artist detail page with its image fallback slots, and the release
//! list with its load-more callback.
//!
//! Each state value is owned by one component instance; nothing here is
//! global or shared.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod artist_detail;
mod filter_state;
mod image;
mod release_list;

pub use artist_detail::ArtistDetailState;
pub use filter_state::ReleaseFilterState;
pub use image::ImageSlot;
pub use release_list::ReleaseListState;
