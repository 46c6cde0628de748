//! Artist domain type

use super::Release;
use serde::{Deserialize, Serialize};

/// An artist record with its releases, as served by the static catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    /// Display name; also the key under which artwork assets are addressed
    pub name: String,

    /// Accent color as a packed 0xRRGGBB integer
    pub color: Option<u32>,

    /// Backdrop image path, when the artist ships a custom one
    pub backdrop_image: Option<String>,

    /// Cover image path, when the artist ships a custom one
    pub cover_image: Option<String>,

    /// Releases owned by this artist, in catalog order
    #[serde(default)]
    pub releases: Vec<Release>,
}
