//! Release domain type

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single music release as served by the static catalog endpoints.
///
/// Immutable once loaded; there is no lifecycle beyond being fetched
/// and rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Release {
    /// Unique release identifier
    pub id: String,

    /// Release title
    pub title: String,

    /// Owning artist name
    pub artist: String,

    /// Calendar date of the release (no time-of-day semantics)
    pub release_date: NaiveDate,
}
