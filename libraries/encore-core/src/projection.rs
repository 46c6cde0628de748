//! Release projection: filtering by year and date-descending ordering.

use crate::types::{FilterPeriod, Release};

/// Project a release collection through a filter selection.
///
/// Returns the releases whose calendar year matches `period` (everything
/// for [`FilterPeriod::AllTime`]), ordered by release date descending.
/// The sort is stable, so releases sharing a date keep their input order.
/// The input is never mutated and recomputation with equal inputs yields
/// identical output.
pub fn project_releases(releases: &[Release], period: FilterPeriod) -> Vec<Release> {
    let mut projected: Vec<Release> = releases
        .iter()
        .filter(|release| period.matches(release.release_date))
        .cloned()
        .collect();

    projected.sort_by(|a, b| b.release_date.cmp(&a.release_date));
    projected
}
