//! Presentation helpers for dates and colors.

use chrono::NaiveDate;

/// Render a release date as a human-readable display string,
/// e.g. `June 21, 2024`.
pub fn format_release_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Render a packed 0xRRGGBB color as a `#`-prefixed lowercase hex string,
/// zero-padded to six digits.
pub fn color_hex(color: u32) -> String {
    format!("#{color:06x}")
}
