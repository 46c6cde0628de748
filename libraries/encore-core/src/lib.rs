//! Encore Core
//!
//! Platform-agnostic domain types and pure data transformations for the
//! Encore release catalog.
//!
//! This crate defines:
//! - **Domain Types**: `Release`, `Artist`, `FilterPeriod`
//! - **Release Projection**: filtering by year and date-descending sorting
//! - **Presentation Helpers**: date formatting and packed-RGB hex rendering
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use encore_core::{project_releases, FilterPeriod, Release};
//!
//! let releases = vec![Release {
//!     id: "rel-1".into(),
//!     title: "First Light".into(),
//!     artist: "Aurora Drift".into(),
//!     release_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
//! }];
//!
//! let visible = project_releases(&releases, FilterPeriod::Year(2024));
//! assert_eq!(visible.len(), 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod format;
pub mod projection;
pub mod types;

// Re-export commonly used items
pub use format::{color_hex, format_release_date};
pub use projection::project_releases;
pub use types::{Artist, FilterPeriod, Release};
