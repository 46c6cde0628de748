//! Release list filter selection

use chrono::{Datelike, NaiveDate};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The user's chosen scope for the release list: a specific calendar year
/// or the "all time" sentinel.
///
/// Serializes as the string `"all"` or a bare year number, matching the
/// wire form used by the catalog frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterPeriod {
    /// No year restriction
    AllTime,
    /// Restrict to releases from this calendar year
    Year(i32),
}

impl FilterPeriod {
    /// Whether a release dated `date` falls inside this filter.
    pub fn matches(&self, date: NaiveDate) -> bool {
        match self {
            FilterPeriod::AllTime => true,
            FilterPeriod::Year(year) => date.year() == *year,
        }
    }
}

impl fmt::Display for FilterPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterPeriod::AllTime => f.write_str("All Time"),
            FilterPeriod::Year(year) => write!(f, "{year}"),
        }
    }
}

impl Serialize for FilterPeriod {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FilterPeriod::AllTime => serializer.serialize_str("all"),
            FilterPeriod::Year(year) => serializer.serialize_i32(*year),
        }
    }
}

impl<'de> Deserialize<'de> for FilterPeriod {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Year(i32),
            Sentinel(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Year(year) => Ok(FilterPeriod::Year(year)),
            Raw::Sentinel(s) if s == "all" => Ok(FilterPeriod::AllTime),
            Raw::Sentinel(s) => Err(D::Error::custom(format!(
                "expected \"all\" or a year number, got \"{s}\""
            ))),
        }
    }
}
