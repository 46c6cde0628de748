//! Domain types for the Encore catalog

mod artist;
mod filter;
mod release;

pub use artist::Artist;
pub use filter::FilterPeriod;
pub use release::Release;
