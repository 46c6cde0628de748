//! Encore Catalog Client
//!
//! HTTP client for the Encore static release catalog: per-year release
//! documents, artist records, and artwork assets served from predictable
//! paths under a single base URL.
//!
//! # Features
//!
//! - **Release data**: fetch the release list for a year, fetch an artist
//!   record with its releases
//! - **Year discovery**: probe which years have data, with concurrent
//!   window/expansion phases
//! - **Artwork addressing**: per-artist image URLs and fixed fallback paths
//!
//! # Example
//!
//! ```ignore
//! use encore_client::{CatalogClient, CatalogConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = CatalogConfig::new("https://releases.example.com");
//!     let client = CatalogClient::new(config)?;
//!
//!     let years = client.discovery().available_years(2025).await?;
//!     for year in &years {
//!         let releases = client.fetch_releases(*year).await?;
//!         println!("{year}: {} releases", releases.len());
//!     }
//!
//!     Ok(())
//! }
//! ```

mod assets;
mod client;
mod config;
mod discovery;
mod error;

// Re-export main types
pub use assets::{FALLBACK_BACKDROP, FALLBACK_COVER};
pub use client::CatalogClient;
pub use config::CatalogConfig;
pub use discovery::DiscoveryClient;
pub use error::{CatalogError, Result};
