//! Error types for the Encore catalog client.

use thiserror::Error;

/// Errors that can occur when talking to the static catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Catalog returned a non-success response for a requested resource
    #[error("Catalog error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// Requested resource does not exist in the catalog
    #[error("Not found: {resource}")]
    NotFound { resource: String },

    /// Invalid catalog base URL
    #[error("Invalid catalog URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse a catalog response body
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

/// Result type for catalog client operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
