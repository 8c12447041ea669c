//! Session error types

use thiserror::Error;
use zonemap_geocode::GeocodeError;

/// Why a search left the session unchanged. Both cases are retryable.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    #[error("Address not found: {query}")]
    NotFound { query: String },

    #[error("Geocoding failed: {0}")]
    Transport(#[from] GeocodeError),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SessionError {
    #[error("Session not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Search(#[from] SearchError),
}
