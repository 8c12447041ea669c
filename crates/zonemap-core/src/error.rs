//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Session error: {0}")]
    Session(#[from] zonemap_session::SessionError),

    #[error("Geocoder error: {0}")]
    Geocode(#[from] zonemap_geocode::GeocodeError),

    #[error("View error: {0}")]
    View(#[from] zonemap_view::ViewError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Session is locked")]
    Locked,
}
