//! View error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ViewError {
    #[error("Opacity out of range: {0} (expected 0.0..=1.0)")]
    OpacityOutOfRange(f64),

    #[error("Invalid URL template: {0}")]
    InvalidTemplate(String),

    #[error("Invalid zoom level: {0}")]
    InvalidZoom(u8),

    #[error("Invalid coordinates: lat {latitude}, lon {longitude}")]
    InvalidCoordinates { latitude: f64, longitude: f64 },
}
