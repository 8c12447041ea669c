//! Geocoding error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeocodeError {
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Geocoder returned HTTP {0}")]
    Status(u16),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for GeocodeError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            GeocodeError::Timeout(e.to_string())
        } else if let Some(status) = e.status() {
            GeocodeError::Status(status.as_u16())
        } else if e.is_decode() {
            GeocodeError::MalformedResponse(e.to_string())
        } else {
            GeocodeError::Network(e.to_string())
        }
    }
}
