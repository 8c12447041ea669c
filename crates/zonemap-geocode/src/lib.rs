//! ZoneMap Geocoding
//!
//! Free-form address text in, ordered candidate coordinates out.
//! - GET `<endpoint>?q=<address>`
//! - Response is a JSON array of features with
//!   `geometry.coordinates = [longitude, latitude]`
//! - An empty array means the address was not found

mod candidate;
mod client;
mod error;

pub use candidate::{parse_candidates, Candidate};
pub use client::{GeocodeFuture, Geocoder, GsiGeocoder};
pub use error::GeocodeError;

pub type Result<T> = std::result::Result<T, GeocodeError>;
