use serde::{Deserialize, Serialize};

use crate::error::ViewError;
use crate::Result;

/// A WGS84 position. Always latitude first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        let coords = Self {
            latitude,
            longitude,
        };

        if coords.is_valid() {
            Ok(coords)
        } else {
            Err(ViewError::InvalidCoordinates {
                latitude,
                longitude,
            })
        }
    }

    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}
