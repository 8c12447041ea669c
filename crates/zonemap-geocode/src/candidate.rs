//! Geocoder response model

use serde::{Deserialize, Serialize};

use crate::error::GeocodeError;
use crate::Result;

#[derive(Debug, Deserialize)]
struct Feature {
    geometry: Geometry,
    #[serde(default)]
    properties: Option<FeatureProperties>,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    /// GeoJSON order: longitude first
    coordinates: Vec<f64>,
}

#[derive(Debug, Deserialize)]
struct FeatureProperties {
    #[serde(default)]
    title: Option<String>,
}

/// One match returned by the geocoder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub latitude: f64,
    pub longitude: f64,
    pub title: Option<String>,
}

impl Feature {
    fn into_candidate(self) -> Result<Candidate> {
        let (longitude, latitude) = match self.geometry.coordinates.as_slice() {
            [lon, lat, ..] => (*lon, *lat),
            other => {
                return Err(GeocodeError::MalformedResponse(format!(
                    "expected [longitude, latitude], got {} value(s)",
                    other.len()
                )))
            }
        };

        let in_range = latitude.is_finite()
            && longitude.is_finite()
            && (-90.0..=90.0).contains(&latitude)
            && (-180.0..=180.0).contains(&longitude);
        if !in_range {
            return Err(GeocodeError::MalformedResponse(format!(
                "coordinates out of range: [{longitude}, {latitude}]"
            )));
        }

        let title = self
            .properties
            .and_then(|p| p.title)
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());

        Ok(Candidate {
            latitude,
            longitude,
            title,
        })
    }
}

/// Parse a response body into candidates, preserving the geocoder's order.
///
/// The first feature is the answer and must be well formed. Later features
/// that cannot be read are dropped.
pub fn parse_candidates(body: &[u8]) -> Result<Vec<Candidate>> {
    let features: Vec<serde_json::Value> = serde_json::from_slice(body)
        .map_err(|e| GeocodeError::MalformedResponse(e.to_string()))?;

    let mut features = features.into_iter();
    let Some(first) = features.next() else {
        return Ok(Vec::new());
    };

    let mut candidates = vec![read_feature(first)?];
    for (index, feature) in features.enumerate() {
        match read_feature(feature) {
            Ok(candidate) => candidates.push(candidate),
            Err(e) => {
                tracing::debug!(index = index + 1, error = %e, "Skipping unreadable candidate")
            }
        }
    }

    Ok(candidates)
}

fn read_feature(value: serde_json::Value) -> Result<Candidate> {
    let feature: Feature = serde_json::from_value(value)
        .map_err(|e| GeocodeError::MalformedResponse(e.to_string()))?;
    feature.into_candidate()
}
