//! Search session
//!
//! States: no result / result present. `search` is the only transition.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use zonemap_geocode::{Candidate, Geocoder};
use zonemap_view::{Coordinates, StreetViewTemplate, ViewModel};

use crate::error::SearchError;

/// Outcome of a successful search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationFound {
    pub coordinates: Coordinates,
    pub label: String,
    pub matched_title: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SearchSession {
    /// Unique identifier
    pub id: String,
    pub created_at: DateTime<Utc>,
    /// Last successful search
    pub updated_at: DateTime<Utc>,
    /// Last address text submitted, successful or not
    query: String,
    location: Option<Coordinates>,
    /// Address text that produced `location`
    resolved_label: String,
    matched_title: Option<String>,
    street_view: StreetViewTemplate,
}

impl SearchSession {
    pub fn new(street_view: StreetViewTemplate) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4().to_string(),
            created_at: now,
            updated_at: now,
            query: String::new(),
            location: None,
            resolved_label: String::new(),
            matched_title: None,
            street_view,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn location(&self) -> Option<Coordinates> {
        self.location
    }

    pub fn resolved_label(&self) -> &str {
        &self.resolved_label
    }

    pub fn has_result(&self) -> bool {
        self.location.is_some()
    }

    /// Geocode `address` and take the first candidate.
    ///
    /// No retries. On failure the previous result stays in place.
    pub async fn search<G>(
        &mut self,
        geocoder: &G,
        address: &str,
    ) -> Result<LocationFound, SearchError>
    where
        G: Geocoder + ?Sized,
    {
        let outcome = geocoder.geocode(address).await;
        self.apply(address, outcome)
    }

    /// Apply a geocoder outcome obtained elsewhere for `address`
    pub fn apply(
        &mut self,
        address: &str,
        outcome: zonemap_geocode::Result<Vec<Candidate>>,
    ) -> Result<LocationFound, SearchError> {
        self.query = address.to_string();

        let candidates = match outcome {
            Ok(candidates) => candidates,
            Err(e) => {
                tracing::warn!(session_id = %self.id, error = %e, "Geocoding failed");
                return Err(SearchError::Transport(e));
            }
        };

        let Some(first) = candidates.into_iter().next() else {
            tracing::warn!(session_id = %self.id, query = %address, "Address not found");
            return Err(SearchError::NotFound {
                query: address.to_string(),
            });
        };

        let coordinates = Coordinates {
            latitude: first.latitude,
            longitude: first.longitude,
        };

        self.location = Some(coordinates);
        self.resolved_label = address.to_string();
        self.matched_title = first.title;
        self.updated_at = Utc::now();

        tracing::info!(
            session_id = %self.id,
            latitude = coordinates.latitude,
            longitude = coordinates.longitude,
            "Resolved address"
        );

        Ok(LocationFound {
            coordinates,
            label: self.resolved_label.clone(),
            matched_title: self.matched_title.clone(),
        })
    }

    /// What the renderer should show, if anything
    pub fn current_view(&self) -> Option<ViewModel> {
        let center = self.location?;

        Some(ViewModel {
            center,
            street_view_url: self.street_view.link_for(center),
            label: self.resolved_label.clone(),
            matched_title: self.matched_title.clone(),
        })
    }
}
