//! Geocoding client

use reqwest::redirect::Policy;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;
use url::Url;

use crate::candidate::{parse_candidates, Candidate};
use crate::error::GeocodeError;
use crate::Result;

pub type GeocodeFuture<'a> = Pin<Box<dyn Future<Output = Result<Vec<Candidate>>> + Send + 'a>>;

/// Anything that can turn address text into ordered candidates.
///
/// An empty `Vec` means "not found"; `Err` means the lookup itself failed.
pub trait Geocoder: Send + Sync {
    fn geocode<'a>(&'a self, query: &'a str) -> GeocodeFuture<'a>;
}

/// Client for the GSI (Geospatial Information Authority of Japan) address search
#[derive(Debug, Clone)]
pub struct GsiGeocoder {
    client: reqwest::Client,
    endpoint: Url,
}

impl GsiGeocoder {
    pub const DEFAULT_ENDPOINT: &'static str =
        "https://msearch.gsi.go.jp/address-search/AddressSearch";

    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .redirect(Policy::limited(5))
            .timeout(timeout)
            .build()
            .map_err(|e| GeocodeError::Network(e.to_string()))?;

        Self::with_client(endpoint, client)
    }

    pub fn with_client(endpoint: &str, client: reqwest::Client) -> Result<Self> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| GeocodeError::InvalidEndpoint(format!("{endpoint}: {e}")))?;

        if endpoint.scheme() != "http" && endpoint.scheme() != "https" {
            return Err(GeocodeError::InvalidEndpoint(format!(
                "unsupported scheme '{}'",
                endpoint.scheme()
            )));
        }

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn search(&self, query: &str) -> Result<Vec<Candidate>> {
        tracing::debug!(endpoint = %self.endpoint, query = %query, "Geocoding address");

        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[("q", query)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeocodeError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let candidates = parse_candidates(&body)?;

        tracing::debug!(count = candidates.len(), "Geocoder answered");

        Ok(candidates)
    }
}

impl Geocoder for GsiGeocoder {
    fn geocode<'a>(&'a self, query: &'a str) -> GeocodeFuture<'a> {
        Box::pin(self.search(query))
    }
}
