//! Scripted geocoder for tests

use parking_lot::Mutex;
use std::collections::HashMap;

use zonemap_geocode::{Candidate, GeocodeError, GeocodeFuture, Geocoder};

/// Answers from a fixed table; unknown queries are "not found"
#[derive(Default)]
pub(crate) struct ScriptedGeocoder {
    answers: HashMap<String, Result<Vec<Candidate>, GeocodeError>>,
    queries: Mutex<Vec<String>>,
}

impl ScriptedGeocoder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn answer(mut self, query: &str, candidates: Vec<Candidate>) -> Self {
        self.answers.insert(query.to_string(), Ok(candidates));
        self
    }

    pub(crate) fn fail(mut self, query: &str, error: GeocodeError) -> Self {
        self.answers.insert(query.to_string(), Err(error));
        self
    }

    pub(crate) fn queries(&self) -> Vec<String> {
        self.queries.lock().clone()
    }
}

impl Geocoder for ScriptedGeocoder {
    fn geocode<'a>(&'a self, query: &'a str) -> GeocodeFuture<'a> {
        self.queries.lock().push(query.to_string());
        let answer = self.answers.get(query).cloned().unwrap_or_else(|| Ok(Vec::new()));
        Box::pin(async move { answer })
    }
}
