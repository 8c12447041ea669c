//! Session Manager
//!
//! Keeps every open session in memory, keyed by session ID.
//! Nothing is persisted; a session disappears when it is ended.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use zonemap_geocode::Geocoder;
use zonemap_view::{StreetViewTemplate, ViewModel};

use crate::error::SessionError;
use crate::session::{LocationFound, SearchSession};
use crate::Result;

pub struct SessionManager {
    sessions: Arc<RwLock<HashMap<String, SearchSession>>>,
    /// Handed to every new session
    street_view: StreetViewTemplate,
}

impl SessionManager {
    pub fn new(street_view: StreetViewTemplate) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            street_view,
        }
    }

    /// Start an empty session and return its ID
    pub fn create_session(&self) -> String {
        let session = SearchSession::new(self.street_view.clone());
        let id = session.id.clone();

        self.sessions.write().insert(id.clone(), session);

        tracing::info!(session_id = %id, "Created search session");

        id
    }

    pub fn contains(&self, session_id: &str) -> bool {
        self.sessions.read().contains_key(session_id)
    }

    /// Search on behalf of one session.
    ///
    /// The geocoder runs without the lock held; the outcome is applied once
    /// it arrives, so a slower search finishing later wins.
    pub async fn search<G>(
        &self,
        session_id: &str,
        geocoder: &G,
        address: &str,
    ) -> Result<LocationFound>
    where
        G: Geocoder + ?Sized,
    {
        if !self.contains(session_id) {
            return Err(SessionError::NotFound(session_id.to_string()));
        }

        let outcome = geocoder.geocode(address).await;

        let mut sessions = self.sessions.write();
        let session = sessions
            .get_mut(session_id)
            .ok_or_else(|| SessionError::NotFound(session_id.to_string()))?;

        Ok(session.apply(address, outcome)?)
    }

    pub fn current_view(&self, session_id: &str) -> Result<Option<ViewModel>> {
        self.sessions
            .read()
            .get(session_id)
            .map(SearchSession::current_view)
            .ok_or_else(|| SessionError::NotFound(session_id.to_string()))
    }

    pub fn end_session(&self, session_id: &str) -> Result<()> {
        self.sessions
            .write()
            .remove(session_id)
            .ok_or_else(|| SessionError::NotFound(session_id.to_string()))?;

        tracing::info!(session_id = %session_id, "Ended search session");

        Ok(())
    }
}

impl Clone for SessionManager {
    fn clone(&self) -> Self {
        Self {
            sessions: Arc::clone(&self.sessions),
            street_view: self.street_view.clone(),
        }
    }
}
