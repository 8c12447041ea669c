//! Application state management
use parking_lot::RwLock;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use zonemap_core::{Config, Result, ZoneMap};

/// Thread-safe application state wrapper
pub struct AppState {
    zonemap: Arc<ZoneMap>,
    /// Window label -> search session ID
    window_sessions: Arc<RwLock<HashMap<String, String>>>,
}

impl AppState {
    /// `data_dir` holds the optional `config.json`
    pub fn new(data_dir: &Path) -> Result<Self> {
        let config = Config::load(data_dir)?;
        let zonemap = ZoneMap::new(config)?;

        Ok(Self {
            zonemap: Arc::new(zonemap),
            window_sessions: Arc::new(RwLock::new(HashMap::new())),
        })
    }

    pub fn zonemap(&self) -> Arc<ZoneMap> {
        Arc::clone(&self.zonemap)
    }

    /// Session for a window, opened on first use
    pub fn session_id_for_window(&self, window_label: &str) -> String {
        if let Some(id) = self.window_sessions.read().get(window_label).cloned() {
            return id;
        }

        let mut sessions = self.window_sessions.write();
        sessions
            .entry(window_label.to_string())
            .or_insert_with(|| self.zonemap.open_session())
            .clone()
    }

    pub fn end_window_session(&self, window_label: &str) {
        let Some(id) = self.window_sessions.write().remove(window_label) else {
            return;
        };

        if let Err(e) = self.zonemap.close_session(&id) {
            tracing::warn!(window = %window_label, error = %e, "Failed to close session");
        }
    }
}
