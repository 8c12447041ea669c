//! Application coordinator
//!
//! Owns all state. The webview only sends events and draws screens.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use zonemap_geocode::{Geocoder, GsiGeocoder};
use zonemap_session::{LocationFound, SessionError, SessionManager};
use zonemap_view::{Legend, MapSpec, Opacity, ViewModel};

use crate::config::Config;
use crate::error::CoreError;
use crate::event::{Screen, UiDefaults, UiEvent};
use crate::gate::{AccessGate, GateState};
use crate::Result;

/// Per-session UI state that is not part of the search itself
#[derive(Debug, Clone, Copy)]
struct SessionUi {
    gate: GateState,
    opacity: Opacity,
}

pub struct ZoneMap {
    config: Config,
    gate: AccessGate,
    geocoder: Arc<dyn Geocoder>,
    sessions: SessionManager,
    ui: Arc<RwLock<HashMap<String, SessionUi>>>,
    legend: Legend,
}

impl ZoneMap {
    /// Build with the GSI geocoder described by `config`
    pub fn new(config: Config) -> Result<Self> {
        let geocoder = GsiGeocoder::new(&config.geocoder_endpoint, config.request_timeout())?;
        Self::with_geocoder(config, Arc::new(geocoder))
    }

    pub fn with_geocoder(config: Config, geocoder: Arc<dyn Geocoder>) -> Result<Self> {
        config.validate()?;

        let gate = AccessGate::new(config.passphrase.clone());
        let sessions = SessionManager::new(config.street_view_template.clone());
        let legend = Legend::standard(config.legend_image_url.clone());

        tracing::info!(
            geocoder = %config.geocoder_endpoint,
            zoom = config.zoom_start,
            "ZoneMap initialized"
        );

        Ok(Self {
            config,
            gate,
            geocoder,
            sessions,
            ui: Arc::new(RwLock::new(HashMap::new())),
            legend,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn legend(&self) -> &Legend {
        &self.legend
    }

    pub fn defaults(&self) -> UiDefaults {
        UiDefaults {
            default_address: self.config.default_address.clone(),
            default_opacity: self.config.default_opacity,
            opacity_min: Opacity::MIN,
            opacity_max: Opacity::MAX,
        }
    }

    // === Session lifecycle ===

    /// Open a locked session with default UI state
    pub fn open_session(&self) -> String {
        let id = self.sessions.create_session();
        self.ui.write().insert(
            id.clone(),
            SessionUi {
                gate: GateState::Locked,
                opacity: self.config.default_opacity,
            },
        );
        id
    }

    pub fn close_session(&self, session_id: &str) -> Result<()> {
        self.ui.write().remove(session_id);
        Ok(self.sessions.end_session(session_id)?)
    }

    fn session_ui(&self, session_id: &str) -> Result<SessionUi> {
        self.ui
            .read()
            .get(session_id)
            .copied()
            .ok_or_else(|| SessionError::NotFound(session_id.to_string()).into())
    }

    fn ensure_unlocked(&self, session_id: &str) -> Result<SessionUi> {
        let ui = self.session_ui(session_id)?;
        if !ui.gate.is_unlocked() {
            return Err(CoreError::Locked);
        }
        Ok(ui)
    }

    // === Access gate ===

    pub fn unlock(&self, session_id: &str, passphrase: &str) -> Result<GateState> {
        let state = self.gate.check(passphrase);

        let mut ui = self.ui.write();
        let entry = ui
            .get_mut(session_id)
            .ok_or_else(|| SessionError::NotFound(session_id.to_string()))?;
        entry.gate = state;

        if state.is_unlocked() {
            tracing::info!(session_id = %session_id, "Session unlocked");
        } else {
            tracing::warn!(session_id = %session_id, "Wrong passphrase");
        }

        Ok(state)
    }

    pub fn is_unlocked(&self, session_id: &str) -> bool {
        self.session_ui(session_id)
            .map(|ui| ui.gate.is_unlocked())
            .unwrap_or(false)
    }

    // === Search ===

    /// The one path from a search button press to session state
    pub async fn on_search_requested(
        &self,
        session_id: &str,
        address: &str,
    ) -> Result<LocationFound> {
        self.ensure_unlocked(session_id)?;

        Ok(self
            .sessions
            .search(session_id, self.geocoder.as_ref(), address)
            .await?)
    }

    pub fn current_view(&self, session_id: &str) -> Result<Option<ViewModel>> {
        self.ensure_unlocked(session_id)?;
        Ok(self.sessions.current_view(session_id)?)
    }

    pub fn street_view_url(&self, session_id: &str) -> Result<Option<String>> {
        Ok(self
            .current_view(session_id)?
            .map(|view| view.street_view_url))
    }

    // === Rendering ===

    pub fn set_opacity(&self, session_id: &str, value: f64) -> Result<Opacity> {
        self.ensure_unlocked(session_id)?;

        let opacity = Opacity::clamped(value);
        if let Some(entry) = self.ui.write().get_mut(session_id) {
            entry.opacity = opacity;
        }
        Ok(opacity)
    }

    pub fn map_spec(&self, session_id: &str) -> Result<Option<MapSpec>> {
        let ui = self.ensure_unlocked(session_id)?;

        self.sessions
            .current_view(session_id)?
            .map(|view| {
                MapSpec::build(&view, &self.config.tiles, ui.opacity, self.config.zoom_start)
                    .map_err(CoreError::from)
            })
            .transpose()
    }

    /// What the session should be looking at right now
    pub fn screen(&self, session_id: &str) -> Result<Screen> {
        let ui = self.session_ui(session_id)?;
        if !ui.gate.is_unlocked() {
            return Ok(Screen::locked());
        }

        let Some(view) = self.sessions.current_view(session_id)? else {
            return Ok(Screen::welcome());
        };

        let map = MapSpec::build(&view, &self.config.tiles, ui.opacity, self.config.zoom_start)?;

        Ok(Screen::Map {
            view,
            map,
            legend: self.legend.clone(),
        })
    }

    /// Handle one UI event and return the screen to draw
    pub async fn dispatch(&self, session_id: &str, event: UiEvent) -> Result<Screen> {
        tracing::debug!(session_id = %session_id, event = event.name(), "Dispatching UI event");

        match event {
            UiEvent::Unlock(passphrase) => {
                self.unlock(session_id, &passphrase)?;
                self.screen(session_id)
            }
            _ if !self.session_ui(session_id)?.gate.is_unlocked() => Ok(Screen::locked()),
            UiEvent::SearchRequested(address) => {
                match self.on_search_requested(session_id, &address).await {
                    Ok(_) => self.screen(session_id),
                    Err(CoreError::Session(SessionError::Search(e))) => {
                        Ok(Screen::search_failed(&address, &e))
                    }
                    Err(e) => Err(e),
                }
            }
            UiEvent::OpacityChanged(value) => {
                self.set_opacity(session_id, value)?;
                self.screen(session_id)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::FailureKind;
    use zonemap_geocode::{Candidate, GeocodeError, GeocodeFuture};

    /// Knows two addresses, fails on "timeout", finds nothing else
    struct FixedGeocoder;

    impl Geocoder for FixedGeocoder {
        fn geocode<'a>(&'a self, query: &'a str) -> GeocodeFuture<'a> {
            let answer = match query {
                "東京都新宿区西新宿2-8-1" => Ok(vec![Candidate {
                    latitude: 35.6895,
                    longitude: 139.6917,
                    title: Some("東京都新宿区西新宿二丁目".to_string()),
                }]),
                "大阪府大阪市中央区大手前2" => Ok(vec![Candidate {
                    latitude: 34.6863,
                    longitude: 135.52,
                    title: None,
                }]),
                "timeout" => Err(GeocodeError::Timeout("deadline exceeded".to_string())),
                _ => Ok(Vec::new()),
            };
            Box::pin(async move { answer })
        }
    }

    fn app() -> ZoneMap {
        ZoneMap::with_geocoder(Config::default(), Arc::new(FixedGeocoder)).unwrap()
    }

    async fn unlocked(app: &ZoneMap) -> String {
        let id = app.open_session();
        app.dispatch(&id, UiEvent::Unlock("0525".to_string()))
            .await
            .unwrap();
        id
    }

    #[tokio::test]
    async fn test_locked_until_passphrase() {
        let app = app();
        let id = app.open_session();

        assert_eq!(app.screen(&id).unwrap(), Screen::locked());

        let screen = app
            .dispatch(&id, UiEvent::SearchRequested("東京都新宿区西新宿2-8-1".to_string()))
            .await
            .unwrap();
        assert_eq!(screen, Screen::locked());
        assert!(matches!(
            app.on_search_requested(&id, "東京都新宿区西新宿2-8-1").await,
            Err(CoreError::Locked)
        ));
        assert!(matches!(app.current_view(&id), Err(CoreError::Locked)));

        let screen = app
            .dispatch(&id, UiEvent::Unlock("wrong".to_string()))
            .await
            .unwrap();
        assert_eq!(screen, Screen::locked());

        let screen = app
            .dispatch(&id, UiEvent::Unlock("0525".to_string()))
            .await
            .unwrap();
        assert_eq!(screen, Screen::welcome());
    }

    #[tokio::test]
    async fn test_search_renders_map() {
        let app = app();
        let id = unlocked(&app).await;

        let screen = app
            .dispatch(&id, UiEvent::SearchRequested("東京都新宿区西新宿2-8-1".to_string()))
            .await
            .unwrap();

        match screen {
            Screen::Map { view, map, legend } => {
                assert_eq!(view.center.latitude, 35.6895);
                assert_eq!(view.center.longitude, 139.6917);
                assert!(view.street_view_url.contains("cbll=35.6895,139.6917"));
                assert_eq!(map.layers.len(), 3);
                assert_eq!(map.overlay().unwrap().opacity.value(), 0.4);
                assert_eq!(map.zoom, 18);
                assert_eq!(legend.panels.len(), 3);
            }
            other => panic!("Expected Map, got {}", other.name()),
        }
    }

    #[tokio::test]
    async fn test_not_found_keeps_map() {
        let app = app();
        let id = unlocked(&app).await;

        let screen = app
            .dispatch(&id, UiEvent::SearchRequested(String::new()))
            .await
            .unwrap();
        assert!(matches!(
            screen,
            Screen::SearchFailed {
                kind: FailureKind::NotFound,
                ..
            }
        ));
        assert!(app.current_view(&id).unwrap().is_none());

        app.on_search_requested(&id, "東京都新宿区西新宿2-8-1")
            .await
            .unwrap();
        let before = app.current_view(&id).unwrap();

        let screen = app
            .dispatch(&id, UiEvent::SearchRequested("timeout".to_string()))
            .await
            .unwrap();
        assert!(matches!(
            screen,
            Screen::SearchFailed {
                kind: FailureKind::Transport,
                retryable: true,
                ..
            }
        ));
        assert_eq!(app.current_view(&id).unwrap(), before);
        assert_eq!(app.screen(&id).unwrap().name(), "map");
    }

    #[tokio::test]
    async fn test_opacity_is_clamped() {
        let app = app();
        let id = unlocked(&app).await;
        app.on_search_requested(&id, "大阪府大阪市中央区大手前2")
            .await
            .unwrap();

        let screen = app
            .dispatch(&id, UiEvent::OpacityChanged(3.5))
            .await
            .unwrap();
        match screen {
            Screen::Map { map, .. } => assert_eq!(map.overlay().unwrap().opacity.value(), 1.0),
            other => panic!("Expected Map, got {}", other.name()),
        }

        assert_eq!(app.set_opacity(&id, -0.2).unwrap().value(), 0.0);
        assert_eq!(app.set_opacity(&id, 0.65).unwrap().value(), 0.65);
        let map = app.map_spec(&id).unwrap().unwrap();
        assert_eq!(map.overlay().unwrap().opacity.value(), 0.65);
    }

    #[tokio::test]
    async fn test_sessions_do_not_interfere() {
        let app = app();
        let first = unlocked(&app).await;
        let second = app.open_session();

        app.on_search_requested(&first, "東京都新宿区西新宿2-8-1")
            .await
            .unwrap();

        assert!(app.is_unlocked(&first));
        assert!(!app.is_unlocked(&second));
        assert_eq!(app.screen(&second).unwrap(), Screen::locked());

        app.close_session(&first).unwrap();
        assert!(app.screen(&first).is_err());
        assert!(app.close_session(&first).is_err());
    }

    #[tokio::test]
    async fn test_street_view_url_stable() {
        let app = app();
        let id = unlocked(&app).await;
        assert_eq!(app.street_view_url(&id).unwrap(), None);

        app.on_search_requested(&id, "東京都新宿区西新宿2-8-1")
            .await
            .unwrap();
        let first = app.street_view_url(&id).unwrap();
        let second = app.street_view_url(&id).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            first.as_deref(),
            Some("https://www.google.com/maps?layer=c&cbll=35.6895,139.6917")
        );
    }

    #[test]
    fn test_rejects_invalid_config() {
        let mut config = Config::default();
        config.zoom_start = 40;
        assert!(ZoneMap::with_geocoder(config, Arc::new(FixedGeocoder)).is_err());
    }
}
