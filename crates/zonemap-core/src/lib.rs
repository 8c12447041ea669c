//! ZoneMap Core
//!
//! Central coordination layer for the zoning map.
//! Rust owns all state; the webview sends events and draws screens.

mod app;
mod config;
mod error;
mod event;
mod gate;

pub use app::ZoneMap;
pub use config::{Config, CONFIG_ENV, CONFIG_FILE, PASSPHRASE_ENV};
pub use error::CoreError;
pub use event::{FailureKind, Screen, UiDefaults, UiEvent};
pub use gate::{AccessGate, GateState};

// Re-export core components
pub use zonemap_geocode::{Candidate, GeocodeError, Geocoder, GsiGeocoder};
pub use zonemap_session::{LocationFound, SearchError, SearchSession, SessionError, SessionManager};
pub use zonemap_view::{
    Coordinates, Legend, LegendPanel, MapSpec, Opacity, RatioRange, StreetViewTemplate, TileSet,
    ViewModel, ZoningCategory,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
