//! ZoneMap View
//!
//! Everything the renderer needs to draw a search result:
//! - Center coordinates and the street-view deep link
//! - Three tile layers: aerial, pale base map, zoning overlay
//! - Overlay opacity, always within 0.0..=1.0
//! - The static zoning legend

mod coordinates;
mod error;
mod legend;
mod map;
mod opacity;
mod street_view;
mod tiles;

pub use coordinates::Coordinates;
pub use error::ViewError;
pub use legend::{Legend, LegendPanel, RatioRange, ZoningCategory, GSI_LEGEND_IMAGE};
pub use map::{LayerSpec, MapSpec, Marker, DEFAULT_MAP_HEIGHT, DEFAULT_ZOOM};
pub use opacity::Opacity;
pub use street_view::StreetViewTemplate;
pub use tiles::{TileCoord, TileLayer, TileLayerKind, TileSet, GSI_MAX_ZOOM, MAX_ZOOM};

use serde::{Deserialize, Serialize};

/// What the renderer shows for the current search result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewModel {
    pub center: Coordinates,
    pub street_view_url: String,
    /// Address text the user searched for
    pub label: String,
    /// Geocoder's own name for the matched place, if it gave one
    pub matched_title: Option<String>,
}

pub type Result<T> = std::result::Result<T, ViewError>;
