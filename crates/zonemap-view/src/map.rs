//! Map rendering contract
//!
//! The renderer receives a `MapSpec` and draws it as-is: three tile layers
//! in paint order, one marker, one layer control.

use serde::{Deserialize, Serialize};

use crate::coordinates::Coordinates;
use crate::error::ViewError;
use crate::opacity::Opacity;
use crate::tiles::{TileCoord, TileLayer, TileLayerKind, TileSet};
use crate::{Result, ViewModel};

pub const DEFAULT_ZOOM: u8 = 18;
pub const DEFAULT_MAP_HEIGHT: u32 = 600;

const MARKER_POPUP: &str = "検索地";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerSpec {
    pub kind: TileLayerKind,
    pub name: String,
    pub url_template: String,
    pub attribution: String,
    pub opacity: Opacity,
    /// Overlays can be toggled on top of whichever base layer is selected
    pub overlay: bool,
}

impl LayerSpec {
    fn from_layer(layer: &TileLayer, opacity: Opacity) -> Self {
        Self {
            kind: layer.kind,
            name: layer.name.clone(),
            url_template: layer.url_template.clone(),
            attribution: layer.attribution.clone(),
            opacity,
            overlay: layer.kind.is_overlay(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub position: Coordinates,
    pub popup: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapSpec {
    pub center: Coordinates,
    pub zoom: u8,
    /// The renderer must not zoom in past this; the tile servers stop here
    pub max_zoom: u8,
    /// Tile under the center at `zoom`, handy for prefetching
    pub center_tile: TileCoord,
    pub layers: Vec<LayerSpec>,
    pub marker: Marker,
    pub layer_control: bool,
    pub height_px: u32,
}

impl MapSpec {
    pub fn build(view: &ViewModel, tiles: &TileSet, opacity: Opacity, zoom: u8) -> Result<Self> {
        if zoom > tiles.max_zoom {
            return Err(ViewError::InvalidZoom(zoom));
        }
        let center_tile = TileCoord::from_coordinates(view.center, zoom)?;

        let layers = tiles
            .layers()
            .into_iter()
            .map(|layer| {
                let layer_opacity = if layer.kind.is_overlay() {
                    opacity
                } else {
                    Opacity::OPAQUE
                };
                LayerSpec::from_layer(layer, layer_opacity)
            })
            .collect();

        let popup = match &view.matched_title {
            Some(title) if !title.is_empty() => format!("{MARKER_POPUP}: {title}"),
            _ => MARKER_POPUP.to_string(),
        };

        Ok(Self {
            center: view.center,
            zoom,
            max_zoom: tiles.max_zoom,
            center_tile,
            layers,
            marker: Marker {
                position: view.center,
                popup,
            },
            layer_control: true,
            height_px: DEFAULT_MAP_HEIGHT,
        })
    }

    pub fn overlay(&self) -> Option<&LayerSpec> {
        self.layers.iter().find(|l| l.overlay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> ViewModel {
        ViewModel {
            center: Coordinates {
                latitude: 35.6895,
                longitude: 139.6917,
            },
            street_view_url: "https://www.google.com/maps?layer=c&cbll=35.6895,139.6917"
                .to_string(),
            label: "東京都新宿区西新宿2-8-1".to_string(),
            matched_title: Some("東京都新宿区西新宿二丁目".to_string()),
        }
    }

    #[test]
    fn test_layer_order_and_opacity() {
        let opacity = Opacity::new(0.4).unwrap();
        let map = MapSpec::build(&view(), &TileSet::default(), opacity, DEFAULT_ZOOM).unwrap();

        let kinds: Vec<_> = map.layers.iter().map(|l| l.kind).collect();
        assert_eq!(kinds, TileLayerKind::ORDER);

        assert_eq!(map.layers[0].opacity.value(), 1.0);
        assert_eq!(map.layers[1].opacity.value(), 1.0);
        assert!(!map.layers[0].overlay);
        assert!(!map.layers[1].overlay);

        let overlay = map.overlay().unwrap();
        assert_eq!(overlay.kind, TileLayerKind::ZoningOverlay);
        assert_eq!(overlay.opacity.value(), 0.4);
    }

    #[test]
    fn test_marker_and_controls() {
        let map = MapSpec::build(
            &view(),
            &TileSet::default(),
            Opacity::default(),
            DEFAULT_ZOOM,
        )
        .unwrap();

        assert_eq!(map.marker.position, map.center);
        assert!(map.marker.popup.starts_with("検索地"));
        assert!(map.marker.popup.contains("西新宿二丁目"));
        assert!(map.layer_control);
        assert_eq!(map.zoom, 18);
        assert_eq!(map.max_zoom, 18);
        assert_eq!(map.height_px, 600);
        assert_eq!((map.center_tile.x, map.center_tile.y), (232792, 103219));
    }

    #[test]
    fn test_rejects_bad_zoom() {
        let result = MapSpec::build(&view(), &TileSet::default(), Opacity::default(), 30);
        assert_eq!(result, Err(ViewError::InvalidZoom(30)));

        // Past what the GSI servers render
        let result = MapSpec::build(&view(), &TileSet::default(), Opacity::default(), 19);
        assert_eq!(result, Err(ViewError::InvalidZoom(19)));

        let mut tiles = TileSet::default();
        tiles.max_zoom = 20;
        let map = MapSpec::build(&view(), &tiles, Opacity::default(), 19).unwrap();
        assert_eq!((map.zoom, map.max_zoom), (19, 20));
    }

    #[test]
    fn test_serialized_opacity_stays_in_range() {
        let map = MapSpec::build(
            &view(),
            &TileSet::default(),
            Opacity::clamped(7.0),
            DEFAULT_ZOOM,
        )
        .unwrap();

        let json = serde_json::to_value(&map).unwrap();
        assert_eq!(json["layers"][2]["opacity"], 1.0);
        assert_eq!(json["layers"][2]["kind"], "zoning_overlay");
    }
}
