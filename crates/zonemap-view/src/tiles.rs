//! Tile layers
//!
//! Standard slippy-map tiling (Web Mercator, `{z}/{x}/{y}`). The GSI
//! defaults cover Japan; any XYZ server with the same layout works.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use url::Url;

use crate::coordinates::Coordinates;
use crate::error::ViewError;
use crate::Result;

pub const MAX_ZOOM: u8 = 22;

/// Deepest zoom the GSI ort/pale/youl servers render
pub const GSI_MAX_ZOOM: u8 = 18;

/// Web Mercator stops short of the poles
const MAX_MERCATOR_LATITUDE: f64 = 85.051_128_78;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TileLayerKind {
    Aerial,
    Standard,
    ZoningOverlay,
}

impl TileLayerKind {
    /// Paint order, bottom first
    pub const ORDER: [TileLayerKind; 3] = [
        TileLayerKind::Aerial,
        TileLayerKind::Standard,
        TileLayerKind::ZoningOverlay,
    ];

    pub fn is_overlay(&self) -> bool {
        matches!(self, TileLayerKind::ZoningOverlay)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileCoord {
    pub z: u8,
    pub x: u32,
    pub y: u32,
}

impl TileCoord {
    /// Tile containing the given position at `zoom`
    pub fn from_coordinates(center: Coordinates, zoom: u8) -> Result<Self> {
        if zoom > MAX_ZOOM {
            return Err(ViewError::InvalidZoom(zoom));
        }
        if !center.is_valid() {
            return Err(ViewError::InvalidCoordinates {
                latitude: center.latitude,
                longitude: center.longitude,
            });
        }

        let n = f64::from(1u32 << zoom);
        let max_index = (1u32 << zoom) - 1;

        let lat_rad = center
            .latitude
            .clamp(-MAX_MERCATOR_LATITUDE, MAX_MERCATOR_LATITUDE)
            .to_radians();

        let x = ((center.longitude + 180.0) / 360.0 * n).floor();
        let y = ((1.0 - lat_rad.tan().asinh() / PI) / 2.0 * n).floor();

        Ok(Self {
            z: zoom,
            x: (x.max(0.0) as u32).min(max_index),
            y: (y.max(0.0) as u32).min(max_index),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileLayer {
    pub kind: TileLayerKind,
    /// Name shown in the layer control
    pub name: String,
    /// XYZ template with `{z}`, `{x}` and `{y}`
    pub url_template: String,
    pub attribution: String,
}

impl TileLayer {
    pub fn new(
        kind: TileLayerKind,
        name: impl Into<String>,
        url_template: impl Into<String>,
        attribution: impl Into<String>,
    ) -> Result<Self> {
        let url_template = url_template.into();
        for placeholder in ["{z}", "{x}", "{y}"] {
            if !url_template.contains(placeholder) {
                return Err(ViewError::InvalidTemplate(format!(
                    "{url_template} (missing {placeholder})"
                )));
            }
        }

        let layer = Self {
            kind,
            name: name.into(),
            url_template,
            attribution: attribution.into(),
        };

        let sample = layer.tile_url(TileCoord { z: 0, x: 0, y: 0 });
        Url::parse(&sample).map_err(|e| {
            ViewError::InvalidTemplate(format!("{} ({e})", layer.url_template))
        })?;

        Ok(layer)
    }

    pub fn tile_url(&self, coord: TileCoord) -> String {
        self.url_template
            .replace("{z}", &coord.z.to_string())
            .replace("{x}", &coord.x.to_string())
            .replace("{y}", &coord.y.to_string())
    }
}

/// One layer of each kind. Field order is paint order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileSet {
    pub aerial: TileLayer,
    pub standard: TileLayer,
    pub zoning: TileLayer,
    /// Deepest zoom every layer serves
    #[serde(default = "default_max_zoom")]
    pub max_zoom: u8,
}

fn default_max_zoom() -> u8 {
    GSI_MAX_ZOOM
}

impl TileSet {
    pub fn layers(&self) -> [&TileLayer; 3] {
        [&self.aerial, &self.standard, &self.zoning]
    }

    /// Each layer must sit in its own slot with a usable template
    pub fn validate(&self) -> Result<()> {
        if self.max_zoom > MAX_ZOOM {
            return Err(ViewError::InvalidZoom(self.max_zoom));
        }

        for (layer, expected) in self.layers().into_iter().zip(TileLayerKind::ORDER) {
            if layer.kind != expected {
                return Err(ViewError::InvalidTemplate(format!(
                    "layer '{}' is {:?}, expected {:?}",
                    layer.name, layer.kind, expected
                )));
            }
            TileLayer::new(
                layer.kind,
                layer.name.clone(),
                layer.url_template.clone(),
                layer.attribution.clone(),
            )?;
        }
        Ok(())
    }
}

impl Default for TileSet {
    fn default() -> Self {
        Self {
            aerial: TileLayer {
                kind: TileLayerKind::Aerial,
                name: "航空写真".to_string(),
                url_template: "https://cyberjapandata.gsi.go.jp/xyz/ort/{z}/{x}/{y}.jpg"
                    .to_string(),
                attribution: "国土地理院 航空写真".to_string(),
            },
            standard: TileLayer {
                kind: TileLayerKind::Standard,
                name: "標準地図".to_string(),
                url_template: "https://cyberjapandata.gsi.go.jp/xyz/pale/{z}/{x}/{y}.png"
                    .to_string(),
                attribution: "国土地理院 淡色地図".to_string(),
            },
            zoning: TileLayer {
                kind: TileLayerKind::ZoningOverlay,
                name: "用途地域（色分け）".to_string(),
                url_template: "https://cyberjapandata.gsi.go.jp/xyz/youl/{z}/{x}/{y}.png"
                    .to_string(),
                attribution: "国土地理院 用途地域データ".to_string(),
            },
            max_zoom: GSI_MAX_ZOOM,
        }
    }
}
