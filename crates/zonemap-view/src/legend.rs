//! Zoning legend
//!
//! Rough building-coverage and floor-area-ratio ranges per colour group of
//! the GSI zoning overlay. Indicative only; each municipality's city
//! planning map is authoritative.

use serde::{Deserialize, Serialize};

pub const GSI_LEGEND_IMAGE: &str = "https://maps.gsi.go.jp/help/legend/youl.png";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoningCategory {
    Residential,
    Commercial,
    Industrial,
}

impl ZoningCategory {
    pub fn tab_label(&self) -> &'static str {
        match self {
            ZoningCategory::Residential => "住居系",
            ZoningCategory::Commercial => "商業系",
            ZoningCategory::Industrial => "工業系",
        }
    }
}

/// Percentage range; `min == max` for a single value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatioRange {
    pub min_percent: u16,
    pub max_percent: u16,
}

impl RatioRange {
    pub const fn new(min_percent: u16, max_percent: u16) -> Self {
        Self {
            min_percent,
            max_percent,
        }
    }

    pub const fn single(percent: u16) -> Self {
        Self::new(percent, percent)
    }
}

impl std::fmt::Display for RatioRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.min_percent == self.max_percent {
            write!(f, "{}%", self.min_percent)
        } else {
            write!(f, "{}%〜{}%", self.min_percent, self.max_percent)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendPanel {
    pub category: ZoningCategory,
    pub tab_label: String,
    /// Colour group and the zones it covers
    pub heading: String,
    pub character: String,
    pub building_coverage: RatioRange,
    pub floor_area_ratio: RatioRange,
}

impl LegendPanel {
    fn new(
        category: ZoningCategory,
        heading: &str,
        character: &str,
        building_coverage: RatioRange,
        floor_area_ratio: RatioRange,
    ) -> Self {
        Self {
            category,
            tab_label: category.tab_label().to_string(),
            heading: heading.to_string(),
            character: character.to_string(),
            building_coverage,
            floor_area_ratio,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Legend {
    pub title: String,
    pub panels: Vec<LegendPanel>,
    pub disclaimer: String,
    pub image_url: String,
    pub image_caption: String,
}

impl Legend {
    pub fn standard(image_url: impl Into<String>) -> Self {
        Self {
            title: "色の見方と法律の目安".to_string(),
            panels: vec![
                LegendPanel::new(
                    ZoningCategory::Residential,
                    "緑色系（第一種・第二種低層など）",
                    "静かな住宅街。",
                    RatioRange::new(30, 60),
                    RatioRange::new(50, 200),
                ),
                LegendPanel::new(
                    ZoningCategory::Commercial,
                    "赤色・ピンク系（商業・近隣商業）",
                    "駅前、幹線道路沿い。",
                    RatioRange::single(80),
                    RatioRange::new(300, 1300),
                ),
                LegendPanel::new(
                    ZoningCategory::Industrial,
                    "水色・青色系（準工業・工業など）",
                    "工場と住宅が混在、または工場地帯。",
                    RatioRange::single(60),
                    RatioRange::new(200, 400),
                ),
            ],
            disclaimer: "※正確な数値は必ず各自治体の都市計画図を確認してください。".to_string(),
            image_url: image_url.into(),
            image_caption: "国土地理院 凡例".to_string(),
        }
    }

    pub fn panel(&self, category: ZoningCategory) -> Option<&LegendPanel> {
        self.panels.iter().find(|p| p.category == category)
    }
}

impl Default for Legend {
    fn default() -> Self {
        Self::standard(GSI_LEGEND_IMAGE)
    }
}
