//! Street-view deep link
//!
//! The link is opened outside the app. Placeholders `{lat}` and `{lon}` are
//! substituted verbatim, so the same coordinates always give the same bytes.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::coordinates::Coordinates;
use crate::error::ViewError;
use crate::Result;

const LAT_PLACEHOLDER: &str = "{lat}";
const LON_PLACEHOLDER: &str = "{lon}";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StreetViewTemplate {
    template: String,
}

impl StreetViewTemplate {
    pub const GOOGLE_MAPS: &'static str = "https://www.google.com/maps?layer=c&cbll={lat},{lon}";

    pub fn new(template: impl Into<String>) -> Result<Self> {
        let template = template.into();

        if !template.contains(LAT_PLACEHOLDER) || !template.contains(LON_PLACEHOLDER) {
            return Err(ViewError::InvalidTemplate(format!(
                "{template} (needs {LAT_PLACEHOLDER} and {LON_PLACEHOLDER})"
            )));
        }

        let probe = Self::expand(&template, 0.0, 0.0);
        if let Err(e) = Url::parse(&probe) {
            return Err(ViewError::InvalidTemplate(format!("{template}: {e}")));
        }

        Ok(Self { template })
    }

    pub fn as_str(&self) -> &str {
        &self.template
    }

    pub fn link_for(&self, center: Coordinates) -> String {
        Self::expand(&self.template, center.latitude, center.longitude)
    }

    fn expand(template: &str, latitude: f64, longitude: f64) -> String {
        template
            .replace(LAT_PLACEHOLDER, &latitude.to_string())
            .replace(LON_PLACEHOLDER, &longitude.to_string())
    }
}

impl Default for StreetViewTemplate {
    fn default() -> Self {
        Self {
            template: Self::GOOGLE_MAPS.to_string(),
        }
    }
}

impl TryFrom<String> for StreetViewTemplate {
    type Error = ViewError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<StreetViewTemplate> for String {
    fn from(template: StreetViewTemplate) -> Self {
        template.template
    }
}
