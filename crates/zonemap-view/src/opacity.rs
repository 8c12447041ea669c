//! Overlay opacity
//!
//! The zoning layer is never rendered outside 0.0..=1.0.

use serde::{Deserialize, Serialize};

use crate::error::ViewError;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Opacity(f64);

impl Opacity {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 1.0;
    pub const DEFAULT: Opacity = Opacity(0.4);
    pub const OPAQUE: Opacity = Opacity(1.0);

    /// Strict constructor, for configuration values
    pub fn new(value: f64) -> Result<Self> {
        if value.is_nan() || !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ViewError::OpacityOutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Lenient constructor, for slider input. NaN falls back to the default.
    pub fn clamped(value: f64) -> Self {
        if value.is_nan() {
            return Self::DEFAULT;
        }
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for Opacity {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<f64> for Opacity {
    type Error = ViewError;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Opacity> for f64 {
    fn from(opacity: Opacity) -> Self {
        opacity.0
    }
}
