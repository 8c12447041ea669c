//! Application configuration
//!
//! Read from `$ZONEMAP_CONFIG`, or from `config.json` in the app data
//! directory when present. Missing fields fall back to the GSI defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

use zonemap_geocode::GsiGeocoder;
use zonemap_view::{Opacity, StreetViewTemplate, TileSet, DEFAULT_ZOOM, GSI_LEGEND_IMAGE};

use crate::error::CoreError;
use crate::Result;

pub const CONFIG_ENV: &str = "ZONEMAP_CONFIG";
pub const PASSPHRASE_ENV: &str = "ZONEMAP_PASSPHRASE";
pub const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Address search endpoint, queried as `?q=<address>`
    pub geocoder_endpoint: String,
    pub request_timeout_secs: u64,
    pub street_view_template: StreetViewTemplate,
    pub tiles: TileSet,
    pub legend_image_url: String,
    /// Shared secret for the access gate. Compared in plain text.
    pub passphrase: String,
    /// Prefilled in the address input
    pub default_address: String,
    pub default_opacity: Opacity,
    pub zoom_start: u8,
}

impl Config {
    /// Load from `$ZONEMAP_CONFIG` or `data_dir`, apply environment overrides and validate
    pub fn load(data_dir: &Path) -> Result<Self> {
        let explicit = std::env::var_os(CONFIG_ENV).map(PathBuf::from);

        let mut config = Self::read(explicit.as_deref(), data_dir)?;
        config.apply_env(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// An explicitly named file must exist; the one in `data_dir` is optional
    fn read(explicit: Option<&Path>, data_dir: &Path) -> Result<Self> {
        match explicit {
            Some(path) if !path.is_file() => Err(CoreError::Config(format!(
                "{CONFIG_ENV} points to a missing file: {}",
                path.display()
            ))),
            Some(path) => {
                tracing::info!(path = %path.display(), "Loading configuration");
                Self::from_file(path)
            }
            None => {
                let path = data_dir.join(CONFIG_FILE);
                if path.is_file() {
                    tracing::info!(path = %path.display(), "Loading configuration");
                    Self::from_file(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(passphrase) = lookup(PASSPHRASE_ENV).filter(|p| !p.is_empty()) {
            self.passphrase = passphrase;
        }
    }

    pub fn validate(&self) -> Result<()> {
        let endpoint = Url::parse(&self.geocoder_endpoint).map_err(|e| {
            CoreError::Config(format!(
                "geocoder_endpoint '{}': {}",
                self.geocoder_endpoint, e
            ))
        })?;
        if endpoint.scheme() != "http" && endpoint.scheme() != "https" {
            return Err(CoreError::Config(format!(
                "geocoder_endpoint must be http(s), got '{}'",
                endpoint.scheme()
            )));
        }

        Url::parse(&self.legend_image_url).map_err(|e| {
            CoreError::Config(format!(
                "legend_image_url '{}': {}",
                self.legend_image_url, e
            ))
        })?;

        self.tiles.validate()?;

        if self.zoom_start > self.tiles.max_zoom {
            return Err(CoreError::Config(format!(
                "zoom_start {} exceeds the tile servers' max zoom {}",
                self.zoom_start, self.tiles.max_zoom
            )));
        }

        if self.request_timeout_secs == 0 {
            return Err(CoreError::Config(
                "request_timeout_secs must be positive".to_string(),
            ));
        }

        if self.passphrase.is_empty() {
            return Err(CoreError::Config("passphrase cannot be empty".to_string()));
        }

        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            geocoder_endpoint: GsiGeocoder::DEFAULT_ENDPOINT.to_string(),
            request_timeout_secs: 10,
            street_view_template: StreetViewTemplate::default(),
            tiles: TileSet::default(),
            legend_image_url: GSI_LEGEND_IMAGE.to_string(),
            passphrase: "0525".to_string(),
            default_address: "東京都新宿区西新宿2-8-1".to_string(),
            default_opacity: Opacity::DEFAULT,
            zoom_start: DEFAULT_ZOOM,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.default_address, "東京都新宿区西新宿2-8-1");
        assert_eq!(config.default_opacity.value(), 0.4);
        assert_eq!(config.zoom_start, 18);
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_partial_json() {
        let config = Config::from_json(r#"{"passphrase":"tokyo","zoom_start":16}"#).unwrap();
        assert_eq!(config.passphrase, "tokyo");
        assert_eq!(config.zoom_start, 16);
        assert_eq!(config.geocoder_endpoint, GsiGeocoder::DEFAULT_ENDPOINT);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(Config::from_json(r#"{"default_opacity":1.5}"#).is_err());
        assert!(Config::from_json(r#"{"street_view_template":"https://example.com/"}"#).is_err());

        let config = Config::from_json(r#"{"zoom_start":30}"#).unwrap();
        assert!(matches!(config.validate(), Err(CoreError::Config(_))));

        // GSI tiles stop at 18
        let config = Config::from_json(r#"{"zoom_start":19}"#).unwrap();
        assert!(matches!(config.validate(), Err(CoreError::Config(_))));

        let config = Config::from_json(r#"{"geocoder_endpoint":"file:///tmp/x"}"#).unwrap();
        assert!(matches!(config.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn test_env_override() {
        let mut config = Config::default();

        config.apply_env(|_| Some(String::new()));
        assert_eq!(config.passphrase, "0525");

        config.apply_env(|key| (key == PASSPHRASE_ENV).then(|| "hunter2".to_string()));
        assert_eq!(config.passphrase, "hunter2");
    }

    #[test]
    fn test_named_file_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.json");
        assert!(matches!(
            Config::read(Some(&missing), dir.path()),
            Err(CoreError::Config(_))
        ));

        let present = dir.path().join("named.json");
        std::fs::write(&present, r#"{"passphrase":"kyoto"}"#).unwrap();
        let config = Config::read(Some(&present), dir.path()).unwrap();
        assert_eq!(config.passphrase, "kyoto");
    }

    #[test]
    fn test_data_dir_file_is_optional() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::read(None, dir.path()).unwrap();
        assert_eq!(config.passphrase, "0525");

        std::fs::write(dir.path().join(CONFIG_FILE), r#"{"zoom_start":16}"#).unwrap();
        let config = Config::read(None, dir.path()).unwrap();
        assert_eq!(config.zoom_start, 16);
    }

    #[test]
    fn test_roundtrip_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = Config::default();
        config.default_address = "京都市中京区寺町通御池上る上本能寺前町488".to_string();
        std::fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

        let loaded = Config::from_file(&path).unwrap();
        assert_eq!(loaded.default_address, config.default_address);
        assert_eq!(loaded.tiles, config.tiles);
    }
}
