//! `section.key` addressing for individual settings.
//!
//! [`ConfigKey`] is what `flowmap config get/set` operates on. Each key owns a
//! small validator so bad values are rejected before the file is touched.

use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

use super::defaults::MAX_ZOOM;
use super::settings::ConfigFile;
use super::parser::{expand_tilde, parse_flow_types, range_reason};
use crate::basemap::is_valid_carto_style;
use crate::coord::{MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};
use crate::model::BrandFilter;

/// Failure to resolve or assign a key.
#[derive(Debug, Error)]
pub enum ConfigKeyError {
    #[error("Unknown configuration key '{0}'")]
    UnknownKey(String),

    #[error("Invalid value for {key}: {reason}")]
    ValidationFailed { key: String, reason: String },
}

/// One addressable field of [`ConfigFile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    // Basemap settings
    BasemapMapboxApiKey,
    BasemapMapboxStyle,
    BasemapCartoStyle,

    // View settings
    ViewLatitude,
    ViewLongitude,
    ViewZoom,

    // Flow settings
    FlowsTypes,
    FlowsBrand,

    // Summary settings
    SummarySqftPerLb,

    // Logging settings
    LoggingFile,
}

impl FromStr for ConfigKey {
    type Err = ConfigKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "basemap.mapbox_api_key" => Ok(ConfigKey::BasemapMapboxApiKey),
            "basemap.mapbox_style" => Ok(ConfigKey::BasemapMapboxStyle),
            "basemap.carto_style" => Ok(ConfigKey::BasemapCartoStyle),

            "view.latitude" => Ok(ConfigKey::ViewLatitude),
            "view.longitude" => Ok(ConfigKey::ViewLongitude),
            "view.zoom" => Ok(ConfigKey::ViewZoom),

            "flows.types" => Ok(ConfigKey::FlowsTypes),
            "flows.brand" => Ok(ConfigKey::FlowsBrand),

            "summary.sqft_per_lb" => Ok(ConfigKey::SummarySqftPerLb),

            "logging.file" => Ok(ConfigKey::LoggingFile),

            _ => Err(ConfigKeyError::UnknownKey(s.to_string())),
        }
    }
}

impl ConfigKey {
    /// Full dotted name, e.g. `view.zoom`.
    pub fn name(&self) -> &'static str {
        match self {
            ConfigKey::BasemapMapboxApiKey => "basemap.mapbox_api_key",
            ConfigKey::BasemapMapboxStyle => "basemap.mapbox_style",
            ConfigKey::BasemapCartoStyle => "basemap.carto_style",
            ConfigKey::ViewLatitude => "view.latitude",
            ConfigKey::ViewLongitude => "view.longitude",
            ConfigKey::ViewZoom => "view.zoom",
            ConfigKey::FlowsTypes => "flows.types",
            ConfigKey::FlowsBrand => "flows.brand",
            ConfigKey::SummarySqftPerLb => "summary.sqft_per_lb",
            ConfigKey::LoggingFile => "logging.file",
        }
    }

    pub fn section(&self) -> &'static str {
        self.name().split('.').next().unwrap_or("")
    }

    pub fn key_name(&self) -> &'static str {
        self.name().split('.').nth(1).unwrap_or(self.name())
    }

    /// Secrets are masked by `config list`.
    pub fn is_secret(&self) -> bool {
        matches!(self, ConfigKey::BasemapMapboxApiKey)
    }

    /// Current value rendered as it would appear in the INI file.
    pub fn get(&self, config: &ConfigFile) -> String {
        match self {
            ConfigKey::BasemapMapboxApiKey => {
                config.basemap.mapbox_api_key.clone().unwrap_or_default()
            }
            ConfigKey::BasemapMapboxStyle => config.basemap.mapbox_style.clone(),
            ConfigKey::BasemapCartoStyle => config.basemap.carto_style.clone(),
            ConfigKey::ViewLatitude => config.view.latitude.to_string(),
            ConfigKey::ViewLongitude => config.view.longitude.to_string(),
            ConfigKey::ViewZoom => config.view.zoom.to_string(),
            ConfigKey::FlowsTypes => config.flows.types.to_string(),
            ConfigKey::FlowsBrand => config.flows.brand.to_string(),
            ConfigKey::SummarySqftPerLb => config.summary.sqft_per_lb.to_string(),
            ConfigKey::LoggingFile => path_to_display(&config.logging.file),
        }
    }

    /// Validates `value`, then assigns it. `config` is untouched on error.
    pub fn set(&self, config: &mut ConfigFile, value: &str) -> Result<(), ConfigKeyError> {
        self.validate(value)?;
        self.apply(config, value)
            .map_err(|reason| ConfigKeyError::ValidationFailed {
                key: self.name().to_string(),
                reason,
            })
    }

    /// Store an already validated value.
    fn apply(&self, config: &mut ConfigFile, value: &str) -> Result<(), String> {
        let value = value.trim();
        match self {
            ConfigKey::BasemapMapboxApiKey => {
                config.basemap.mapbox_api_key = optional_string(value);
            }
            ConfigKey::BasemapMapboxStyle => {
                config.basemap.mapbox_style = value.to_string();
            }
            ConfigKey::BasemapCartoStyle => {
                config.basemap.carto_style = value.to_string();
            }
            ConfigKey::ViewLatitude => config.view.latitude = parse_number(value)?,
            ConfigKey::ViewLongitude => config.view.longitude = parse_number(value)?,
            ConfigKey::ViewZoom => config.view.zoom = parse_number(value)?,
            ConfigKey::FlowsTypes => {
                config.flows.types = parse_flow_types(value)?;
            }
            ConfigKey::FlowsBrand => {
                config.flows.brand = BrandFilter::from(value);
            }
            ConfigKey::SummarySqftPerLb => {
                config.summary.sqft_per_lb = parse_number(value)?;
            }
            ConfigKey::LoggingFile => {
                config.logging.file = expand_tilde(value);
            }
        }
        Ok(())
    }

    pub fn validate(&self, value: &str) -> Result<(), ConfigKeyError> {
        self.specification()
            .is_satisfied_by(value.trim())
            .map_err(|reason| ConfigKeyError::ValidationFailed {
                key: self.name().to_string(),
                reason,
            })
    }

    fn specification(&self) -> Box<dyn ValueSpecification> {
        match self {
            ConfigKey::BasemapMapboxApiKey => Box::new(AnyStringSpec),
            ConfigKey::BasemapMapboxStyle => Box::new(StyleUrlSpec),
            ConfigKey::BasemapCartoStyle => Box::new(CartoStyleSpec),
            ConfigKey::ViewLatitude => Box::new(RangeSpec::new(MIN_LAT, MAX_LAT)),
            ConfigKey::ViewLongitude => Box::new(RangeSpec::new(MIN_LON, MAX_LON)),
            ConfigKey::ViewZoom => Box::new(RangeSpec::new(0.0, MAX_ZOOM)),
            ConfigKey::FlowsTypes => Box::new(LaneTypeListSpec),
            ConfigKey::FlowsBrand => Box::new(AnyStringSpec),
            ConfigKey::SummarySqftPerLb => Box::new(RangeSpec::new(0.0, f64::MAX)),
            ConfigKey::LoggingFile => Box::new(PathSpec),
        }
    }

    /// Every key, in the order `config list` prints them.
    pub fn all() -> &'static [ConfigKey] {
        &[
            ConfigKey::BasemapMapboxApiKey,
            ConfigKey::BasemapMapboxStyle,
            ConfigKey::BasemapCartoStyle,
            ConfigKey::ViewLatitude,
            ConfigKey::ViewLongitude,
            ConfigKey::ViewZoom,
            ConfigKey::FlowsTypes,
            ConfigKey::FlowsBrand,
            ConfigKey::SummarySqftPerLb,
            ConfigKey::LoggingFile,
        ]
    }
}

// Validators

/// A rule a raw string value must satisfy; `Err` carries the reason shown to
/// the user.
trait ValueSpecification {
    fn is_satisfied_by(&self, value: &str) -> Result<(), String>;
}

/// Free text, including empty to clear.
struct AnyStringSpec;

impl ValueSpecification for AnyStringSpec {
    fn is_satisfied_by(&self, _value: &str) -> Result<(), String> {
        Ok(())
    }
}

/// Finite number within `[min, max]`.
struct RangeSpec {
    min: f64,
    max: f64,
}

impl RangeSpec {
    fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

impl ValueSpecification for RangeSpec {
    fn is_satisfied_by(&self, value: &str) -> Result<(), String> {
        let n = parse_number(value)?;
        if n < self.min || n > self.max {
            Err(range_reason(self.min, self.max))
        } else {
            Ok(())
        }
    }
}

/// `mapbox://` or `https://` style URL.
struct StyleUrlSpec;

impl ValueSpecification for StyleUrlSpec {
    fn is_satisfied_by(&self, value: &str) -> Result<(), String> {
        if value.starts_with("mapbox://") || value.starts_with("https://") {
            Ok(())
        } else {
            Err("must be a URL starting with 'mapbox://' or 'https://'".to_string())
        }
    }
}

/// Named CARTO style or a full style URL.
struct CartoStyleSpec;

impl ValueSpecification for CartoStyleSpec {
    fn is_satisfied_by(&self, value: &str) -> Result<(), String> {
        if is_valid_carto_style(value) {
            Ok(())
        } else {
            Err(
                "must be one of: light, dark, road, light_no_labels, dark_no_labels, or a URL"
                    .to_string(),
            )
        }
    }
}

/// Comma-separated rendered lane types.
struct LaneTypeListSpec;

impl ValueSpecification for LaneTypeListSpec {
    fn is_satisfied_by(&self, value: &str) -> Result<(), String> {
        parse_flow_types(value).map(|_| ())
    }
}

struct PathSpec;

impl ValueSpecification for PathSpec {
    fn is_satisfied_by(&self, value: &str) -> Result<(), String> {
        if value.is_empty() {
            Err("must be a valid path".to_string())
        } else {
            Ok(())
        }
    }
}

fn parse_number(value: &str) -> Result<f64, String> {
    match value.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err("must be a number".to_string()),
    }
}

/// Path with the home directory collapsed to `~`.
fn path_to_display(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}

fn optional_string(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FlowSelection, LaneType};

    #[test]
    fn test_config_key_parsing() {
        assert_eq!(
            "view.zoom".parse::<ConfigKey>().unwrap(),
            ConfigKey::ViewZoom
        );
        assert_eq!(
            "basemap.mapbox_api_key".parse::<ConfigKey>().unwrap(),
            ConfigKey::BasemapMapboxApiKey
        );
        // Case insensitive
        assert_eq!(
            "FLOWS.BRAND".parse::<ConfigKey>().unwrap(),
            ConfigKey::FlowsBrand
        );
        assert!("invalid.key".parse::<ConfigKey>().is_err());
    }

    #[test]
    fn test_key_name_parts() {
        assert_eq!(ConfigKey::SummarySqftPerLb.section(), "summary");
        assert_eq!(ConfigKey::SummarySqftPerLb.key_name(), "sqft_per_lb");
        assert_eq!(ConfigKey::BasemapCartoStyle.section(), "basemap");
        assert_eq!(ConfigKey::BasemapCartoStyle.key_name(), "carto_style");
    }

    #[test]
    fn test_names_round_trip() {
        for key in ConfigKey::all() {
            assert_eq!(key.name().parse::<ConfigKey>().unwrap(), *key);
        }
    }

    #[test]
    fn test_get_value() {
        let config = ConfigFile::default();

        assert_eq!(ConfigKey::BasemapMapboxApiKey.get(&config), "");
        assert_eq!(ConfigKey::BasemapCartoStyle.get(&config), "light");
        assert_eq!(ConfigKey::ViewZoom.get(&config), "3.5");
        assert_eq!(ConfigKey::ViewLongitude.get(&config), "-98");
        assert_eq!(
            ConfigKey::FlowsTypes.get(&config),
            "outbound,transfer,inbound"
        );
        assert_eq!(ConfigKey::FlowsBrand.get(&config), "__ALL__");
    }

    #[test]
    fn test_set_value() {
        let mut config = ConfigFile::default();

        ConfigKey::ViewZoom.set(&mut config, "4.25").unwrap();
        assert_eq!(config.view.zoom, 4.25);

        ConfigKey::FlowsTypes.set(&mut config, "transfer").unwrap();
        assert_eq!(config.flows.types, FlowSelection::only([LaneType::Transfer]));

        ConfigKey::FlowsBrand.set(&mut config, "Acme").unwrap();
        assert_eq!(config.flows.brand, BrandFilter::Only("Acme".to_string()));

        ConfigKey::BasemapMapboxApiKey
            .set(&mut config, "pk.xyz")
            .unwrap();
        assert_eq!(config.basemap.mapbox_api_key.as_deref(), Some("pk.xyz"));
    }

    #[test]
    fn test_validate_ranges() {
        assert!(ConfigKey::ViewLatitude.validate("45").is_ok());
        assert!(ConfigKey::ViewLatitude.validate("90.5").is_err());
        assert!(ConfigKey::ViewLongitude.validate("-180").is_ok());
        assert!(ConfigKey::ViewZoom.validate("abc").is_err());
        assert!(ConfigKey::ViewZoom.validate("inf").is_err());
        assert!(ConfigKey::SummarySqftPerLb.validate("-1").is_err());
    }

    #[test]
    fn test_validate_styles() {
        assert!(ConfigKey::BasemapCartoStyle.validate("dark").is_ok());
        assert!(ConfigKey::BasemapCartoStyle.validate("neon").is_err());
        assert!(ConfigKey::BasemapMapboxStyle
            .validate("mapbox://styles/mapbox/streets-v11")
            .is_ok());
        assert!(ConfigKey::BasemapMapboxStyle.validate("streets").is_err());
    }

    #[test]
    fn test_set_invalid_value_fails() {
        let mut config = ConfigFile::default();

        let result = ConfigKey::FlowsTypes.set(&mut config, "outbound,backhaul");
        assert!(result.is_err());

        assert_eq!(config.flows.types, FlowSelection::all());
    }

    #[test]
    fn test_clear_optional_value() {
        let mut config = ConfigFile::default();

        ConfigKey::BasemapMapboxApiKey
            .set(&mut config, "pk.abc")
            .unwrap();
        assert!(config.basemap.mapbox_api_key.is_some());

        ConfigKey::BasemapMapboxApiKey.set(&mut config, "").unwrap();
        assert!(config.basemap.mapbox_api_key.is_none());
    }

    #[test]
    fn test_all_keys() {
        let keys = ConfigKey::all();
        assert_eq!(keys.len(), 10);
        assert!(keys.contains(&ConfigKey::LoggingFile));
        assert_eq!(
            keys.iter().filter(|k| k.is_secret()).count(),
            1
        );
    }
}
