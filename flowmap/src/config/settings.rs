//! Settings structs for all configuration sections.
//!
//! Each struct represents one `[section]` of the INI config file.
//! These are pure data types with no parsing or serialization logic.

use std::path::PathBuf;

use crate::model::{BrandFilter, FlowSelection};

/// Complete application configuration loaded from config.ini.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    /// Basemap settings
    pub basemap: BasemapSettings,
    /// Initial camera settings
    pub view: ViewSettings,
    /// Default flow filters
    pub flows: FlowSettings,
    /// Summary settings
    pub summary: SummarySettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

/// Basemap configuration.
#[derive(Clone, PartialEq)]
pub struct BasemapSettings {
    /// Mapbox access token; `MAPBOX_API_KEY` takes precedence
    pub mapbox_api_key: Option<String>,
    /// Mapbox style URL
    pub mapbox_style: String,
    /// CARTO style name or URL
    pub carto_style: String,
}

// Keeps the access token out of logs.
impl std::fmt::Debug for BasemapSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasemapSettings")
            .field(
                "mapbox_api_key",
                &self.mapbox_api_key.as_ref().map(|_| "<redacted>"),
            )
            .field("mapbox_style", &self.mapbox_style)
            .field("carto_style", &self.carto_style)
            .finish()
    }
}

/// Initial camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewSettings {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: f64,
}

/// Default filters for the flow view.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowSettings {
    /// Lane types drawn when `--types` is not given
    pub types: FlowSelection,
    /// Brand drawn when `--brand` is not given
    pub brand: BrandFilter,
}

/// Summary configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummarySettings {
    /// Floor area per pound of annual demand
    pub sqft_per_lb: f64,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingSettings {
    /// Log file path
    pub file: PathBuf,
}
