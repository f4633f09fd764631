//! Default values and constants for all configuration settings.
//!
//! Contains all `DEFAULT_*` constants and the `ConfigFile::default()`
//! implementation.

use super::file::config_directory;
use super::settings::*;
use crate::basemap::{DEFAULT_CARTO_STYLE, DEFAULT_MAPBOX_STYLE};
use crate::deck::{DEFAULT_LATITUDE, DEFAULT_LONGITUDE, DEFAULT_ZOOM};
use crate::model::{BrandFilter, FlowSelection};

/// Default floor area per pound of annual demand.
pub const DEFAULT_SQFT_PER_LB: f64 = 0.05;

/// Default log file name inside the config directory.
pub const DEFAULT_LOG_FILE_NAME: &str = "flowmap.log";

/// Highest zoom level the map accepts.
pub const MAX_ZOOM: f64 = 24.0;

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            basemap: BasemapSettings {
                mapbox_api_key: None,
                mapbox_style: DEFAULT_MAPBOX_STYLE.to_string(),
                carto_style: DEFAULT_CARTO_STYLE.to_string(),
            },
            view: ViewSettings {
                latitude: DEFAULT_LATITUDE,
                longitude: DEFAULT_LONGITUDE,
                zoom: DEFAULT_ZOOM,
            },
            flows: FlowSettings {
                types: FlowSelection::all(),
                brand: BrandFilter::All,
            },
            summary: SummarySettings {
                sqft_per_lb: DEFAULT_SQFT_PER_LB,
            },
            logging: LoggingSettings {
                file: config_directory().join(DEFAULT_LOG_FILE_NAME),
            },
        }
    }
}
