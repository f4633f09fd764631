//! INI parsing logic for converting `Ini` → `ConfigFile`.
//!
//! This module contains the `parse_ini()` function and its helpers.
//! It is the single place where INI key names are mapped to struct fields.

use ini::Ini;
use std::path::PathBuf;

use super::defaults::MAX_ZOOM;
use super::file::ConfigFileError;
use super::settings::ConfigFile;
use crate::basemap::is_valid_carto_style;
use crate::coord::{MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};
use crate::model::{BrandFilter, FlowSelection, LaneType};

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in the INI.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [basemap] section
    if let Some(section) = ini.section(Some("basemap")) {
        if let Some(v) = section.get("mapbox_api_key") {
            let v = v.trim();
            if !v.is_empty() {
                config.basemap.mapbox_api_key = Some(v.to_string());
            }
        }
        if let Some(v) = section.get("mapbox_style") {
            let v = v.trim();
            if !v.is_empty() {
                if !v.starts_with("mapbox://") && !v.starts_with("https://") {
                    return Err(invalid(
                        "basemap",
                        "mapbox_style",
                        v,
                        "must be a mapbox:// or https:// style URL",
                    ));
                }
                config.basemap.mapbox_style = v.to_string();
            }
        }
        if let Some(v) = section.get("carto_style") {
            let v = v.trim();
            if !v.is_empty() {
                if !is_valid_carto_style(v) {
                    return Err(invalid(
                        "basemap",
                        "carto_style",
                        v,
                        "must be one of: light, dark, road, light_no_labels, dark_no_labels, or a URL",
                    ));
                }
                config.basemap.carto_style = v.to_string();
            }
        }
    }

    // [view] section
    if let Some(section) = ini.section(Some("view")) {
        if let Some(v) = section.get("latitude") {
            config.view.latitude = parse_in_range("view", "latitude", v, MIN_LAT, MAX_LAT)?;
        }
        if let Some(v) = section.get("longitude") {
            config.view.longitude = parse_in_range("view", "longitude", v, MIN_LON, MAX_LON)?;
        }
        if let Some(v) = section.get("zoom") {
            config.view.zoom = parse_in_range("view", "zoom", v, 0.0, MAX_ZOOM)?;
        }
    }

    // [flows] section
    if let Some(section) = ini.section(Some("flows")) {
        if let Some(v) = section.get("types") {
            config.flows.types = parse_flow_types(v)
                .map_err(|reason| invalid("flows", "types", v, &reason))?;
        }
        if let Some(v) = section.get("brand") {
            config.flows.brand = BrandFilter::from(v);
        }
    }

    // [summary] section
    if let Some(section) = ini.section(Some("summary")) {
        if let Some(v) = section.get("sqft_per_lb") {
            config.summary.sqft_per_lb =
                parse_in_range("summary", "sqft_per_lb", v, 0.0, f64::MAX)?;
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("file") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.file = expand_tilde(v);
            }
        }
    }

    Ok(config)
}

fn invalid(section: &str, key: &str, value: &str, reason: &str) -> ConfigFileError {
    ConfigFileError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Parse a finite number within `[min, max]`.
fn parse_in_range(
    section: &str,
    key: &str,
    value: &str,
    min: f64,
    max: f64,
) -> Result<f64, ConfigFileError> {
    let reason = range_reason(min, max);
    let n: f64 = value
        .trim()
        .parse()
        .map_err(|_| invalid(section, key, value, &reason))?;
    if !n.is_finite() || n < min || n > max {
        return Err(invalid(section, key, value, &reason));
    }
    Ok(n)
}

pub(super) fn range_reason(min: f64, max: f64) -> String {
    if max == f64::MAX {
        format!("must be a number of at least {}", min)
    } else {
        format!("must be a number between {} and {}", min, max)
    }
}

/// Parse a comma-separated lane type list, rejecting types that never render.
pub(super) fn parse_flow_types(value: &str) -> Result<FlowSelection, String> {
    let mut types = Vec::new();
    for part in value.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let lane_type = LaneType::from(part.to_lowercase().as_str());
        if !LaneType::RENDERED.contains(&lane_type) {
            return Err(format!(
                "unknown lane type '{}', expected a list of: outbound, transfer, inbound",
                part
            ));
        }
        types.push(lane_type);
    }
    Ok(FlowSelection::only(types))
}

/// Expand ~ to home directory in paths.
pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}
