//! INI serialization logic for converting `ConfigFile` → INI string.
//!
//! This module contains the `to_config_string()` function that produces
//! the commented INI representation written to `config.ini`.

use super::settings::ConfigFile;

/// Convert a `ConfigFile` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    let mapbox_api_key = config.basemap.mapbox_api_key.as_deref().unwrap_or("");

    format!(
        r#"[basemap]
; Mapbox access token. When set (here or via the MAPBOX_API_KEY environment
; variable, which takes precedence) the Mapbox basemap is used; otherwise the
; free CARTO basemap is used.
; Get one at: https://www.mapbox.com/
mapbox_api_key = {}
; Mapbox style URL (default: mapbox://styles/mapbox/light-v10)
mapbox_style = {}
; CARTO style used without a Mapbox token (default: light)
;   light, dark, road, light_no_labels, dark_no_labels, or a style URL
carto_style = {}

[view]
; Initial camera position (default: continental US)
latitude = {}
longitude = {}
zoom = {}

[flows]
; Lane types drawn by default, comma-separated (outbound, transfer, inbound)
types = {}
; Brand drawn by default; __ALL__ draws every brand
brand = {}

[summary]
; Floor area per pound of annual demand (default: 0.05)
sqft_per_lb = {}

[logging]
; Log file, cleared at the start of each run
file = {}
"#,
        mapbox_api_key,
        config.basemap.mapbox_style,
        config.basemap.carto_style,
        config.view.latitude,
        config.view.longitude,
        config.view.zoom,
        config.flows.types,
        config.flows.brand,
        config.summary.sqft_per_lb,
        config.logging.file.display(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use ini::Ini;

    #[test]
    fn test_output_is_valid_ini() {
        let content = to_config_string(&ConfigFile::default());
        let ini = Ini::load_from_str(&content).unwrap();

        let basemap = ini.section(Some("basemap")).unwrap();
        assert_eq!(basemap.get("mapbox_api_key"), Some(""));
        assert_eq!(basemap.get("carto_style"), Some("light"));

        let flows = ini.section(Some("flows")).unwrap();
        assert_eq!(flows.get("types"), Some("outbound,transfer,inbound"));
        assert_eq!(flows.get("brand"), Some("__ALL__"));

        let view = ini.section(Some("view")).unwrap();
        assert_eq!(view.get("zoom"), Some("3.5"));
    }
}
