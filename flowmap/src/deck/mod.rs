//! Deck documents: composed layers plus view and basemap.
//!
//! A [`Deck`] serializes to the JSON format read by deck.gl's
//! `JSONConverter`. It can be written as plain JSON for a host application
//! to load, or as a standalone HTML page (see [`html`]).

pub mod html;

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::basemap::Basemap;
use crate::error::ExportError;
use crate::layer::RenderLayer;

/// Default camera latitude (continental US).
pub const DEFAULT_LATITUDE: f64 = 39.0;

/// Default camera longitude (continental US).
pub const DEFAULT_LONGITUDE: f64 = -98.0;

/// Default camera zoom.
pub const DEFAULT_ZOOM: f64 = 3.5;

/// Initial camera position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: f64,
    pub pitch: f64,
    pub bearing: f64,
}

impl ViewState {
    /// A flat, north-up view.
    pub fn new(latitude: f64, longitude: f64, zoom: f64) -> Self {
        Self {
            latitude,
            longitude,
            zoom,
            pitch: 0.0,
            bearing: 0.0,
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(DEFAULT_LATITUDE, DEFAULT_LONGITUDE, DEFAULT_ZOOM)
    }
}

/// deck.gl view declaration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "@@type")]
enum View {
    MapView { controller: bool },
}

/// Output encoding of a deck document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// deck.gl JSON
    Json,
    /// Standalone HTML page
    Html,
}

impl OutputFormat {
    /// Detect the format from a file extension (`.html`/`.htm`, otherwise JSON).
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("html") | Some("htm") => OutputFormat::Html,
            _ => OutputFormat::Json,
        }
    }
}

/// A complete map: layers, camera and basemap.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Deck {
    initial_view_state: ViewState,
    layers: Vec<RenderLayer>,
    map_provider: &'static str,
    map_style: String,
    views: Vec<View>,
    /// Carries the access token for HTML export; never serialized
    #[serde(skip)]
    basemap: Basemap,
}

impl Deck {
    pub fn new(layers: Vec<RenderLayer>, view: ViewState, basemap: &Basemap) -> Self {
        Self {
            initial_view_state: view,
            layers,
            map_provider: basemap.provider_id(),
            map_style: basemap.style_url().to_string(),
            views: vec![View::MapView { controller: true }],
            basemap: basemap.clone(),
        }
    }

    pub fn layers(&self) -> &[RenderLayer] {
        &self.layers
    }

    pub fn view_state(&self) -> &ViewState {
        &self.initial_view_state
    }

    pub fn basemap(&self) -> &Basemap {
        &self.basemap
    }

    pub fn map_provider(&self) -> &str {
        self.map_provider
    }

    pub fn map_style(&self) -> &str {
        &self.map_style
    }

    /// Serialize to pretty-printed deck.gl JSON.
    pub fn to_json(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Render a standalone HTML page.
    pub fn to_html(&self, title: &str) -> Result<String, ExportError> {
        let json = serde_json::to_string(self)?;
        Ok(html::render_page(title, &json, self.basemap.api_key()))
    }

    /// Write the document, choosing the encoding from the file extension.
    pub fn write_to(&self, path: &Path, title: &str) -> Result<OutputFormat, ExportError> {
        let format = OutputFormat::from_path(path);
        let content = match format {
            OutputFormat::Json => self.to_json()?,
            OutputFormat::Html => self.to_html(title)?,
        };

        std::fs::write(path, content).map_err(|source| ExportError::Write {
            path: path.to_path_buf(),
            source,
        })?;

        info!(
            path = %path.display(),
            ?format,
            layers = self.layers.len(),
            "Wrote deck document"
        );
        Ok(format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layer::ScatterplotLayer;
    use std::path::PathBuf;

    fn deck(basemap: &Basemap) -> Deck {
        Deck::new(
            vec![ScatterplotLayer::centers(Vec::new()).into()],
            ViewState::default(),
            basemap,
        )
    }

    #[test]
    fn test_default_view_state() {
        let view = ViewState::default();
        assert_eq!(view.latitude, 39.0);
        assert_eq!(view.longitude, -98.0);
        assert_eq!(view.zoom, 3.5);
    }

    #[test]
    fn test_json_shape() {
        let value: serde_json::Value =
            serde_json::from_str(&deck(&Basemap::carto()).to_json().unwrap()).unwrap();

        assert_eq!(value["initialViewState"]["latitude"], 39.0);
        assert_eq!(value["initialViewState"]["zoom"], 3.5);
        assert_eq!(value["mapProvider"], "carto");
        assert_eq!(
            value["mapStyle"],
            "https://basemaps.cartocdn.com/gl/positron-gl-style/style.json"
        );
        assert_eq!(value["views"][0]["@@type"], "MapView");
        assert_eq!(value["views"][0]["controller"], true);
        assert_eq!(value["layers"][0]["@@type"], "ScatterplotLayer");
    }

    #[test]
    fn test_json_never_contains_token() {
        let json = deck(&Basemap::mapbox("pk.very-secret")).to_json().unwrap();
        assert!(!json.contains("pk.very-secret"));
        assert!(json.contains("\"mapProvider\": \"mapbox\""));
    }

    #[test]
    fn test_output_format_detection() {
        assert_eq!(
            OutputFormat::from_path(&PathBuf::from("map.html")),
            OutputFormat::Html
        );
        assert_eq!(
            OutputFormat::from_path(&PathBuf::from("MAP.HTM")),
            OutputFormat::Html
        );
        assert_eq!(
            OutputFormat::from_path(&PathBuf::from("map.json")),
            OutputFormat::Json
        );
        assert_eq!(
            OutputFormat::from_path(&PathBuf::from("map")),
            OutputFormat::Json
        );
    }

    #[test]
    fn test_write_to_json_and_html() {
        let dir = tempfile::tempdir().unwrap();
        let deck = deck(&Basemap::carto());

        let json_path = dir.path().join("flows.json");
        assert_eq!(deck.write_to(&json_path, "Flows").unwrap(), OutputFormat::Json);
        let written = std::fs::read_to_string(&json_path).unwrap();
        assert!(written.contains("\"ScatterplotLayer\""));

        let html_path = dir.path().join("flows.html");
        assert_eq!(deck.write_to(&html_path, "Flows").unwrap(), OutputFormat::Html);
        let written = std::fs::read_to_string(&html_path).unwrap();
        assert!(written.starts_with("<!doctype html>"));
        assert!(written.contains("<title>Flows</title>"));
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("flows.json");
        let err = deck(&Basemap::carto()).write_to(&path, "Flows").unwrap_err();
        assert!(matches!(err, ExportError::Write { .. }));
    }
}
