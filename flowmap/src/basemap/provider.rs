//! Basemap providers and selection.

use std::fmt;
use tracing::debug;

/// Default Mapbox style.
pub const DEFAULT_MAPBOX_STYLE: &str = "mapbox://styles/mapbox/light-v10";

/// Default CARTO style name.
pub const DEFAULT_CARTO_STYLE: &str = "light";

/// Named CARTO styles and their style document URLs.
const CARTO_STYLES: [(&str, &str); 5] = [
    (
        "light",
        "https://basemaps.cartocdn.com/gl/positron-gl-style/style.json",
    ),
    (
        "dark",
        "https://basemaps.cartocdn.com/gl/dark-matter-gl-style/style.json",
    ),
    (
        "road",
        "https://basemaps.cartocdn.com/gl/voyager-gl-style/style.json",
    ),
    (
        "light_no_labels",
        "https://basemaps.cartocdn.com/gl/positron-nolabels-gl-style/style.json",
    ),
    (
        "dark_no_labels",
        "https://basemaps.cartocdn.com/gl/dark-matter-nolabels-gl-style/style.json",
    ),
];

/// Whether a CARTO style value is a known name or a URL.
pub fn is_valid_carto_style(style: &str) -> bool {
    style.contains("://") || CARTO_STYLES.iter().any(|(name, _)| *name == style)
}

/// Resolve a CARTO style name to its style URL.
///
/// URLs pass through unchanged; unknown names fall back to `light`.
pub fn carto_style_url(style: &str) -> &str {
    if style.contains("://") {
        return style;
    }
    CARTO_STYLES
        .iter()
        .find(|(name, _)| *name == style)
        .map(|(_, url)| *url)
        .unwrap_or(CARTO_STYLES[0].1)
}

/// The tiled backdrop drawn beneath the layers.
#[derive(Clone, PartialEq, Eq)]
pub enum Basemap {
    /// Mapbox styled basemap.
    ///
    /// Requires a Mapbox access token.
    Mapbox {
        /// Mapbox access token
        api_key: String,
        /// `mapbox://` style URL
        style: String,
    },

    /// CARTO basemap.
    ///
    /// Free, no credential required.
    Carto {
        /// Style name (`light`, `dark`, `road`, ...) or style URL
        style: String,
    },
}

impl Basemap {
    /// CARTO basemap with the default style.
    pub fn carto() -> Self {
        Self::Carto {
            style: DEFAULT_CARTO_STYLE.to_string(),
        }
    }

    /// Mapbox basemap with the default style.
    pub fn mapbox(api_key: impl Into<String>) -> Self {
        Self::Mapbox {
            api_key: api_key.into(),
            style: DEFAULT_MAPBOX_STYLE.to_string(),
        }
    }

    /// Replace the style.
    pub fn with_style(mut self, new_style: impl Into<String>) -> Self {
        match &mut self {
            Self::Mapbox { style, .. } | Self::Carto { style } => *style = new_style.into(),
        }
        self
    }

    /// Human-readable provider name.
    pub fn name(&self) -> &str {
        match self {
            Self::Mapbox { .. } => "Mapbox",
            Self::Carto { .. } => "CARTO",
        }
    }

    /// Provider identifier understood by deck.gl (`mapProvider`).
    pub fn provider_id(&self) -> &'static str {
        match self {
            Self::Mapbox { .. } => "mapbox",
            Self::Carto { .. } => "carto",
        }
    }

    /// Whether this provider needs an access token.
    pub fn requires_api_key(&self) -> bool {
        matches!(self, Self::Mapbox { .. })
    }

    pub fn api_key(&self) -> Option<&str> {
        match self {
            Self::Mapbox { api_key, .. } => Some(api_key),
            Self::Carto { .. } => None,
        }
    }

    /// Style URL handed to the map renderer.
    pub fn style_url(&self) -> &str {
        match self {
            Self::Mapbox { style, .. } => style,
            Self::Carto { style } => carto_style_url(style),
        }
    }
}

impl Default for Basemap {
    fn default() -> Self {
        Self::carto()
    }
}

// Keeps the access token out of logs.
impl fmt::Debug for Basemap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mapbox { style, .. } => f
                .debug_struct("Mapbox")
                .field("api_key", &"<redacted>")
                .field("style", style)
                .finish(),
            Self::Carto { style } => f.debug_struct("Carto").field("style", style).finish(),
        }
    }
}

/// Chooses the basemap from an optional, already-resolved credential.
///
/// The credential is supplied once at construction; selection never consults
/// the environment.
#[derive(Clone)]
pub struct BasemapSelector {
    credential: Option<String>,
    mapbox_style: String,
    carto_style: String,
}

impl BasemapSelector {
    /// Create a selector. Blank credentials count as absent.
    pub fn new(credential: Option<String>) -> Self {
        Self {
            credential: credential.filter(|c| !c.trim().is_empty()),
            mapbox_style: DEFAULT_MAPBOX_STYLE.to_string(),
            carto_style: DEFAULT_CARTO_STYLE.to_string(),
        }
    }

    pub fn with_mapbox_style(mut self, style: impl Into<String>) -> Self {
        self.mapbox_style = style.into();
        self
    }

    pub fn with_carto_style(mut self, style: impl Into<String>) -> Self {
        self.carto_style = style.into();
        self
    }

    pub fn has_credential(&self) -> bool {
        self.credential.is_some()
    }

    /// Mapbox when a credential is present, otherwise CARTO.
    pub fn select(&self) -> Basemap {
        match &self.credential {
            Some(key) => Basemap::mapbox(key.trim()).with_style(self.mapbox_style.clone()),
            None => {
                debug!("No Mapbox credential configured, using CARTO basemap");
                Basemap::carto().with_style(self.carto_style.clone())
            }
        }
    }
}

impl fmt::Debug for BasemapSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasemapSelector")
            .field("has_credential", &self.has_credential())
            .field("mapbox_style", &self.mapbox_style)
            .field("carto_style", &self.carto_style)
            .finish()
    }
}
