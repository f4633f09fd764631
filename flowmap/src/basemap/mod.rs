//! Basemap selection.
//!
//! The map needs a tiled backdrop. When a Mapbox access token is available the
//! styled Mapbox basemap is used; otherwise the free CARTO basemap is used so
//! a backdrop always renders without credentials.
//!
//! ```
//! use flowmap::basemap::{Basemap, BasemapSelector};
//!
//! // No credential: CARTO
//! let basemap = BasemapSelector::new(None).select();
//! assert_eq!(basemap, Basemap::carto());
//!
//! // With credential: Mapbox
//! let basemap = BasemapSelector::new(Some("pk.example".to_string())).select();
//! assert_eq!(basemap.provider_id(), "mapbox");
//! ```

mod credential;
mod provider;

pub use credential::{mapbox_credential, resolve_credential, CredentialSource, MAPBOX_API_KEY_ENV};
pub use provider::{
    carto_style_url, is_valid_carto_style, Basemap, BasemapSelector, DEFAULT_CARTO_STYLE,
    DEFAULT_MAPBOX_STYLE,
};
