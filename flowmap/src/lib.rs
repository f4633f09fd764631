//! flowmap - Logistics network and flow maps
//!
//! This library turns an optimizer's solved network (facility centers, store
//! assignments and transport lanes) into interactive map documents rendered
//! by deck.gl, plus a formatted cost summary.
//!
//! # High-Level API
//!
//! For most use cases, [`render::MapRenderer`] is the entry point:
//!
//! ```
//! use flowmap::basemap::BasemapSelector;
//! use flowmap::coord::LonLat;
//! use flowmap::model::{BrandFilter, FlowSelection, Lane};
//! use flowmap::render::{FlowOutcome, MapRenderer};
//!
//! let renderer = MapRenderer::new(BasemapSelector::new(None).select());
//! let centers = vec![LonLat::new(-87.6, 41.9)];
//! let lanes = vec![
//!     Lane::new("outbound", LonLat::new(-87.6, 41.9), LonLat::new(-88.0, 42.0))
//!         .with_warehouse(0),
//! ];
//!
//! match renderer.plot_flows(&lanes, &centers, &FlowSelection::all(), &BrandFilter::All) {
//!     FlowOutcome::Rendered(deck) => assert!(deck.to_json().is_ok()),
//!     FlowOutcome::NoData(notice) => println!("{}", notice),
//! }
//! ```

pub mod basemap;
pub mod color;
pub mod config;
pub mod coord;
pub mod deck;
pub mod error;
pub mod geometry;
pub mod layer;
pub mod logging;
pub mod model;
pub mod palette;
pub mod render;
pub mod scenario;
pub mod summary;

pub use error::{ExportError, RenderError};
pub use render::{FlowOutcome, MapRenderer};

/// Version of the flowmap library and CLI.
///
/// This is synchronized across all components in the workspace.
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
