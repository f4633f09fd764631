//! Rendering facade.
//!
//! [`MapRenderer`] ties the pipeline together: geometry, colors and layer
//! composition produce a [`Deck`] on the basemap chosen at construction.
//! The renderer holds no mutable state, so one instance can serve any number
//! of render calls, including from several threads.
//!
//! ```
//! use flowmap::basemap::BasemapSelector;
//! use flowmap::coord::LonLat;
//! use flowmap::model::StoreAssignment;
//! use flowmap::render::MapRenderer;
//!
//! let renderer = MapRenderer::new(BasemapSelector::new(None).select());
//! let centers = vec![LonLat::new(-87.6, 41.9)];
//! let stores = vec![StoreAssignment::new(-88.0, 42.0, 0)];
//!
//! let deck = renderer.plot_network(&stores, &centers).unwrap();
//! assert_eq!(deck.layers().len(), 3);
//! assert_eq!(deck.map_provider(), "carto");
//! ```

use tracing::{debug, info};

use crate::basemap::{Basemap, BasemapSelector};
use crate::config::{ConfigFile, DEFAULT_SQFT_PER_LB};
use crate::coord::LonLat;
use crate::deck::{Deck, ViewState};
use crate::error::RenderError;
use crate::geometry::{center_points, flow_edges, network_geometry, FlowEdges, Notice};
use crate::layer::{compose_flow_layers, compose_network_layers};
use crate::model::{BrandFilter, FlowSelection, Lane, StoreAssignment};
use crate::summary::{summarize, CostSummary, SummaryOptions, SummaryReport};

/// Result of a flow render.
#[derive(Debug, Clone)]
pub enum FlowOutcome {
    /// A map was produced
    Rendered(Deck),
    /// Nothing to draw; show the notice instead of a map
    NoData(Notice),
}

impl FlowOutcome {
    pub fn deck(&self) -> Option<&Deck> {
        match self {
            FlowOutcome::Rendered(deck) => Some(deck),
            FlowOutcome::NoData(_) => None,
        }
    }

    pub fn notice(&self) -> Option<Notice> {
        match self {
            FlowOutcome::Rendered(_) => None,
            FlowOutcome::NoData(notice) => Some(*notice),
        }
    }
}

/// Renders solved networks onto a fixed basemap and camera.
#[derive(Debug, Clone)]
pub struct MapRenderer {
    basemap: Basemap,
    view: ViewState,
    sqft_per_lb: f64,
}

impl MapRenderer {
    /// A renderer on `basemap` with the default camera.
    pub fn new(basemap: Basemap) -> Self {
        Self {
            basemap,
            view: ViewState::default(),
            sqft_per_lb: DEFAULT_SQFT_PER_LB,
        }
    }

    /// Build a renderer from user configuration and an already-resolved
    /// Mapbox credential.
    pub fn from_config(config: &ConfigFile, credential: Option<String>) -> Self {
        let basemap = BasemapSelector::new(credential)
            .with_mapbox_style(config.basemap.mapbox_style.clone())
            .with_carto_style(config.basemap.carto_style.clone())
            .select();

        info!(
            provider = basemap.name(),
            style = basemap.style_url(),
            "Selected basemap"
        );

        Self::new(basemap)
            .with_view(ViewState::new(
                config.view.latitude,
                config.view.longitude,
                config.view.zoom,
            ))
            .with_sqft_per_lb(config.summary.sqft_per_lb)
    }

    pub fn with_view(mut self, view: ViewState) -> Self {
        self.view = view;
        self
    }

    pub fn with_sqft_per_lb(mut self, sqft_per_lb: f64) -> Self {
        self.sqft_per_lb = sqft_per_lb;
        self
    }

    pub fn basemap(&self) -> &Basemap {
        &self.basemap
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn sqft_per_lb(&self) -> f64 {
        self.sqft_per_lb
    }

    /// Render the store-assignment network.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::InvalidReference`] when a store references a
    /// facility outside `centers`.
    pub fn plot_network(
        &self,
        stores: &[StoreAssignment],
        centers: &[LonLat],
    ) -> Result<Deck, RenderError> {
        let geometry = network_geometry(stores, centers)?;
        let layers = compose_network_layers(geometry);
        debug!(layers = layers.len(), "Rendered network view");
        Ok(Deck::new(layers, self.view, &self.basemap))
    }

    /// Render filtered lanes as flow layers.
    ///
    /// An empty lanes table, or filters that remove every lane, yield
    /// [`FlowOutcome::NoData`] with the message to show.
    pub fn plot_flows(
        &self,
        lanes: &[Lane],
        centers: &[LonLat],
        selection: &FlowSelection,
        brand: &BrandFilter,
    ) -> FlowOutcome {
        match flow_edges(lanes, selection, brand) {
            FlowEdges::Empty(notice) => {
                info!("{}", notice);
                FlowOutcome::NoData(notice)
            }
            FlowEdges::Edges(edges) => {
                let layers = compose_flow_layers(edges, selection, center_points(centers));
                debug!(layers = layers.len(), "Rendered flow view");
                FlowOutcome::Rendered(Deck::new(layers, self.view, &self.basemap))
            }
        }
    }

    /// Build the cost and facility summary.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::LengthMismatch`] when `demand` does not line up
    /// with `centers`.
    pub fn summary(
        &self,
        costs: &CostSummary,
        centers: &[LonLat],
        demand: &[f64],
        options: SummaryOptions,
    ) -> Result<SummaryReport, RenderError> {
        summarize(costs, centers, demand, self.sqft_per_lb, options)
    }
}
