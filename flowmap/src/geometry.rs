//! Point and line primitives built from solved network data.
//!
//! Two pipelines live here:
//!
//! - **Network**: one edge per store to its assigned facility, plus points for
//!   stores and facility centers.
//! - **Flows**: lanes filtered by brand and lane type, each turned into an
//!   edge with explicit `[lon, lat]` endpoints and a resolved color.
//!
//! Both are pure functions of their inputs.

use serde::Serialize;
use std::fmt;
use tracing::debug;

use crate::color::resolve_lane_color;
use crate::coord::LonLat;
use crate::error::RenderError;
use crate::model::{BrandFilter, FlowSelection, Lane, LaneType, StoreAssignment};
use crate::palette::{color_for_index, Rgb, Rgba};

/// Alpha of store-to-facility edges in the network view.
pub const NETWORK_EDGE_ALPHA: u8 = 120;

/// Fill color shared by every store marker.
pub const STORE_COLOR: Rgb = Rgb::new(0, 128, 255);

/// A colored line between two positions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgePrimitive {
    pub source: LonLat,
    pub target: LonLat,
    pub color: Rgba,
    /// Lane type, present for flow edges
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lane_type: Option<LaneType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
}

/// A colored marker at a position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointPrimitive {
    pub position: LonLat,
    pub color: Rgb,
}

/// Primitives for the store-assignment network view.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NetworkGeometry {
    /// One edge per store
    pub edges: Vec<EdgePrimitive>,
    /// One point per store
    pub stores: Vec<PointPrimitive>,
    /// One point per facility
    pub centers: Vec<PointPrimitive>,
}

impl NetworkGeometry {
    /// Total number of point primitives.
    pub fn point_count(&self) -> usize {
        self.stores.len() + self.centers.len()
    }
}

/// Informational outcome when there is nothing to draw.
///
/// Not an error: the caller shows the message and skips rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// The lanes table was empty to begin with
    NoLanes,
    /// Filtering removed every lane
    NoMatchingFlows,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::NoLanes => "No lanes to display.",
            Notice::NoMatchingFlows => "No flows match the current filters.",
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Result of the flow geometry pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum FlowEdges {
    /// Colored edges for every lane that passed the filters, in input order
    Edges(Vec<EdgePrimitive>),
    /// Nothing to draw
    Empty(Notice),
}

/// Marker for each facility center, colored by its index.
pub fn center_points(centers: &[LonLat]) -> Vec<PointPrimitive> {
    centers
        .iter()
        .enumerate()
        .map(|(i, &position)| PointPrimitive {
            position,
            color: color_for_index(i),
        })
        .collect()
}

/// Build the store-assignment network.
///
/// # Errors
///
/// Returns [`RenderError::InvalidReference`] when a store's facility index is
/// outside `centers`.
pub fn network_geometry(
    stores: &[StoreAssignment],
    centers: &[LonLat],
) -> Result<NetworkGeometry, RenderError> {
    let mut edges = Vec::with_capacity(stores.len());
    let mut store_points = Vec::with_capacity(stores.len());

    for (row, store) in stores.iter().enumerate() {
        let target = centers
            .get(store.warehouse)
            .copied()
            .ok_or(RenderError::InvalidReference {
                row,
                index: store.warehouse,
                facility_count: centers.len(),
            })?;
        edges.push(EdgePrimitive {
            source: store.position(),
            target,
            color: color_for_index(store.warehouse).with_alpha(NETWORK_EDGE_ALPHA),
            lane_type: None,
            brand: None,
        });
        store_points.push(PointPrimitive {
            position: store.position(),
            color: STORE_COLOR,
        });
    }

    debug!(
        stores = stores.len(),
        centers = centers.len(),
        "Built network geometry"
    );

    Ok(NetworkGeometry {
        edges,
        stores: store_points,
        centers: center_points(centers),
    })
}

/// Whether the lanes table carries a brand column at all.
///
/// Brands are optional per row, so a table where no row has one is treated
/// as having no brand column.
pub fn has_brand_column(lanes: &[Lane]) -> bool {
    lanes.iter().any(|lane| lane.brand.is_some())
}

/// Filter lanes and turn the survivors into colored edges.
///
/// The brand filter applies only when the table has a brand column; the
/// lane-type filter always applies.
pub fn flow_edges(lanes: &[Lane], selection: &FlowSelection, brand: &BrandFilter) -> FlowEdges {
    if lanes.is_empty() {
        return FlowEdges::Empty(Notice::NoLanes);
    }

    let apply_brand = has_brand_column(lanes);
    let edges: Vec<EdgePrimitive> = lanes
        .iter()
        .filter(|lane| !apply_brand || brand.matches(lane.brand.as_deref()))
        .filter(|lane| selection.contains(&lane.lane_type))
        .map(|lane| EdgePrimitive {
            source: lane.origin,
            target: lane.destination,
            color: resolve_lane_color(lane),
            lane_type: Some(lane.lane_type.clone()),
            brand: lane.brand.clone(),
        })
        .collect();

    debug!(
        lanes = lanes.len(),
        kept = edges.len(),
        selection = %selection,
        brand = %brand,
        "Filtered flow lanes"
    );

    if edges.is_empty() {
        FlowEdges::Empty(Notice::NoMatchingFlows)
    } else {
        FlowEdges::Edges(edges)
    }
}
