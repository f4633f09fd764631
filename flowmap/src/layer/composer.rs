//! Grouping of primitives into ordered layers.

use tracing::debug;

use super::types::{LineLayer, RenderLayer, ScatterplotLayer};
use crate::geometry::{EdgePrimitive, NetworkGeometry, PointPrimitive};
use crate::model::{FlowSelection, LaneType};

/// Line width of store-to-facility edges in the network view.
pub const NETWORK_EDGE_WIDTH: f64 = 2.0;

/// Line width for a rendered lane type.
///
/// Returns `None` for lane types that never form a layer.
pub fn flow_width(lane_type: &LaneType) -> Option<f64> {
    match lane_type {
        LaneType::Outbound => Some(2.0),
        LaneType::Transfer => Some(3.0),
        LaneType::Inbound => Some(1.0),
        LaneType::Other(_) => None,
    }
}

/// Layer id for a flow layer of the given type.
fn flow_layer_id(lane_type: &LaneType) -> String {
    format!("{}-flows", lane_type)
}

/// Compose the flow view.
///
/// Edges are partitioned by lane type into outbound, transfer and inbound
/// groups. Each non-empty, enabled group becomes one interactive line layer;
/// empty or disabled groups produce no layer. The facility center layer is
/// always appended last so its markers draw on top.
pub fn compose_flow_layers(
    edges: Vec<EdgePrimitive>,
    selection: &FlowSelection,
    centers: Vec<PointPrimitive>,
) -> Vec<RenderLayer> {
    let mut groups: [Vec<EdgePrimitive>; 3] = Default::default();
    let mut dropped = 0usize;

    for edge in edges {
        let slot = LaneType::RENDERED
            .iter()
            .position(|t| edge.lane_type.as_ref() == Some(t));
        match slot {
            Some(i) => groups[i].push(edge),
            None => dropped += 1,
        }
    }

    let mut layers = Vec::with_capacity(4);
    for (lane_type, group) in LaneType::RENDERED.iter().zip(groups) {
        if group.is_empty() || !selection.contains(lane_type) {
            continue;
        }
        let Some(width) = flow_width(lane_type) else {
            continue;
        };
        layers.push(LineLayer::new(flow_layer_id(lane_type), group, width).interactive().into());
    }
    layers.push(ScatterplotLayer::centers(centers).into());

    debug!(
        layers = layers.len(),
        dropped, "Composed flow layers"
    );
    layers
}

/// Compose the network view: edges, then stores, then facility centers.
pub fn compose_network_layers(geometry: NetworkGeometry) -> Vec<RenderLayer> {
    vec![
        LineLayer::new("assignments", geometry.edges, NETWORK_EDGE_WIDTH).into(),
        ScatterplotLayer::stores(geometry.stores).into(),
        ScatterplotLayer::centers(geometry.centers).into(),
    ]
}
