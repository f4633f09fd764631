//! Render layers and their composition.
//!
//! - [`types`]: the layer kinds and their deck.gl JSON form
//! - [`composer`]: grouping primitives into layers in draw order

mod composer;
mod types;

pub use composer::{compose_flow_layers, compose_network_layers, flow_width, NETWORK_EDGE_WIDTH};
pub use types::{
    Accessor, LineLayer, RenderLayer, ScatterplotLayer, CENTER_OPACITY, CENTER_RADIUS,
    STORE_OPACITY, STORE_RADIUS,
};
