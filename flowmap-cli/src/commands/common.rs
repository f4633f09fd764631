//! Common types and utilities shared across CLI commands.

use clap::ValueEnum;
use flowmap::config::ConfigFile;
use flowmap::model::{BrandFilter, FlowSelection, LaneType};

/// Lane type selection for CLI arguments.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum FlowType {
    /// Warehouse to store lanes
    Outbound,
    /// Warehouse to warehouse lanes
    Transfer,
    /// Supplier to warehouse lanes
    Inbound,
}

impl From<FlowType> for LaneType {
    fn from(flow_type: FlowType) -> Self {
        match flow_type {
            FlowType::Outbound => LaneType::Outbound,
            FlowType::Transfer => LaneType::Transfer,
            FlowType::Inbound => LaneType::Inbound,
        }
    }
}

/// Resolve the lane type selection from CLI args and config.
///
/// An empty CLI list means "not given", so the config default applies.
pub fn resolve_selection(cli_types: &[FlowType], config: &ConfigFile) -> FlowSelection {
    if cli_types.is_empty() {
        config.flows.types.clone()
    } else {
        FlowSelection::only(cli_types.iter().copied())
    }
}

/// Resolve the brand filter from CLI args and config.
pub fn resolve_brand(cli_brand: Option<&str>, config: &ConfigFile) -> BrandFilter {
    cli_brand
        .map(BrandFilter::from)
        .unwrap_or_else(|| config.flows.brand.clone())
}
