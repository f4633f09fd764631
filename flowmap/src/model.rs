//! Input records supplied by the upstream optimizer.
//!
//! These are read-only views of already-solved results: which facility each
//! store is assigned to, and the lanes that carry product between suppliers,
//! warehouses and stores.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::coord::LonLat;

/// A store and the index of the facility serving it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreAssignment {
    #[serde(alias = "Longitude")]
    pub longitude: f64,
    #[serde(alias = "Latitude")]
    pub latitude: f64,
    /// Index into the facility center sequence
    #[serde(alias = "Warehouse")]
    pub warehouse: usize,
}

impl StoreAssignment {
    pub fn new(longitude: f64, latitude: f64, warehouse: usize) -> Self {
        Self {
            longitude,
            latitude,
            warehouse,
        }
    }

    /// The store's position.
    pub fn position(&self) -> LonLat {
        LonLat::new(self.longitude, self.latitude)
    }
}

/// Direction of product movement along a lane.
///
/// Unrecognized type strings are preserved as [`LaneType::Other`] so they
/// still resolve to a color, but they never form a layer of their own.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LaneType {
    /// Warehouse to store
    Outbound,
    /// Warehouse to warehouse
    Transfer,
    /// Supplier to warehouse
    Inbound,
    /// Anything else the upstream table contains
    Other(String),
}

impl LaneType {
    /// The three lane types that render as layers, in draw order.
    pub const RENDERED: [LaneType; 3] = [LaneType::Outbound, LaneType::Transfer, LaneType::Inbound];

    pub fn as_str(&self) -> &str {
        match self {
            LaneType::Outbound => "outbound",
            LaneType::Transfer => "transfer",
            LaneType::Inbound => "inbound",
            LaneType::Other(s) => s,
        }
    }
}

impl From<&str> for LaneType {
    fn from(s: &str) -> Self {
        match s {
            "outbound" => LaneType::Outbound,
            "transfer" => LaneType::Transfer,
            "inbound" => LaneType::Inbound,
            other => LaneType::Other(other.to_string()),
        }
    }
}

impl From<String> for LaneType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "outbound" | "transfer" | "inbound" => LaneType::from(s.as_str()),
            _ => LaneType::Other(s),
        }
    }
}

impl From<LaneType> for String {
    fn from(t: LaneType) -> Self {
        match t {
            LaneType::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for LaneType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(LaneType::from(s))
    }
}

impl fmt::Display for LaneType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the lanes table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "LaneRow", into = "LaneRow")]
pub struct Lane {
    pub lane_type: LaneType,
    pub origin: LonLat,
    pub destination: LonLat,
    /// Brand tag, when the table carries a brand column
    pub brand: Option<String>,
    /// Warehouse index, used for coloring only
    pub wh_idx: Option<usize>,
    /// Tier-one supplier index, used for coloring only
    pub tier1_idx: Option<usize>,
}

impl Lane {
    pub fn new(lane_type: impl Into<LaneType>, origin: LonLat, destination: LonLat) -> Self {
        Self {
            lane_type: lane_type.into(),
            origin,
            destination,
            brand: None,
            wh_idx: None,
            tier1_idx: None,
        }
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    pub fn with_warehouse(mut self, wh_idx: usize) -> Self {
        self.wh_idx = Some(wh_idx);
        self
    }

    pub fn with_tier1(mut self, tier1_idx: usize) -> Self {
        self.tier1_idx = Some(tier1_idx);
        self
    }
}

/// Flat column layout of a lane as the upstream table stores it.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct LaneRow {
    lane_type: LaneType,
    origin_lon: f64,
    origin_lat: f64,
    dest_lon: f64,
    dest_lat: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    wh_idx: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tier1_idx: Option<usize>,
}

impl From<LaneRow> for Lane {
    fn from(row: LaneRow) -> Self {
        Self {
            lane_type: row.lane_type,
            origin: LonLat::new(row.origin_lon, row.origin_lat),
            destination: LonLat::new(row.dest_lon, row.dest_lat),
            brand: row.brand,
            wh_idx: row.wh_idx,
            tier1_idx: row.tier1_idx,
        }
    }
}

impl From<Lane> for LaneRow {
    fn from(lane: Lane) -> Self {
        Self {
            lane_type: lane.lane_type,
            origin_lon: lane.origin.lon,
            origin_lat: lane.origin.lat,
            dest_lon: lane.destination.lon,
            dest_lat: lane.destination.lat,
            brand: lane.brand,
            wh_idx: lane.wh_idx,
            tier1_idx: lane.tier1_idx,
        }
    }
}

/// The set of lane types enabled for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowSelection {
    types: BTreeSet<LaneType>,
}

impl FlowSelection {
    /// Every rendered lane type.
    pub fn all() -> Self {
        Self::only(LaneType::RENDERED)
    }

    /// Exactly the given lane types.
    pub fn only<I, T>(types: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<LaneType>,
    {
        Self {
            types: types.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, lane_type: &LaneType) -> bool {
        self.types.contains(lane_type)
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LaneType> {
        self.types.iter()
    }
}

impl Default for FlowSelection {
    fn default() -> Self {
        Self::all()
    }
}

impl FromStr for FlowSelection {
    type Err = Infallible;

    /// Parses a comma-separated list such as `outbound,transfer`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::only(
            s.split(',')
                .map(str::trim)
                .filter(|part| !part.is_empty()),
        ))
    }
}

impl fmt::Display for FlowSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Variant order is draw order, so the set already iterates correctly
        let parts: Vec<&str> = self.types.iter().map(LaneType::as_str).collect();
        f.write_str(&parts.join(","))
    }
}

/// Restricts flow rendering to a single brand.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BrandFilter {
    /// No brand restriction
    #[default]
    All,
    /// Keep only lanes tagged with this brand
    Only(String),
}

impl BrandFilter {
    /// Sentinel string meaning "all brands".
    pub const ALL_SENTINEL: &'static str = "__ALL__";

    /// Whether a lane with the given brand tag passes the filter.
    pub fn matches(&self, brand: Option<&str>) -> bool {
        match self {
            BrandFilter::All => true,
            BrandFilter::Only(wanted) => brand == Some(wanted.as_str()),
        }
    }
}

impl From<&str> for BrandFilter {
    fn from(s: &str) -> Self {
        let s = s.trim();
        if s.is_empty() || s == Self::ALL_SENTINEL {
            BrandFilter::All
        } else {
            BrandFilter::Only(s.to_string())
        }
    }
}

impl fmt::Display for BrandFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BrandFilter::All => f.write_str(Self::ALL_SENTINEL),
            BrandFilter::Only(brand) => f.write_str(brand),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lane_type_parsing() {
        assert_eq!(LaneType::from("outbound"), LaneType::Outbound);
        assert_eq!(LaneType::from("transfer"), LaneType::Transfer);
        assert_eq!(LaneType::from("inbound"), LaneType::Inbound);
        assert_eq!(
            LaneType::from("backhaul"),
            LaneType::Other("backhaul".to_string())
        );
        assert_eq!(LaneType::from(String::from("inbound")), LaneType::Inbound);
    }

    #[test]
    fn test_lane_type_string_roundtrip() {
        for t in ["outbound", "transfer", "inbound", "backhaul"] {
            assert_eq!(String::from(LaneType::from(t)), t);
        }
    }

    #[test]
    fn test_lane_deserializes_from_flat_row() {
        let json = r#"{
            "lane_type": "inbound",
            "origin_lon": -90.1, "origin_lat": 35.0,
            "dest_lon": -87.6, "dest_lat": 41.9,
            "tier1_idx": 2
        }"#;
        let lane: Lane = serde_json::from_str(json).unwrap();
        assert_eq!(lane.lane_type, LaneType::Inbound);
        assert_eq!(lane.origin, LonLat::new(-90.1, 35.0));
        assert_eq!(lane.destination, LonLat::new(-87.6, 41.9));
        assert_eq!(lane.tier1_idx, Some(2));
        assert_eq!(lane.wh_idx, None);
        assert_eq!(lane.brand, None);
    }

    #[test]
    fn test_lane_serializes_to_flat_row() {
        let lane = Lane::new("outbound", LonLat::new(1.0, 2.0), LonLat::new(3.0, 4.0))
            .with_brand("Acme")
            .with_warehouse(1);
        let value = serde_json::to_value(&lane).unwrap();
        assert_eq!(value["lane_type"], "outbound");
        assert_eq!(value["dest_lat"], 4.0);
        assert_eq!(value["brand"], "Acme");
        assert_eq!(value["wh_idx"], 1);
        assert!(value.get("tier1_idx").is_none());
    }

    #[test]
    fn test_store_accepts_capitalized_columns() {
        let json = r#"{"Longitude": -98.0, "Latitude": 39.0, "Warehouse": 3}"#;
        let store: StoreAssignment = serde_json::from_str(json).unwrap();
        assert_eq!(store, StoreAssignment::new(-98.0, 39.0, 3));
        assert_eq!(store.position(), LonLat::new(-98.0, 39.0));
    }

    #[test]
    fn test_flow_selection_parse() {
        let selection: FlowSelection = "outbound, inbound".parse().unwrap();
        assert!(selection.contains(&LaneType::Outbound));
        assert!(selection.contains(&LaneType::Inbound));
        assert!(!selection.contains(&LaneType::Transfer));
        assert_eq!(selection.to_string(), "outbound,inbound");
    }

    #[test]
    fn test_flow_selection_default_is_all() {
        let selection = FlowSelection::default();
        assert_eq!(selection.to_string(), "outbound,transfer,inbound");
        assert_eq!(selection, FlowSelection::all());
    }

    #[test]
    fn test_flow_selection_empty() {
        let selection: FlowSelection = "".parse().unwrap();
        assert!(selection.is_empty());
        assert_eq!(selection.to_string(), "");
    }

    #[test]
    fn test_brand_filter_from_str() {
        assert_eq!(BrandFilter::from("__ALL__"), BrandFilter::All);
        assert_eq!(BrandFilter::from(""), BrandFilter::All);
        assert_eq!(
            BrandFilter::from("Acme"),
            BrandFilter::Only("Acme".to_string())
        );
    }

    #[test]
    fn test_brand_filter_matches() {
        let only = BrandFilter::Only("Acme".to_string());
        assert!(only.matches(Some("Acme")));
        assert!(!only.matches(Some("Globex")));
        assert!(!only.matches(None));
        assert!(BrandFilter::All.matches(None));
        assert!(BrandFilter::All.matches(Some("Globex")));
    }
}
