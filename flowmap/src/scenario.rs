//! Solved scenario files.
//!
//! A scenario is the optimizer's output for one network: facility centers,
//! store assignments, lanes, per-facility demand and the cost breakdown.
//!
//! ```json
//! {
//!   "centers": [[-87.6, 41.9], [-118.2, 34.1]],
//!   "stores": [{"longitude": -88.0, "latitude": 42.0, "warehouse": 0}],
//!   "lanes": [{"lane_type": "outbound", "origin_lon": -87.6, "origin_lat": 41.9,
//!              "dest_lon": -88.0, "dest_lat": 42.0, "wh_idx": 0}],
//!   "demand": [1200000, 800000],
//!   "costs": {"total": 1.0e7, "outbound": 6.0e6, "warehousing": 4.0e6}
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

use crate::coord::LonLat;
use crate::model::{Lane, StoreAssignment};
use crate::summary::{CostSummary, SummaryOptions};

/// Errors loading a scenario file.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("Failed to read scenario {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid scenario {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// One solved network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Facility positions; a facility's index is its position here
    pub centers: Vec<LonLat>,
    #[serde(default)]
    pub stores: Vec<StoreAssignment>,
    #[serde(default)]
    pub lanes: Vec<Lane>,
    /// Annual demand per facility, parallel to `centers`
    #[serde(default)]
    pub demand: Vec<f64>,
    #[serde(default)]
    pub costs: CostSummary,
    #[serde(default)]
    pub consider_inbound: bool,
    #[serde(default)]
    pub show_transfers: bool,
}

impl Scenario {
    /// Load a scenario from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let content = std::fs::read_to_string(path).map_err(|source| ScenarioError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let scenario = Self::from_json(&content).map_err(|source| ScenarioError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(
            path = %path.display(),
            centers = scenario.centers.len(),
            stores = scenario.stores.len(),
            lanes = scenario.lanes.len(),
            "Loaded scenario"
        );
        scenario.warn_invalid_coordinates();
        Ok(scenario)
    }

    /// Parse a scenario from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Which optional cost components the summary shows.
    pub fn summary_options(&self) -> SummaryOptions {
        SummaryOptions {
            consider_inbound: self.consider_inbound,
            show_transfers: self.show_transfers,
        }
    }

    fn warn_invalid_coordinates(&self) {
        let bad_centers = self.centers.iter().filter(|c| !c.is_valid()).count();
        let bad_stores = self
            .stores
            .iter()
            .filter(|s| !s.position().is_valid())
            .count();
        if bad_centers > 0 || bad_stores > 0 {
            warn!(
                bad_centers,
                bad_stores, "Scenario contains out-of-range coordinates"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LaneType;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "centers": [[-87.6, 41.9], [-118.2, 34.1]],
        "stores": [
            {"longitude": -88.0, "latitude": 42.0, "warehouse": 0},
            {"Longitude": -117.0, "Latitude": 33.0, "Warehouse": 1}
        ],
        "lanes": [
            {"lane_type": "outbound", "origin_lon": -87.6, "origin_lat": 41.9,
             "dest_lon": -88.0, "dest_lat": 42.0, "brand": "Acme", "wh_idx": 0},
            {"lane_type": "inbound", "origin_lon": -90.0, "origin_lat": 35.0,
             "dest_lon": -87.6, "dest_lat": 41.9, "tier1_idx": 3}
        ],
        "demand": [1200000, 800000],
        "costs": {"total": 10000000, "outbound": 6000000, "warehousing": 4000000},
        "consider_inbound": true
    }"#;

    #[test]
    fn test_parse_sample() {
        let scenario = Scenario::from_json(SAMPLE).unwrap();

        assert_eq!(scenario.centers[1], LonLat::new(-118.2, 34.1));
        assert_eq!(scenario.stores[1].warehouse, 1);
        assert_eq!(scenario.lanes.len(), 2);
        assert_eq!(scenario.lanes[0].lane_type, LaneType::Outbound);
        assert_eq!(scenario.lanes[0].brand.as_deref(), Some("Acme"));
        assert_eq!(scenario.lanes[1].tier1_idx, Some(3));
        assert_eq!(scenario.lanes[1].wh_idx, None);
        assert_eq!(scenario.costs.inbound, 0.0);
        assert!(scenario.summary_options().consider_inbound);
        assert!(!scenario.summary_options().show_transfers);
    }

    #[test]
    fn test_minimal_scenario() {
        let scenario = Scenario::from_json(r#"{"centers": []}"#).unwrap();
        assert!(scenario.stores.is_empty());
        assert!(scenario.lanes.is_empty());
        assert_eq!(scenario.costs, CostSummary::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let scenario = Scenario::load(file.path()).unwrap();
        assert_eq!(scenario.centers.len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Scenario::load(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, ScenarioError::Read { .. }));
    }

    #[test]
    fn test_load_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{\"centers\": 3}").unwrap();

        let err = Scenario::load(file.path()).unwrap_err();
        assert!(matches!(err, ScenarioError::Parse { .. }));
        assert!(err.to_string().starts_with("Invalid scenario"));
    }
}
