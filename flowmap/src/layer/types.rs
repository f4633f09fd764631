//! Layer definitions in deck.gl JSON form.
//!
//! Each layer serializes to the object deck.gl's `JSONConverter` expects: an
//! `@@type` class tag, the row data, and `@@=` accessor expressions naming
//! the row fields to read.

use serde::{Serialize, Serializer};
use std::fmt;

use crate::geometry::{EdgePrimitive, PointPrimitive};

/// Marker radius of facility centers, in meters.
pub const CENTER_RADIUS: f64 = 35_000.0;

/// Marker opacity of facility centers.
pub const CENTER_OPACITY: f64 = 0.9;

/// Marker radius of stores, in meters.
pub const STORE_RADIUS: f64 = 12_000.0;

/// Marker opacity of stores.
pub const STORE_OPACITY: f64 = 0.6;

/// A data accessor that reads one field from each row.
///
/// Serializes as `"@@=<field>"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accessor(pub &'static str);

impl Serialize for Accessor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&format_args!("@@={}", self.0))
    }
}

impl fmt::Display for Accessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@@={}", self.0)
    }
}

/// Straight lines between source and target positions.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineLayer {
    pub id: String,
    pub data: Vec<EdgePrimitive>,
    pub get_source_position: Accessor,
    pub get_target_position: Accessor,
    pub get_color: Accessor,
    pub get_width: f64,
    pub pickable: bool,
    pub auto_highlight: bool,
}

impl LineLayer {
    /// A non-interactive line layer drawing `data` at a uniform width.
    pub fn new(id: impl Into<String>, data: Vec<EdgePrimitive>, width: f64) -> Self {
        Self {
            id: id.into(),
            data,
            get_source_position: Accessor("source"),
            get_target_position: Accessor("target"),
            get_color: Accessor("color"),
            get_width: width,
            pickable: false,
            auto_highlight: false,
        }
    }

    /// Enable hover picking and highlight.
    pub fn interactive(mut self) -> Self {
        self.pickable = true;
        self.auto_highlight = true;
        self
    }
}

/// Filled circles at point positions.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScatterplotLayer {
    pub id: String,
    pub data: Vec<PointPrimitive>,
    pub get_position: Accessor,
    pub get_fill_color: Accessor,
    pub get_radius: f64,
    pub opacity: f64,
}

impl ScatterplotLayer {
    pub fn new(id: impl Into<String>, data: Vec<PointPrimitive>, radius: f64, opacity: f64) -> Self {
        Self {
            id: id.into(),
            data,
            get_position: Accessor("position"),
            get_fill_color: Accessor("color"),
            get_radius: radius,
            opacity,
        }
    }

    /// Facility center markers.
    pub fn centers(data: Vec<PointPrimitive>) -> Self {
        Self::new("facility-centers", data, CENTER_RADIUS, CENTER_OPACITY)
    }

    /// Store markers.
    pub fn stores(data: Vec<PointPrimitive>) -> Self {
        Self::new("stores", data, STORE_RADIUS, STORE_OPACITY)
    }
}

/// A unit handed to the rendering widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "@@type")]
pub enum RenderLayer {
    LineLayer(LineLayer),
    ScatterplotLayer(ScatterplotLayer),
}

impl RenderLayer {
    pub fn id(&self) -> &str {
        match self {
            RenderLayer::LineLayer(l) => &l.id,
            RenderLayer::ScatterplotLayer(l) => &l.id,
        }
    }

    /// Number of primitives in the layer.
    pub fn len(&self) -> usize {
        match self {
            RenderLayer::LineLayer(l) => l.data.len(),
            RenderLayer::ScatterplotLayer(l) => l.data.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_line(&self) -> Option<&LineLayer> {
        match self {
            RenderLayer::LineLayer(l) => Some(l),
            RenderLayer::ScatterplotLayer(_) => None,
        }
    }

    pub fn as_scatterplot(&self) -> Option<&ScatterplotLayer> {
        match self {
            RenderLayer::ScatterplotLayer(l) => Some(l),
            RenderLayer::LineLayer(_) => None,
        }
    }
}

impl From<LineLayer> for RenderLayer {
    fn from(layer: LineLayer) -> Self {
        RenderLayer::LineLayer(layer)
    }
}

impl From<ScatterplotLayer> for RenderLayer {
    fn from(layer: ScatterplotLayer) -> Self {
        RenderLayer::ScatterplotLayer(layer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::LonLat;
    use crate::palette::{Rgb, Rgba};
    use serde_json::json;

    #[test]
    fn test_accessor_serialization() {
        assert_eq!(
            serde_json::to_string(&Accessor("source")).unwrap(),
            "\"@@=source\""
        );
        assert_eq!(Accessor("color").to_string(), "@@=color");
    }

    #[test]
    fn test_line_layer_json() {
        let edge = EdgePrimitive {
            source: LonLat::new(1.0, 2.0),
            target: LonLat::new(3.0, 4.0),
            color: Rgba::new(0, 128, 255, 160),
            lane_type: None,
            brand: None,
        };
        let layer: RenderLayer = LineLayer::new("edges", vec![edge], 2.0).interactive().into();
        let value = serde_json::to_value(&layer).unwrap();

        assert_eq!(
            value,
            json!({
                "@@type": "LineLayer",
                "id": "edges",
                "data": [{"source": [1.0, 2.0], "target": [3.0, 4.0], "color": [0, 128, 255, 160]}],
                "getSourcePosition": "@@=source",
                "getTargetPosition": "@@=target",
                "getColor": "@@=color",
                "getWidth": 2.0,
                "pickable": true,
                "autoHighlight": true
            })
        );
    }

    #[test]
    fn test_scatterplot_layer_json() {
        let point = PointPrimitive {
            position: LonLat::new(-98.0, 39.0),
            color: Rgb::new(31, 119, 180),
        };
        let layer: RenderLayer = ScatterplotLayer::centers(vec![point]).into();
        let value = serde_json::to_value(&layer).unwrap();

        assert_eq!(value["@@type"], "ScatterplotLayer");
        assert_eq!(value["id"], "facility-centers");
        assert_eq!(value["getPosition"], "@@=position");
        assert_eq!(value["getFillColor"], "@@=color");
        assert_eq!(value["getRadius"], 35000.0);
        assert_eq!(value["opacity"], 0.9);
        assert_eq!(value["data"][0]["color"], json!([31, 119, 180]));
    }

    #[test]
    fn test_store_layer_parameters() {
        let layer = ScatterplotLayer::stores(Vec::new());
        assert_eq!(layer.get_radius, 12_000.0);
        assert_eq!(layer.opacity, 0.6);
    }

    #[test]
    fn test_render_layer_accessors() {
        let layer: RenderLayer = LineLayer::new("edges", Vec::new(), 1.0).into();
        assert_eq!(layer.id(), "edges");
        assert!(layer.is_empty());
        assert!(layer.as_line().is_some());
        assert!(layer.as_scatterplot().is_none());
    }
}
