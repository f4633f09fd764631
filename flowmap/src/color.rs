//! Lane color resolution.
//!
//! A lane's color depends on which optional attributes it carries. The rules
//! are evaluated in priority order and the first one that produces a color
//! wins; lanes no rule applies to fall back to a fixed color per lane type.
//! Resolution is total: every lane gets a color.

use crate::model::{Lane, LaneType};
use crate::palette::{color_for_index, Rgba};

/// Alpha for outbound and transfer lanes colored by warehouse.
pub const OUTBOUND_ALPHA: u8 = 160;

/// Alpha for inbound lanes colored by supplier or warehouse.
pub const INBOUND_ALPHA: u8 = 140;

/// A named coloring rule.
///
/// `apply` returns `None` when the rule does not match the lane.
#[derive(Debug, Clone, Copy)]
pub struct ColorRule {
    pub name: &'static str,
    pub apply: fn(&Lane) -> Option<Rgba>,
}

/// Coloring rules in priority order.
pub const LANE_COLOR_RULES: [ColorRule; 3] = [
    ColorRule {
        name: "outbound-or-transfer-by-warehouse",
        apply: outbound_by_warehouse,
    },
    ColorRule {
        name: "inbound-by-tier1",
        apply: inbound_by_tier1,
    },
    ColorRule {
        name: "inbound-by-warehouse",
        apply: inbound_by_warehouse,
    },
];

fn outbound_by_warehouse(lane: &Lane) -> Option<Rgba> {
    match lane.lane_type {
        LaneType::Outbound | LaneType::Transfer => lane
            .wh_idx
            .map(|i| color_for_index(i).with_alpha(OUTBOUND_ALPHA)),
        _ => None,
    }
}

fn inbound_by_tier1(lane: &Lane) -> Option<Rgba> {
    match lane.lane_type {
        LaneType::Inbound => lane
            .tier1_idx
            .map(|i| color_for_index(i).with_alpha(INBOUND_ALPHA)),
        _ => None,
    }
}

fn inbound_by_warehouse(lane: &Lane) -> Option<Rgba> {
    match lane.lane_type {
        LaneType::Inbound => lane
            .wh_idx
            .map(|i| color_for_index(i).with_alpha(INBOUND_ALPHA)),
        _ => None,
    }
}

/// Fallback color for a lane type.
pub fn default_lane_color(lane_type: &LaneType) -> Rgba {
    match lane_type {
        LaneType::Outbound => Rgba::new(0, 128, 255, 160),
        LaneType::Transfer => Rgba::new(255, 127, 14, 180),
        LaneType::Inbound => Rgba::new(44, 160, 44, 140),
        LaneType::Other(_) => Rgba::new(127, 127, 127, 140),
    }
}

/// Resolve the display color of a lane.
pub fn resolve_lane_color(lane: &Lane) -> Rgba {
    LANE_COLOR_RULES
        .iter()
        .find_map(|rule| (rule.apply)(lane))
        .unwrap_or_else(|| default_lane_color(&lane.lane_type))
}

/// Name of the first rule matching the lane, or `None` for the fallback.
pub fn matching_rule(lane: &Lane) -> Option<&'static str> {
    LANE_COLOR_RULES
        .iter()
        .find(|rule| (rule.apply)(lane).is_some())
        .map(|rule| rule.name)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::coord::LonLat;
    use crate::palette::color_for_index;
    use proptest::prelude::*;

    fn lane(lane_type: &str) -> Lane {
        Lane::new(lane_type, LonLat::new(0.0, 0.0), LonLat::new(1.0, 1.0))
    }

    proptest! {
        #[test]
        fn warehouse_lanes_use_palette(
            wh in 0usize..10_000,
            tier1 in proptest::option::of(0usize..10_000),
            transfer in any::<bool>(),
        ) {
            let mut l = lane(if transfer { "transfer" } else { "outbound" }).with_warehouse(wh);
            l.tier1_idx = tier1;
            let color = resolve_lane_color(&l);
            prop_assert_eq!(color.rgb(), color_for_index(wh));
            prop_assert_eq!(color.a, OUTBOUND_ALPHA);
        }

        #[test]
        fn inbound_tier1_takes_priority(
            tier1 in 0usize..10_000,
            wh in proptest::option::of(0usize..10_000),
        ) {
            let mut l = lane("inbound").with_tier1(tier1);
            l.wh_idx = wh;
            let color = resolve_lane_color(&l);
            prop_assert_eq!(color.rgb(), color_for_index(tier1));
            prop_assert_eq!(color.a, INBOUND_ALPHA);
        }
    }
}
