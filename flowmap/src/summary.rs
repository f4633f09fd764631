//! Cost and facility summary.
//!
//! Formatting only: the one computed value is each facility's floor area,
//! demand multiplied by the configured area-per-pound factor.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::coord::LonLat;
use crate::error::RenderError;

/// Annual cost totals from the optimizer.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CostSummary {
    pub total: f64,
    pub outbound: f64,
    #[serde(default)]
    pub inbound: f64,
    #[serde(default)]
    pub transfer: f64,
    pub warehousing: f64,
}

/// Which optional cost components the scenario models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SummaryOptions {
    /// Show inbound cost
    pub consider_inbound: bool,
    /// Show transfer cost
    pub show_transfers: bool,
}

/// A labelled, formatted value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metric {
    pub label: &'static str,
    pub value: String,
}

impl Metric {
    fn currency(label: &'static str, amount: f64) -> Self {
        Self {
            label,
            value: format_currency(amount),
        }
    }
}

/// Demand and size of one facility.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FacilityRow {
    pub demand_lbs: f64,
    pub sqft: f64,
    pub lat: f64,
    pub lon: f64,
}

/// Everything the summary panel shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryReport {
    pub total: Metric,
    /// Number of metric columns the component row is laid out in
    pub columns: usize,
    /// Cost components in display order
    pub components: Vec<Metric>,
    pub facilities: Vec<FacilityRow>,
}

/// Build the summary report.
///
/// # Errors
///
/// Returns [`RenderError::LengthMismatch`] when `demand` and `centers` differ
/// in length.
pub fn summarize(
    costs: &CostSummary,
    centers: &[LonLat],
    demand: &[f64],
    sqft_per_lb: f64,
    options: SummaryOptions,
) -> Result<SummaryReport, RenderError> {
    if centers.len() != demand.len() {
        return Err(RenderError::LengthMismatch {
            facilities: centers.len(),
            demand: demand.len(),
        });
    }

    let mut components = vec![Metric::currency("Outbound", costs.outbound)];
    if options.consider_inbound {
        components.push(Metric::currency("Inbound", costs.inbound));
    }
    if options.show_transfers {
        components.push(Metric::currency("Transfers", costs.transfer));
    }
    components.push(Metric::currency("Warehousing", costs.warehousing));

    let columns = if options.consider_inbound || options.show_transfers {
        4
    } else {
        2
    };

    let facilities = centers
        .iter()
        .zip(demand)
        .map(|(center, &demand_lbs)| FacilityRow {
            demand_lbs,
            sqft: demand_lbs * sqft_per_lb,
            lat: center.lat,
            lon: center.lon,
        })
        .collect();

    Ok(SummaryReport {
        total: Metric::currency("Total annual cost", costs.total),
        columns,
        components,
        facilities,
    })
}

/// Insert thousands separators into a run of ASCII digits.
fn group_digits(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// Format a number rounded to a whole value with thousands separators.
///
/// Non-finite values are printed as-is.
pub fn format_grouped(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let grouped = group_digits(&format!("{:.0}", value.abs()));
    if value < 0.0 && grouped != "0" {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Format a number with thousands separators, keeping its fractional digits,
/// e.g. `61,728.395` or `60,000.0`.
pub fn format_grouped_decimal(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    // f64 Display is the shortest round-trip form and never uses an exponent
    let repr = value.abs().to_string();
    let (whole, fraction) = repr.split_once('.').unwrap_or((repr.as_str(), "0"));
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{}.{}", sign, group_digits(whole), fraction)
}

/// Whole-pound demand prints as an integer, anything else keeps its decimals.
fn format_demand(value: f64) -> String {
    if value.fract() == 0.0 {
        format_grouped(value)
    } else {
        format_grouped_decimal(value)
    }
}

/// Format a dollar amount, e.g. `$1,234,568`.
pub fn format_currency(amount: f64) -> String {
    let grouped = format_grouped(amount);
    match grouped.strip_prefix('-') {
        Some(abs) => format!("-${}", abs),
        None => format!("${}", grouped),
    }
}

impl fmt::Display for SummaryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Cost Summary")?;
        writeln!(f, "============")?;
        writeln!(f, "{}: {}", self.total.label, self.total.value)?;
        writeln!(f)?;
        for metric in &self.components {
            writeln!(f, "  {:<12} {:>16}", metric.label, metric.value)?;
        }
        writeln!(f)?;
        writeln!(f, "Warehouse Demand & Size")?;
        writeln!(f, "=======================")?;
        writeln!(
            f,
            "{:>3}  {:>14}  {:>12}  {:>10}  {:>11}",
            "#", "DemandLbs", "SqFt", "Lat", "Lon"
        )?;
        for (i, row) in self.facilities.iter().enumerate() {
            writeln!(
                f,
                "{:>3}  {:>14}  {:>12}  {:>10.4}  {:>11.4}",
                i,
                format_demand(row.demand_lbs),
                format_grouped_decimal(row.sqft),
                row.lat,
                row.lon
            )?;
        }
        Ok(())
    }
}
