// src/dashboard/tiles.rs

use serde::Serialize;

use crate::model::outputs::PolicyOutputs;

/// One KPI tile: a label, the raw value and its display string.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiTile {
    pub label: &'static str,
    pub value: f64,
    pub display: String,
}

impl KpiTile {
    fn units(label: &'static str, value: f64) -> Self {
        Self {
            label,
            value,
            display: group_thousands(value),
        }
    }

    fn money(label: &'static str, value: f64) -> Self {
        Self {
            label,
            value,
            display: format!("${}", group_thousands(value)),
        }
    }

    /// Signed delta: an explicit `+` when the value is not negative.
    fn signed(label: &'static str, value: f64) -> Self {
        let grouped = group_thousands(value);
        let display = if value >= 0.0 {
            format!("+{grouped}")
        } else {
            grouped
        };
        Self {
            label,
            value,
            display,
        }
    }
}

/// The headline row of five tiles.
pub fn kpi_row(outputs: &PolicyOutputs) -> Vec<KpiTile> {
    vec![
        KpiTile::units("EOQ (Q*)", outputs.eoq),
        KpiTile::units("Reorder point r", outputs.reorder_point),
        KpiTile::money("Annual cost", outputs.annual_cost),
        KpiTile::signed("Budget Δ", outputs.budget_delta),
        KpiTile::units("Total Stockout (units/yr)", outputs.annual_stockout_units),
    ]
}

/// The two smaller cost tiles under the headline row.
pub fn cost_tiles(outputs: &PolicyOutputs) -> Vec<KpiTile> {
    vec![
        KpiTile::money("Holding Cost", outputs.holding_cost),
        KpiTile::money("Ordering Cost", outputs.ordering_cost),
    ]
}

/// Rounds to a whole number and inserts `,` every three digits.
pub fn group_thousands(value: f64) -> String {
    let rounded = format!("{:.0}", value);
    let (sign, digits) = match rounded.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rounded.as_str()),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}{grouped}")
}
