// src/model/outputs.rs

use serde::Serialize;

use crate::policy::curve::TotalCostCurve;

/// Budget headroom expressed as months of spend at the current annual cost.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Runway {
    /// Unspent budget, never negative.
    pub remaining: f64,
    pub monthly_burn: f64,
    pub runway_months: f64,
}

/// Every metric derived from one `PolicyInputs` snapshot.
///
/// Built in a single pass and never patched afterwards; a new snapshot means
/// a new `PolicyOutputs`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolicyOutputs {
    // Static side: depends only on demand, cost and lead-time inputs
    pub eoq: f64,
    pub z_score: f64,
    pub lead_time_demand_std_dev: f64,
    pub safety_stock: f64,
    pub reorder_point: f64,

    // Quantity side: depends on the variation / override choice too
    pub quantity_policy: &'static str,
    pub order_quantity: f64,
    pub ordering_cost: f64,
    pub holding_cost: f64,
    pub annual_cost: f64,
    pub budget_delta: f64,
    pub efficiency_score: f64,
    pub inventory_turns: f64,
    pub cycles_per_year: f64,
    pub cycle_length_days: f64,

    // Stockout exposure
    pub expected_shortage_per_cycle: f64,
    pub annual_stockout_units: f64,

    pub runway: Runway,
    pub total_cost_curve: TotalCostCurve,
}

impl PolicyOutputs {
    pub fn is_over_budget(&self) -> bool {
        self.budget_delta < 0.0
    }
}
