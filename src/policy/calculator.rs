// src/policy/calculator.rs

use tracing::{debug, warn};

use crate::model::inputs::PolicyInputs;
use crate::model::outputs::{PolicyOutputs, Runway};
use crate::policy::curve::TotalCostCurve;
use crate::policy::implementations::policy_for;
use crate::policy::optimization::{
    cycles_per_year, economic_order_quantity, efficiency_score, expected_shortage_per_cycle,
    holding_cost, inventory_turns, lead_time_std_dev, ordering_cost, reorder_point, safety_stock,
    z_score, MONTHLY_BURN_EPSILON,
};
use crate::policy::traits::{QuantityContext, QuantityPolicy};

/// Runs one full pass over a snapshot of inputs.
///
/// The quantity rule is taken from the inputs (manual override or EOQ with
/// variation). Pure apart from logging: identical inputs give bit-identical
/// outputs.
pub fn calculate(inputs: &PolicyInputs) -> PolicyOutputs {
    let policy = policy_for(inputs);
    calculate_with(inputs, policy.as_ref())
}

/// Same as [`calculate`] but with an explicit quantity rule.
///
/// Inputs are assumed in-domain (see `PolicyInputs::validate`); nothing here
/// re-checks them.
pub fn calculate_with(inputs: &PolicyInputs, policy: &dyn QuantityPolicy) -> PolicyOutputs {
    let d = inputs.annual_demand;
    let k = inputs.order_cost;
    let h = inputs.holding_cost_per_unit;

    // =================================================================
    // PHASE 1: Static metrics (demand, cost and lead time only)
    // =================================================================
    let eoq = economic_order_quantity(d, k, h);
    let z = z_score(inputs.service_level_percent);
    let sigma_l = lead_time_std_dev(inputs.std_dev_daily_demand, inputs.lead_time_days);
    let r = reorder_point(inputs.avg_daily_demand, inputs.lead_time_days, z, sigma_l);

    // =================================================================
    // PHASE 2: Order quantity
    // =================================================================
    let q = policy.order_quantity(&QuantityContext { eoq });

    // =================================================================
    // PHASE 3: Quantity-dependent cost metrics
    // =================================================================
    let ordering = ordering_cost(q, d, k);
    let holding = holding_cost(q, h);
    let annual_cost = ordering + holding;
    let budget_delta = inputs.annual_budget - annual_cost;

    let cycles = cycles_per_year(d, q);
    let esc = expected_shortage_per_cycle(sigma_l, z);

    let outputs = PolicyOutputs {
        eoq,
        z_score: z,
        lead_time_demand_std_dev: sigma_l,
        safety_stock: safety_stock(z, sigma_l),
        reorder_point: r,

        quantity_policy: policy.name(),
        order_quantity: q,
        ordering_cost: ordering,
        holding_cost: holding,
        annual_cost,
        budget_delta,
        efficiency_score: efficiency_score(q, eoq),
        inventory_turns: inventory_turns(d, q),
        cycles_per_year: cycles,
        cycle_length_days: cycle_length_days(q, d, inputs.days_per_year),

        expected_shortage_per_cycle: esc,
        annual_stockout_units: cycles * esc,

        runway: runway(inputs.annual_budget, annual_cost),
        total_cost_curve: TotalCostCurve::around_eoq(eoq, d, k, h),
    };

    debug!(
        eoq = outputs.eoq,
        order_quantity = outputs.order_quantity,
        reorder_point = outputs.reorder_point,
        annual_cost = outputs.annual_cost,
        policy = outputs.quantity_policy,
        "policy recomputed"
    );
    if outputs.is_over_budget() {
        warn!(
            annual_cost = outputs.annual_cost,
            budget = inputs.annual_budget,
            "inventory cost exceeds annual budget"
        );
    }

    outputs
}

/// Remaining budget and how many months it lasts at the current spend.
pub fn runway(annual_budget: f64, annual_cost: f64) -> Runway {
    let remaining = (annual_budget - annual_cost).max(0.0);
    let monthly_burn = (annual_cost / 12.0).max(MONTHLY_BURN_EPSILON);

    Runway {
        remaining,
        monthly_burn,
        runway_months: remaining / monthly_burn,
    }
}

/// Length of one order cycle in days: Q / D years.
fn cycle_length_days(quantity: f64, annual_demand: f64, days_per_year: u32) -> f64 {
    if annual_demand > 0.0 {
        quantity / annual_demand * days_per_year as f64
    } else {
        0.0
    }
}
