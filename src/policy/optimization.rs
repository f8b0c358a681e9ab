// src/policy/optimization.rs

//! Closed-form inventory-control formulas.
//!
//! Everything here is a plain function of its arguments. Divisions are
//! guarded so any in-domain input produces a finite result.

use statrs::distribution::{Continuous, ContinuousCDF, Normal};

/// Floor for Q when counting cycles per year.
pub const CYCLE_QUANTITY_EPSILON: f64 = 1e-9;
/// Floor for EOQ when measuring relative deviation from it.
pub const EFFICIENCY_EOQ_EPSILON: f64 = 1e-6;
/// Floor for the monthly burn in the runway estimate.
pub const MONTHLY_BURN_EPSILON: f64 = 1e-6;

fn standard_normal() -> Normal {
    Normal::standard()
}

/// Economic Order Quantity.
///
/// # Formula
/// EOQ = sqrt(2 · D · K / h), or 0 when h = 0.
pub fn economic_order_quantity(annual_demand: f64, order_cost: f64, holding_cost: f64) -> f64 {
    if holding_cost == 0.0 {
        return 0.0;
    }
    (2.0 * annual_demand * order_cost / holding_cost).sqrt()
}

/// Z-score for a service level given in percent.
///
/// Inverse standard normal CDF of `percent / 100`. Callers keep the percent
/// inside 50.0..=99.9; 0 and 100 map to infinities.
pub fn z_score(service_level_percent: f64) -> f64 {
    standard_normal().inverse_cdf(service_level_percent / 100.0)
}

/// Standard deviation of demand over the lead time, assuming i.i.d. daily demand.
///
/// σ_L = σ_d · sqrt(L)
pub fn lead_time_std_dev(std_dev_daily_demand: f64, lead_time_days: u32) -> f64 {
    std_dev_daily_demand * (lead_time_days as f64).sqrt()
}

/// Safety stock, the buffer term of the reorder point: z · σ_L.
pub fn safety_stock(z: f64, sigma_l: f64) -> f64 {
    z * sigma_l
}

/// Reorder point: expected lead-time demand plus safety stock.
///
/// r = d̄ · L + z · σ_L
pub fn reorder_point(avg_daily_demand: f64, lead_time_days: u32, z: f64, sigma_l: f64) -> f64 {
    avg_daily_demand * lead_time_days as f64 + safety_stock(z, sigma_l)
}

/// Annual ordering cost (D / Q) · K, or 0 when Q is not positive.
pub fn ordering_cost(quantity: f64, annual_demand: f64, order_cost: f64) -> f64 {
    if quantity > 0.0 {
        (annual_demand / quantity) * order_cost
    } else {
        0.0
    }
}

/// Annual holding cost on the average cycle stock: (Q / 2) · h.
pub fn holding_cost(quantity: f64, holding_cost_per_unit: f64) -> f64 {
    (quantity / 2.0) * holding_cost_per_unit
}

/// Ordering plus holding cost at a given order quantity.
pub fn total_cost(
    quantity: f64,
    annual_demand: f64,
    order_cost: f64,
    holding_cost_per_unit: f64,
) -> f64 {
    ordering_cost(quantity, annual_demand, order_cost) + holding_cost(quantity, holding_cost_per_unit)
}

/// Standard normal loss function L(z) = φ(z) − z · (1 − Φ(z)).
///
/// Expected shortfall, in standard deviations, beyond z. Non-negative for
/// every real z.
pub fn unit_normal_loss(z: f64) -> f64 {
    let normal = standard_normal();
    let loss = normal.pdf(z) - z * (1.0 - normal.cdf(z));
    // Cancellation can leave a tiny negative residue far in the right tail.
    loss.max(0.0)
}

/// Expected units short per replenishment cycle: σ_L · L(z).
pub fn expected_shortage_per_cycle(sigma_l: f64, z: f64) -> f64 {
    sigma_l * unit_normal_loss(z)
}

/// Number of replenishment cycles per year, never below one.
pub fn cycles_per_year(annual_demand: f64, quantity: f64) -> f64 {
    (annual_demand / quantity.max(CYCLE_QUANTITY_EPSILON)).max(1.0)
}

/// 100 when Q hits EOQ, falling linearly with relative deviation, floored at 0.
pub fn efficiency_score(quantity: f64, eoq: f64) -> f64 {
    let deviation = (quantity - eoq).abs() / eoq.max(EFFICIENCY_EOQ_EPSILON);
    (100.0 - deviation * 100.0).max(0.0)
}

/// Inventory turns D / Q, or 0 when Q is not positive.
pub fn inventory_turns(annual_demand: f64, quantity: f64) -> f64 {
    if quantity > 0.0 {
        annual_demand / quantity
    } else {
        0.0
    }
}
