// src/model/inputs.rs

use serde::{Deserialize, Serialize};

use crate::error::{InviError, Result};

pub const MIN_SERVICE_LEVEL_PERCENT: f64 = 50.0;
pub const MAX_SERVICE_LEVEL_PERCENT: f64 = 99.9;
pub const MAX_VARIATION_PERCENT: f64 = 80.0;
pub const MAX_LEAD_TIME_DAYS: u32 = 90;
pub const MAX_DAYS_PER_YEAR: u32 = 400;

/// Everything the calculator needs for one pass.
///
/// A plain snapshot: the calculator reads it and never mutates it. Missing
/// fields in a scenario file fall back to the dashboard defaults; unknown
/// fields are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PolicyInputs {
    /// D, units per year.
    pub annual_demand: f64,
    /// K, cost per order placed.
    pub order_cost: f64,
    /// h, cost of holding one unit for a year.
    pub holding_cost_per_unit: f64,
    pub days_per_year: u32,

    /// L, replenishment lead time in days.
    pub lead_time_days: u32,
    /// d̄
    pub avg_daily_demand: f64,
    /// σ_d
    pub std_dev_daily_demand: f64,
    /// Target probability of no stockout during lead time, in percent.
    pub service_level_percent: f64,

    pub manual_override_enabled: bool,
    /// Only read when `manual_override_enabled` is set.
    pub manual_quantity: f64,

    pub annual_budget: f64,

    /// Deviation of Q from EOQ when the override is off.
    pub quantity_variation_percent: f64,
}

impl Default for PolicyInputs {
    fn default() -> Self {
        Self {
            annual_demand: 2000.0,
            order_cost: 100.0,
            holding_cost_per_unit: 2.0,
            days_per_year: 365,
            lead_time_days: 5,
            avg_daily_demand: 26.5,
            std_dev_daily_demand: 5.5,
            service_level_percent: 95.0,
            manual_override_enabled: false,
            manual_quantity: 500.0,
            annual_budget: 20000.0,
            quantity_variation_percent: 35.0,
        }
    }
}

impl PolicyInputs {
    /// Range enforcement for the input-collection surface.
    ///
    /// The calculator assumes in-domain values and never calls this; callers
    /// that accept user data (CLI flags, scenario files) must.
    pub fn validate(&self) -> Result<()> {
        non_negative("annual_demand", self.annual_demand)?;
        non_negative("order_cost", self.order_cost)?;
        non_negative("holding_cost_per_unit", self.holding_cost_per_unit)?;
        non_negative("avg_daily_demand", self.avg_daily_demand)?;
        non_negative("std_dev_daily_demand", self.std_dev_daily_demand)?;
        non_negative("annual_budget", self.annual_budget)?;

        check(
            "days_per_year",
            self.days_per_year as f64,
            (1..=MAX_DAYS_PER_YEAR).contains(&self.days_per_year),
            "an integer in 1..=400",
        )?;
        check(
            "lead_time_days",
            self.lead_time_days as f64,
            (1..=MAX_LEAD_TIME_DAYS).contains(&self.lead_time_days),
            "an integer in 1..=90",
        )?;
        check(
            "service_level_percent",
            self.service_level_percent,
            (MIN_SERVICE_LEVEL_PERCENT..=MAX_SERVICE_LEVEL_PERCENT)
                .contains(&self.service_level_percent),
            "a percentage in 50.0..=99.9",
        )?;
        check(
            "quantity_variation_percent",
            self.quantity_variation_percent,
            (0.0..=MAX_VARIATION_PERCENT).contains(&self.quantity_variation_percent),
            "a percentage in 0..=80",
        )?;

        // An unused manual quantity is still a widget value; keep it sane.
        check(
            "manual_quantity",
            self.manual_quantity,
            self.manual_quantity.is_finite() && self.manual_quantity >= 1.0,
            "a finite quantity >= 1",
        )?;

        Ok(())
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<()> {
    check(
        field,
        value,
        value.is_finite() && value >= 0.0,
        "a finite, non-negative number",
    )
}

fn check(field: &'static str, value: f64, ok: bool, expected: &'static str) -> Result<()> {
    if ok {
        Ok(())
    } else {
        Err(InviError::InvalidInput {
            field,
            value,
            expected,
        })
    }
}
