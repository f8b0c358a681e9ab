// src/policy/implementations.rs

use crate::model::inputs::PolicyInputs;
use crate::policy::traits::{QuantityContext, QuantityPolicy};

// =========================================================================
// 1. EOQ With Variation
// =========================================================================

/// Orders EOQ scaled up by a user-chosen percentage.
///
/// Formula: Q = max(1, EOQ · (1 + variation / 100))
///
/// The floor of one unit keeps every Q-dependent ratio finite even when
/// EOQ collapses to zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EoqVariation {
    variation_percent: f64,
}

impl EoqVariation {
    pub fn new(variation_percent: f64) -> Self {
        Self { variation_percent }
    }

    /// Plain EOQ, no deviation.
    pub fn exact() -> Self {
        Self::new(0.0)
    }
}

impl QuantityPolicy for EoqVariation {
    fn order_quantity(&self, context: &QuantityContext) -> f64 {
        (context.eoq * (1.0 + self.variation_percent / 100.0)).max(1.0)
    }

    fn name(&self) -> &'static str {
        "eoq-variation"
    }
}

// =========================================================================
// 2. Manual Quantity
// =========================================================================

/// Ignores EOQ and orders a fixed, user-supplied quantity.
///
/// The input surface guarantees `quantity >= 1`; no clamp is applied here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ManualQuantity {
    quantity: f64,
}

impl ManualQuantity {
    pub fn new(quantity: f64) -> Self {
        Self { quantity }
    }
}

impl QuantityPolicy for ManualQuantity {
    fn order_quantity(&self, _context: &QuantityContext) -> f64 {
        self.quantity
    }

    fn name(&self) -> &'static str {
        "manual"
    }
}

/// Picks the rule the inputs ask for.
pub fn policy_for(inputs: &PolicyInputs) -> Box<dyn QuantityPolicy> {
    if inputs.manual_override_enabled {
        Box::new(ManualQuantity::new(inputs.manual_quantity))
    } else {
        Box::new(EoqVariation::new(inputs.quantity_variation_percent))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(eoq: f64) -> QuantityContext {
        QuantityContext { eoq }
    }

    #[test]
    fn test_variation_scales_eoq() {
        let q = EoqVariation::new(35.0).order_quantity(&context(447.2));
        assert!((q - 603.72).abs() < 1e-9);
    }

    #[test]
    fn test_variation_floors_at_one() {
        assert_eq!(EoqVariation::new(80.0).order_quantity(&context(0.0)), 1.0);
        assert_eq!(EoqVariation::exact().order_quantity(&context(0.4)), 1.0);
    }

    #[test]
    fn test_manual_quantity_ignores_eoq() {
        let policy = ManualQuantity::new(500.0);
        assert_eq!(policy.order_quantity(&context(447.2)), 500.0);
        assert_eq!(policy.order_quantity(&context(0.0)), 500.0);
    }

    #[test]
    fn test_policy_for_follows_override_flag() {
        let mut inputs = PolicyInputs::default();
        assert_eq!(policy_for(&inputs).name(), "eoq-variation");

        inputs.manual_override_enabled = true;
        let policy = policy_for(&inputs);
        assert_eq!(policy.name(), "manual");
        assert_eq!(policy.order_quantity(&context(447.2)), 500.0);
    }
}
