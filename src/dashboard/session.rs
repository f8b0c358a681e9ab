// src/dashboard/session.rs

use tracing::debug;

use crate::dashboard::charts::ChartSet;
use crate::model::inputs::PolicyInputs;
use crate::model::outputs::PolicyOutputs;
use crate::model::series::InventorySeries;
use crate::policy::calculator::calculate;

/// Interactive state for one dashboard user.
///
/// Holds raw inputs only. Every change triggers a full recomputation, so
/// nothing derived can go stale between interactions.
#[derive(Debug, Clone, Default)]
pub struct Session {
    inputs: PolicyInputs,
    series: InventorySeries,
}

impl Session {
    pub fn new(inputs: PolicyInputs, series: InventorySeries) -> Self {
        Self { inputs, series }
    }

    pub fn inputs(&self) -> &PolicyInputs {
        &self.inputs
    }

    pub fn series(&self) -> &InventorySeries {
        &self.series
    }

    /// Outputs for the current inputs.
    pub fn outputs(&self) -> PolicyOutputs {
        calculate(&self.inputs)
    }

    /// Applies an arbitrary edit to the inputs and recomputes.
    pub fn update<F>(&mut self, edit: F) -> PolicyOutputs
    where
        F: FnOnce(&mut PolicyInputs),
    {
        edit(&mut self.inputs);
        debug!(inputs = ?self.inputs, "session inputs changed");
        self.outputs()
    }

    /// The "Q variation around EOQ" slider.
    pub fn set_variation(&mut self, percent: f64) -> PolicyOutputs {
        self.update(|inputs| inputs.quantity_variation_percent = percent)
    }

    /// The "Override EOQ with manual Q" checkbox and its quantity.
    pub fn set_override(&mut self, enabled: bool, quantity: f64) -> PolicyOutputs {
        self.update(|inputs| {
            inputs.manual_override_enabled = enabled;
            inputs.manual_quantity = quantity;
        })
    }

    /// Replaces the manual chart-7 series. Outputs do not depend on it.
    pub fn set_series(&mut self, series: InventorySeries) {
        self.series = series;
    }

    /// Chart data for the current state.
    pub fn charts(&self) -> ChartSet {
        let outputs = self.outputs();
        ChartSet::build(&self.inputs, &outputs, &self.series)
    }
}
