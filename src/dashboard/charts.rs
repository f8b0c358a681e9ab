// src/dashboard/charts.rs

use serde::Serialize;

use crate::model::inputs::PolicyInputs;
use crate::model::outputs::PolicyOutputs;
use crate::model::series::{InventoryLevelsChart, InventorySeries};
use crate::policy::curve::TotalCostCurve;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub label: &'static str,
    pub value: f64,
}

/// A titled bar chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub title: &'static str,
    pub bars: Vec<Bar>,
}

impl BarChart {
    fn new(title: &'static str, bars: &[(&'static str, f64)]) -> Self {
        Self {
            title,
            bars: bars
                .iter()
                .map(|&(label, value)| Bar { label, value })
                .collect(),
        }
    }
}

/// Data behind the seven dashboard charts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSet {
    pub budget_vs_cost: BarChart,
    pub cost_components: BarChart,
    pub runway: BarChart,
    pub what_if: TotalCostCurve,
    pub efficiency: BarChart,
    pub posture: BarChart,
    pub inventory_levels: InventoryLevelsChart,
}

impl ChartSet {
    pub fn build(
        inputs: &PolicyInputs,
        outputs: &PolicyOutputs,
        series: &InventorySeries,
    ) -> Self {
        Self {
            budget_vs_cost: BarChart::new(
                "1) Budget vs. Inventory Cost",
                &[
                    ("Budget (After)", inputs.annual_budget),
                    ("Inventory Cost", outputs.annual_cost),
                ],
            ),
            cost_components: BarChart::new(
                "2) Cost components ($/yr)",
                &[
                    ("Holding", outputs.holding_cost),
                    ("Ordering", outputs.ordering_cost),
                ],
            ),
            runway: BarChart::new(
                "3) Remaining Budget & Simple Runway",
                &[
                    ("Remaining ($)", outputs.runway.remaining),
                    ("Runway (months)", outputs.runway.runway_months),
                ],
            ),
            what_if: outputs.total_cost_curve,
            efficiency: BarChart::new(
                "5) Inventory Efficiency",
                &[
                    ("EOQ", outputs.eoq),
                    ("Efficiency score", outputs.efficiency_score),
                    ("Turns (D/Q)", outputs.inventory_turns),
                ],
            ),
            posture: BarChart::new(
                "6) Inventory Posture",
                &[
                    ("Holding", outputs.holding_cost),
                    ("Ordering", outputs.ordering_cost),
                ],
            ),
            inventory_levels: InventoryLevelsChart::new(series, outputs.reorder_point),
        }
    }

    /// The bar charts in dashboard order (the curve and chart 7 are not bars).
    pub fn bar_charts(&self) -> [&BarChart; 5] {
        [
            &self.budget_vs_cost,
            &self.cost_components,
            &self.runway,
            &self.efficiency,
            &self.posture,
        ]
    }
}
