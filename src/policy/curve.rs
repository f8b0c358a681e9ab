// src/policy/curve.rs

use serde::{Serialize, Serializer};

use crate::policy::optimization::total_cost;

pub const CURVE_SAMPLES: usize = 60;

/// Sampled range when EOQ is zero and there is nothing to centre on.
const FALLBACK_RANGE: (f64, f64) = (1.0, 1000.0);

/// One point on the what-if curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostPoint {
    pub quantity: f64,
    pub total_cost: f64,
}

/// Total annual cost as a function of order quantity, sampled around EOQ.
///
/// Only the parameters are stored; points are produced on demand and the
/// curve can be walked any number of times.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TotalCostCurve {
    annual_demand: f64,
    order_cost: f64,
    holding_cost_per_unit: f64,
    start: f64,
    end: f64,
}

impl TotalCostCurve {
    /// Samples `[max(1, 0.3·EOQ), 1.7·EOQ]`, or `[1, 1000]` when EOQ is zero.
    pub fn around_eoq(
        eoq: f64,
        annual_demand: f64,
        order_cost: f64,
        holding_cost_per_unit: f64,
    ) -> Self {
        let (start, end) = if eoq > 0.0 {
            ((eoq * 0.3).max(1.0), eoq * 1.7)
        } else {
            FALLBACK_RANGE
        };

        Self {
            annual_demand,
            order_cost,
            holding_cost_per_unit,
            start,
            end,
        }
    }

    pub fn range(&self) -> (f64, f64) {
        (self.start, self.end)
    }

    pub fn iter(&self) -> CurveIter {
        CurveIter {
            curve: *self,
            index: 0,
        }
    }

    /// Cheapest sampled point. Useful for annotating the plot.
    pub fn minimum(&self) -> Option<CostPoint> {
        self.iter()
            .min_by(|a, b| a.total_cost.total_cmp(&b.total_cost))
    }

    fn point(&self, index: usize) -> CostPoint {
        // Same spacing as an inclusive linspace: first and last samples hit
        // the range ends exactly.
        let step = (self.end - self.start) / (CURVE_SAMPLES - 1) as f64;
        let quantity = if index == CURVE_SAMPLES - 1 {
            self.end
        } else {
            self.start + step * index as f64
        };

        CostPoint {
            quantity,
            total_cost: total_cost(
                quantity,
                self.annual_demand,
                self.order_cost,
                self.holding_cost_per_unit,
            ),
        }
    }
}

impl<'a> IntoIterator for &'a TotalCostCurve {
    type Item = CostPoint;
    type IntoIter = CurveIter;

    fn into_iter(self) -> CurveIter {
        self.iter()
    }
}

impl Serialize for TotalCostCurve {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

#[derive(Debug, Clone)]
pub struct CurveIter {
    curve: TotalCostCurve,
    index: usize,
}

impl Iterator for CurveIter {
    type Item = CostPoint;

    fn next(&mut self) -> Option<CostPoint> {
        if self.index >= CURVE_SAMPLES {
            return None;
        }
        let point = self.curve.point(self.index);
        self.index += 1;
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = CURVE_SAMPLES - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CurveIter {}
