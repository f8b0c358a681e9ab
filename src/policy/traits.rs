// src/policy/traits.rs

use std::fmt::Debug;

/// Everything a quantity rule may look at when choosing Q.
///
/// Only static, already-derived values live here: the choice of Q comes
/// after EOQ and never feeds back into it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct QuantityContext {
    pub eoq: f64,
}

/// Decides the order quantity Q for one calculation pass.
///
/// Implementations are stateless so that repeated passes over the same
/// inputs give identical answers.
pub trait QuantityPolicy: Debug + Send + Sync {
    /// Returns the order quantity to cost out.
    fn order_quantity(&self, context: &QuantityContext) -> f64;

    /// Short label for dashboards and logs.
    fn name(&self) -> &'static str;
}
