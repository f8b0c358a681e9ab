//! The inventory policy calculator.
//!
//! `optimization` holds the closed-form formulas, `traits` and
//! `implementations` the order-quantity rules, and `calculator` ties them
//! into a single pass from inputs to outputs.

pub mod calculator;
pub mod curve;
pub mod implementations;
pub mod optimization;
pub mod traits;

pub use calculator::{calculate, calculate_with};
