// src/error.rs

use thiserror::Error;

/// Errors raised by the input, scenario and reporting surfaces.
///
/// The calculator itself never fails; these only come from validating or
/// moving data across the crate boundary.
#[derive(Error, Debug)]
pub enum InviError {
    #[error("invalid input `{field}` = {value}: expected {expected}")]
    InvalidInput {
        field: &'static str,
        value: f64,
        expected: &'static str,
    },

    #[error("invalid {series} point {index} = {value}: expected {expected}")]
    InvalidSeries {
        series: &'static str,
        index: usize,
        value: u32,
        expected: &'static str,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, InviError>;
