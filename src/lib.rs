//! Inventory policy dashboard engine.
//!
//! Turns demand, cost and lead-time parameters into EOQ, reorder point,
//! stockout exposure and budget KPIs. [`policy::calculate`] is the whole
//! engine: a pure function from [`PolicyInputs`] to [`PolicyOutputs`].

pub mod dashboard;
pub mod error;
pub mod io;
pub mod logging;
pub mod model;
pub mod policy;

pub use error::{InviError, Result};
pub use model::inputs::PolicyInputs;
pub use model::outputs::PolicyOutputs;
pub use policy::calculate;
