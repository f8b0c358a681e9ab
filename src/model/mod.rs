pub mod inputs;
pub mod outputs;
pub mod series;
