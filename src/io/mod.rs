pub mod reporting;
pub mod scenario;
pub mod table;
