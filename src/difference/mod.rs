//----------------------------------------
// difference mod
//----------------------------------------
pub mod error;
pub mod estimate;
pub mod types;
