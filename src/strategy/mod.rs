//----------------------------------------
// strategy mod
//----------------------------------------
pub mod error;
pub mod types;
