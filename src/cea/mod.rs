//----------------------------------------
// cea mod
//----------------------------------------
pub mod error;
pub mod frontier;
pub mod table;
pub mod types;
