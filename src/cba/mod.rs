//----------------------------------------
// cba mod
//----------------------------------------
pub mod error;
pub mod nmb;
pub mod types;
