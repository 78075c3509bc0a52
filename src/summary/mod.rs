//----------------------------------------
// summary mod
//----------------------------------------
pub mod error;
pub mod summarize;
pub mod types;
