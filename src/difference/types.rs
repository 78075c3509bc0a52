//----------------------------------------
// difference mod types
//----------------------------------------
use crate::summary::types::Interval;

/// Whether two outcome samples come from the same simulated patients
/// (one observation pair per patient) or from separately simulated cohorts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairingMode {
    Independent,
    Paired,
}

/// Mean and confidence interval of a difference between two outcome
/// samples, always oriented as "x minus y_ref"
#[derive(Debug, Clone, Copy)]
pub struct DifferenceStat {
    pub mode: PairingMode,
    pub mean: f64,
    pub stderr: f64,
    pub interval: Interval,
}
