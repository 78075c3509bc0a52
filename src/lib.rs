//----------------------------------------
// Root lib
//----------------------------------------
//! The purpose of this library is to provide utility functions for comparing
//! competing health-care strategies simulated as stochastic cohorts. Given
//! per-patient outcome samples (discounted cost, discounted utility, and
//! descriptive outcomes such as survival times), it computes point and
//! interval estimates, paired/unpaired difference statistics, the
//! cost-effectiveness frontier with incremental cost-effectiveness ratios,
//! and net monetary benefit curves over a willingness-to-pay sweep.

/// This module houses the public API for summarizing outcome samples,
/// estimating differences, and running the cost-effectiveness and
/// cost-benefit engines
pub mod analysis;
mod cba;
mod cea;
mod difference;
/// This module contains error types
pub mod error;
mod strategy;
mod summary;
