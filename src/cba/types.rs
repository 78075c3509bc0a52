//----------------------------------------
// cba mod types
//----------------------------------------
use crate::cba::error::CbaErr;
use crate::error::EconevalErr;
use crate::summary::types::Interval;

/// Evenly spaced willingness-to-pay grid, inclusive of both ends
#[derive(Debug, Clone, Copy)]
pub struct WtpSweep {
    min: f64,
    max: f64,
    resolution: usize,
}

impl WtpSweep {
    pub fn new(min: f64, max: f64, resolution: usize) -> Result<Self, EconevalErr> {
        if min > max || resolution < 2 {
            return Err(CbaErr::InvalidRange {
                min,
                max,
                resolution,
            }
            .into());
        }
        Ok(WtpSweep {
            min,
            max,
            resolution,
        })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    pub fn points(&self) -> Vec<f64> {
        let step = (self.max - self.min) / (self.resolution - 1) as f64;
        (0..self.resolution)
            .map(|i| self.min + step * i as f64)
            .collect()
    }
}

/// One strategy's net monetary benefit at one willingness-to-pay value
#[derive(Debug, Clone)]
pub struct NmbCurvePoint {
    pub wtp: f64,
    pub strategy_name: String,
    pub nmb_mean: f64,
    pub nmb_ci: Interval,
}

/// Incremental net monetary benefit of one strategy over the reference at
/// one willingness-to-pay value
#[derive(Debug, Clone)]
pub struct DeltaNmbPoint {
    pub wtp: f64,
    pub strategy_name: String,
    pub delta_mean: f64,
    pub delta_ci: Interval,
}

/// Willingness-to-pay at which a strategy's incremental NMB over the
/// reference crosses zero; `None` when the mean effects are equal or the
/// crossing falls outside the sweep bounds
#[derive(Debug, Clone)]
pub struct Breakeven {
    pub strategy_name: String,
    pub wtp: Option<f64>,
}

#[derive(Debug)]
pub struct CbaResult {
    pub curves: Vec<NmbCurvePoint>,
    pub deltas: Vec<DeltaNmbPoint>,
    pub breakevens: Vec<Breakeven>,
}
