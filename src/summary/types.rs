//----------------------------------------
// summary mod types
//----------------------------------------

/// Closed interval `[lo, hi]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub lo: f64,
    pub hi: f64,
}

impl Interval {
    pub fn width(&self) -> f64 {
        self.hi - self.lo
    }

    pub fn contains(&self, x: f64) -> bool {
        self.lo <= x && x <= self.hi
    }
}

/// Mean and t-based confidence interval for a single outcome sample
#[derive(Debug, Clone, Copy)]
pub struct SummaryStat {
    pub n: usize,
    pub mean: f64,
    pub stderr: f64,
    pub interval: Interval,
}
