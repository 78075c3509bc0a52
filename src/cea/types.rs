//----------------------------------------
// cea mod types
//----------------------------------------
use crate::strategy::types::Strategy;
use crate::summary::types::SummaryStat;

/// Why a strategy was excluded from the frontier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DominanceKind {
    /// Some other strategy is at least as effective and no more costly,
    /// with at least one of the two strict
    Strong,
    /// The strategy lies above the piecewise-linear lower envelope of cost
    /// vs. effect formed by its frontier neighbors
    Extended,
}

/// One non-dominated strategy on the cost-effectiveness frontier. The ICER
/// is relative to the previous frontier entry in ascending-effect order;
/// the least-effective entry has none.
#[derive(Debug)]
pub struct FrontierEntry<'a> {
    pub strategy: &'a Strategy,
    pub icer: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExcludedStrategy {
    pub name: String,
    pub reason: DominanceKind,
}

/// Frontier entries in ascending-effect order plus the strategies that
/// dominance removal excluded
#[derive(Debug)]
pub struct CeTable<'a> {
    pub frontier: Vec<FrontierEntry<'a>>,
    pub excluded: Vec<ExcludedStrategy>,
}

/// One row of the cost-effectiveness report: every strategy appears, in
/// ascending-effect order, with its interval estimates; dominated
/// strategies carry their exclusion reason instead of an ICER
#[derive(Debug)]
pub struct CeTableRow {
    pub name: String,
    pub cost: SummaryStat,
    pub effect: SummaryStat,
    pub icer: Option<f64>,
    pub dominated: Option<DominanceKind>,
}

/// Per-strategy scatter coordinates on the cost-effectiveness plane, with
/// the raw per-patient cloud when requested
#[derive(Debug)]
pub struct CePlanePoint {
    pub name: String,
    pub effect_mean: f64,
    pub cost_mean: f64,
    pub cloud: Vec<(f64, f64)>,
}
