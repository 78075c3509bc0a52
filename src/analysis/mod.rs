//----------------------------------------
// analysis mod
//----------------------------------------
pub use crate::cba::nmb::nmb_analysis;
pub use crate::cba::types::{Breakeven, CbaResult, DeltaNmbPoint, NmbCurvePoint, WtpSweep};
pub use crate::cea::frontier::build_frontier;
pub use crate::cea::table::{ce_plane, ce_table};
pub use crate::cea::types::{
    CePlanePoint, CeTable, CeTableRow, DominanceKind, ExcludedStrategy, FrontierEntry,
};
pub use crate::difference::estimate::difference_stat;
pub use crate::difference::types::{DifferenceStat, PairingMode};
pub use crate::strategy::types::Strategy;
pub use crate::summary::summarize::{mean, sample_variance, summarize, t_interval};
pub use crate::summary::types::{Interval, SummaryStat};
