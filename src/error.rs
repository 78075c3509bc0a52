//----------------------------------------
// Crate error type
//----------------------------------------
use thiserror::Error;

pub use crate::cba::error::CbaErr;
pub use crate::cea::error::CeaErr;
pub use crate::difference::error::DifferenceErr;
pub use crate::strategy::error::StrategyErr;
pub use crate::summary::error::SummaryErr;

#[derive(Error, Debug)]
pub enum EconevalErr {
    #[error("while summarizing outcome sample: {0}")]
    Summary(SummaryErr),
    #[error("while estimating difference: {0}")]
    Difference(DifferenceErr),
    #[error("while constructing strategy: {0}")]
    Strategy(StrategyErr),
    #[error("while building cost-effectiveness frontier: {0}")]
    Cea(CeaErr),
    #[error("while computing net monetary benefit: {0}")]
    Cba(CbaErr),
}
