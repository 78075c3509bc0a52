//----------------------------------------
// summary errors
//----------------------------------------
use crate::error::EconevalErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SummaryErr {
    #[error("sample was empty")]
    EmptySample,
    #[error("need at least 2 observations to estimate variance; got {0}")]
    InsufficientData(usize),
    #[error("alpha should be in (0, 1); got {0}")]
    BadAlpha(f64),
}

impl Into<EconevalErr> for SummaryErr {
    fn into(self) -> EconevalErr {
        EconevalErr::Summary(self)
    }
}
