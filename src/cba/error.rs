//----------------------------------------
// cba errors
//----------------------------------------
use crate::error::EconevalErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CbaErr {
    #[error("need at least 2 strategies to compare; got {0}")]
    NoStrategies(usize),
    #[error(
        "willingness-to-pay sweep should have min <= max and resolution >= 2; \
         got min {min}, max {max}, resolution {resolution}"
    )]
    InvalidRange {
        min: f64,
        max: f64,
        resolution: usize,
    },
    #[error("no strategy named '{0}' to use as reference")]
    UnknownReference(String),
}

impl Into<EconevalErr> for CbaErr {
    fn into(self) -> EconevalErr {
        EconevalErr::Cba(self)
    }
}
