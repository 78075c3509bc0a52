//----------------------------------------
// difference errors
//----------------------------------------
use crate::error::EconevalErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DifferenceErr {
    #[error("paired samples should have equal lengths; got {x_len} and {y_len}")]
    ShapeMismatch { x_len: usize, y_len: usize },
}

impl Into<EconevalErr> for DifferenceErr {
    fn into(self) -> EconevalErr {
        EconevalErr::Difference(self)
    }
}
