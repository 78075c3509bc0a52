//----------------------------------------
// strategy errors
//----------------------------------------
use crate::error::EconevalErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StrategyErr {
    #[error("cost and effect samples should have equal lengths; got {cost_len} and {effect_len}")]
    ShapeMismatch { cost_len: usize, effect_len: usize },
}

impl Into<EconevalErr> for StrategyErr {
    fn into(self) -> EconevalErr {
        EconevalErr::Strategy(self)
    }
}
