//----------------------------------------
// cea errors
//----------------------------------------
use crate::error::EconevalErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CeaErr {
    #[error("need at least 2 strategies to compare; got {0}")]
    NoStrategies(usize),
    #[error("strategies '{0}' and '{1}' have equal mean effect; ICER is undefined")]
    DegenerateEffect(String, String),
}

impl Into<EconevalErr> for CeaErr {
    fn into(self) -> EconevalErr {
        EconevalErr::Cea(self)
    }
}
