//----------------------------------------
// strategy mod types
//----------------------------------------
use crate::error::EconevalErr;
use crate::strategy::error::StrategyErr;
use crate::summary::summarize::{mean, summarize};
use crate::summary::types::SummaryStat;

/// One strategy's per-patient cost and effect (utility) observations, with
/// cached means. Both samples come from the same simulated cohort, one
/// observation pair per patient, so they must have equal lengths.
/// Immutable after construction.
#[derive(Debug, Clone)]
pub struct Strategy {
    name: String,
    cost_obs: Vec<f64>,
    effect_obs: Vec<f64>,
    cost_mean: f64,
    effect_mean: f64,
}

impl Strategy {
    pub fn new(
        name: impl Into<String>,
        cost_obs: Vec<f64>,
        effect_obs: Vec<f64>,
    ) -> Result<Self, EconevalErr> {
        if cost_obs.len() != effect_obs.len() {
            return Err(StrategyErr::ShapeMismatch {
                cost_len: cost_obs.len(),
                effect_len: effect_obs.len(),
            }
            .into());
        }
        let cost_mean = mean(&cost_obs)?;
        let effect_mean = mean(&effect_obs)?;
        Ok(Strategy {
            name: name.into(),
            cost_obs,
            effect_obs,
            cost_mean,
            effect_mean,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cost_mean(&self) -> f64 {
        self.cost_mean
    }

    pub fn effect_mean(&self) -> f64 {
        self.effect_mean
    }

    pub fn cost_obs(&self) -> &[f64] {
        &self.cost_obs
    }

    pub fn effect_obs(&self) -> &[f64] {
        &self.effect_obs
    }

    pub fn cost_summary(&self, alpha: f64) -> Result<SummaryStat, EconevalErr> {
        summarize(&self.cost_obs, alpha)
    }

    pub fn effect_summary(&self, alpha: f64) -> Result<SummaryStat, EconevalErr> {
        summarize(&self.effect_obs, alpha)
    }
}
