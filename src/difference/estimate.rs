use crate::difference::error::DifferenceErr;
use crate::difference::types::{DifferenceStat, PairingMode};
use crate::error::EconevalErr;
use crate::summary::error::SummaryErr;
use crate::summary::summarize::{check_alpha, mean, sample_variance, summarize, t_critical};
use crate::summary::types::Interval;

/// Estimates the difference between two outcome samples, oriented as
/// "x minus y_ref". Callers pick the operand order to get the sign they
/// want to report (e.g. cost increase = new-strategy cost minus baseline
/// cost).
///
/// Independent mode allows unequal lengths and uses the Welch variance with
/// Welch-Satterthwaite degrees of freedom. Paired mode requires equal
/// lengths and summarizes the element-wise differences directly.
pub fn difference_stat(
    x: &[f64],
    y_ref: &[f64],
    mode: PairingMode,
    alpha: f64,
) -> Result<DifferenceStat, EconevalErr> {
    check_alpha(alpha)?;
    if x.len() < 2 {
        return Err(SummaryErr::InsufficientData(x.len()).into());
    }
    if y_ref.len() < 2 {
        return Err(SummaryErr::InsufficientData(y_ref.len()).into());
    }

    match mode {
        PairingMode::Paired => {
            if x.len() != y_ref.len() {
                return Err(DifferenceErr::ShapeMismatch {
                    x_len: x.len(),
                    y_len: y_ref.len(),
                }
                .into());
            }
            let diffs: Vec<f64> = x.iter().zip(y_ref.iter()).map(|(&a, &b)| a - b).collect();
            let stat = summarize(&diffs, alpha)?;
            Ok(DifferenceStat {
                mode,
                mean: stat.mean,
                stderr: stat.stderr,
                interval: stat.interval,
            })
        }
        PairingMode::Independent => {
            let n_x = x.len() as f64;
            let n_y = y_ref.len() as f64;
            let d = mean(x)? - mean(y_ref)?;
            let vx_over_n = sample_variance(x)? / n_x;
            let vy_over_n = sample_variance(y_ref)? / n_y;
            let se = (vx_over_n + vy_over_n).sqrt();

            // Both samples constant: the difference is exact
            if se == 0.0 {
                return Ok(DifferenceStat {
                    mode,
                    mean: d,
                    stderr: 0.0,
                    interval: Interval { lo: d, hi: d },
                });
            }

            // Welch-Satterthwaite approximate degrees of freedom
            let df = (vx_over_n + vy_over_n) * (vx_over_n + vy_over_n)
                / (vx_over_n * vx_over_n / (n_x - 1.0) + vy_over_n * vy_over_n / (n_y - 1.0));
            let half_width = t_critical(df, alpha) * se;
            Ok(DifferenceStat {
                mode,
                mean: d,
                stderr: se,
                interval: Interval {
                    lo: d - half_width,
                    hi: d + half_width,
                },
            })
        }
    }
}
