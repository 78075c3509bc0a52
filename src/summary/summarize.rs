use crate::error::EconevalErr;
use crate::summary::error::SummaryErr;
use crate::summary::types::{Interval, SummaryStat};
use statrs::distribution::{ContinuousCDF, StudentsT};

/// Arithmetic mean of an outcome sample
pub fn mean(sample: &[f64]) -> Result<f64, EconevalErr> {
    if sample.is_empty() {
        return Err(SummaryErr::EmptySample.into());
    }
    Ok(sample.iter().sum::<f64>() / sample.len() as f64)
}

/// Unbiased sample variance (n - 1 denominator)
pub fn sample_variance(sample: &[f64]) -> Result<f64, EconevalErr> {
    if sample.len() < 2 {
        return Err(SummaryErr::InsufficientData(sample.len()).into());
    }
    let m = mean(sample)?;
    let ss = sample.iter().map(|&x| (x - m) * (x - m)).sum::<f64>();
    Ok(ss / (sample.len() - 1) as f64)
}

/// Two-sided critical value of the Student-t distribution with `df` degrees
/// of freedom at significance `alpha`. Assumes df >= 1 and alpha in (0, 1);
/// callers validate both before getting here.
pub(crate) fn t_critical(df: f64, alpha: f64) -> f64 {
    let t = StudentsT::new(0.0, 1.0, df).expect("degrees of freedom should be positive");
    t.inverse_cdf(1.0 - alpha / 2.0)
}

pub(crate) fn check_alpha(alpha: f64) -> Result<(), EconevalErr> {
    if alpha <= 0.0 || alpha >= 1.0 {
        return Err(SummaryErr::BadAlpha(alpha).into());
    }
    Ok(())
}

/// Two-sided t confidence interval at confidence level `1 - alpha`,
/// using n - 1 degrees of freedom
pub fn t_interval(sample: &[f64], alpha: f64) -> Result<Interval, EconevalErr> {
    check_alpha(alpha)?;
    if sample.len() < 2 {
        return Err(SummaryErr::InsufficientData(sample.len()).into());
    }
    let n = sample.len() as f64;
    let m = mean(sample)?;
    let se = (sample_variance(sample)? / n).sqrt();
    let half_width = t_critical(n - 1.0, alpha) * se;
    Ok(Interval {
        lo: m - half_width,
        hi: m + half_width,
    })
}

/// Computes the full summary (mean, standard error, t interval) of one
/// outcome sample
pub fn summarize(sample: &[f64], alpha: f64) -> Result<SummaryStat, EconevalErr> {
    let interval = t_interval(sample, alpha)?;
    let n = sample.len();
    Ok(SummaryStat {
        n,
        mean: mean(sample)?,
        stderr: (sample_variance(sample)? / n as f64).sqrt(),
        interval,
    })
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn mean_basic() {
        let m = mean(&[1., 2., 3., 4., 5.]).expect("failed to compute mean");
        assert_eq!(m, 3.0);
    }

    #[test]
    fn mean_empty_sample() {
        if let Err(e) = mean(&[]) {
            assert_eq!(
                String::from("while summarizing outcome sample: sample was empty"),
                format!("{}", e)
            );
        } else {
            panic!()
        }
    }

    #[test]
    fn variance_basic() {
        let v = sample_variance(&[1., 2., 3., 4., 5.]).expect("failed to compute variance");
        assert!((v - 2.5).abs() < 1e-12);
    }

    #[test]
    fn t_interval_known_value() {
        // t_{0.975, 4} = 2.776445; se = sqrt(2.5 / 5) = 0.7071068
        let ci = t_interval(&[1., 2., 3., 4., 5.], 0.05).expect("failed to compute interval");
        assert!((ci.lo - 1.036757).abs() < 1e-4);
        assert!((ci.hi - 4.963243).abs() < 1e-4);
    }

    #[test]
    fn interval_contains_mean() {
        let sample = vec![2.3, 8.1, 4.4, 0.9, 5.5, 7.2];
        let m = mean(&sample).unwrap();
        let ci = t_interval(&sample, 0.05).unwrap();
        assert!(ci.lo <= m && m <= ci.hi);
    }

    #[test]
    fn interval_narrows_as_alpha_grows() {
        let sample = vec![2.3, 8.1, 4.4, 0.9, 5.5, 7.2];
        let wide = t_interval(&sample, 0.01).unwrap();
        let mid = t_interval(&sample, 0.05).unwrap();
        let narrow = t_interval(&sample, 0.2).unwrap();
        assert!(wide.width() > mid.width());
        assert!(mid.width() > narrow.width());
    }

    #[test]
    fn interval_single_observation() {
        if let Err(e) = t_interval(&[3.0], 0.05) {
            assert_eq!(
                String::from(
                    "while summarizing outcome sample: need at least 2 \
                     observations to estimate variance; got 1"
                ),
                format!("{}", e)
            );
        } else {
            panic!()
        }
    }

    #[test]
    fn bad_alpha() {
        assert!(t_interval(&[1., 2., 3.], 0.0).is_err());
        assert!(t_interval(&[1., 2., 3.], 1.0).is_err());
        assert!(t_interval(&[1., 2., 3.], -0.05).is_err());
    }

    #[test]
    fn summarize_basic() {
        let stat = summarize(&[1., 2., 3., 4., 5.], 0.05).expect("failed to summarize");
        assert_eq!(stat.n, 5);
        assert_eq!(stat.mean, 3.0);
        assert!((stat.stderr - 0.7071068).abs() < 1e-6);
        assert!(stat.interval.contains(stat.mean));
    }
}
