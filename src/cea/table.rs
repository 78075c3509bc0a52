use itertools::izip;
use std::collections::HashMap;

use crate::cea::frontier::build_frontier;
use crate::cea::types::{CePlanePoint, CeTableRow};
use crate::error::EconevalErr;
use crate::strategy::types::Strategy;

/// Builds the cost-effectiveness report rows: every strategy in
/// ascending-effect order with interval estimates of its mean cost and
/// effect at the given alpha. Frontier members past the first carry their
/// ICER; dominated strategies carry the kind of dominance that excluded
/// them instead.
pub fn ce_table(strategies: &[Strategy], alpha: f64) -> Result<Vec<CeTableRow>, EconevalErr> {
    let table = build_frontier(strategies)?;

    let icers: HashMap<&str, Option<f64>> = table
        .frontier
        .iter()
        .map(|e| (e.strategy.name(), e.icer))
        .collect();
    let exclusions: HashMap<&str, _> = table
        .excluded
        .iter()
        .map(|e| (e.name.as_str(), e.reason))
        .collect();

    let mut order: Vec<&Strategy> = strategies.iter().collect();
    order.sort_by(|a, b| {
        a.effect_mean()
            .total_cmp(&b.effect_mean())
            .then(a.cost_mean().total_cmp(&b.cost_mean()))
    });

    order
        .iter()
        .map(|s| {
            Ok(CeTableRow {
                name: s.name().to_string(),
                cost: s.cost_summary(alpha)?,
                effect: s.effect_summary(alpha)?,
                icer: icers.get(s.name()).copied().flatten(),
                dominated: exclusions.get(s.name()).copied(),
            })
        })
        .collect()
}

/// Projects each strategy onto the cost-effectiveness plane: the
/// `(effect_mean, cost_mean)` scatter point plus, when requested, the raw
/// per-patient `(effect_i, cost_i)` cloud for plotting uncertainty
pub fn ce_plane(strategies: &[Strategy], with_clouds: bool) -> Vec<CePlanePoint> {
    strategies
        .iter()
        .map(|s| {
            let cloud = if with_clouds {
                izip!(s.effect_obs(), s.cost_obs())
                    .map(|(&e, &c)| (e, c))
                    .collect()
            } else {
                Vec::new()
            };
            CePlanePoint {
                name: s.name().to_string(),
                effect_mean: s.effect_mean(),
                cost_mean: s.cost_mean(),
                cloud,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::cea::types::DominanceKind;

    fn test_strategies() -> Vec<Strategy> {
        vec![
            Strategy::new("A", vec![90., 100., 110.], vec![0.8, 1.0, 1.2]).unwrap(),
            Strategy::new("B", vec![140., 150., 160.], vec![1.8, 2.0, 2.2]).unwrap(),
            Strategy::new("C", vec![290., 300., 310.], vec![1.8, 2.0, 2.2]).unwrap(),
        ]
    }

    #[test]
    fn table_rows_in_effect_order() {
        let strategies = test_strategies();
        let rows = ce_table(&strategies, 0.05).expect("failed to build CE table");
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].name, "A");
        assert_eq!(rows[1].name, "B");
        assert_eq!(rows[2].name, "C");

        // A is the reference, B buys effect at 50 per unit, C is dominated
        assert_eq!(rows[0].icer, None);
        assert_eq!(rows[0].dominated, None);
        assert!((rows[1].icer.unwrap() - 50.).abs() < 1e-9);
        assert_eq!(rows[2].icer, None);
        assert_eq!(rows[2].dominated, Some(DominanceKind::Strong));
    }

    #[test]
    fn table_rows_carry_intervals() {
        let strategies = test_strategies();
        let rows = ce_table(&strategies, 0.05).expect("failed to build CE table");
        for row in &rows {
            assert!(row.cost.interval.contains(row.cost.mean));
            assert!(row.effect.interval.contains(row.effect.mean));
        }
    }

    #[test]
    fn plane_with_clouds() {
        let strategies = test_strategies();
        let points = ce_plane(&strategies, true);
        assert_eq!(points.len(), 3);
        for (point, strategy) in points.iter().zip(strategies.iter()) {
            assert_eq!(point.cloud.len(), strategy.cost_obs().len());
            assert_eq!(point.effect_mean, strategy.effect_mean());
            assert_eq!(point.cost_mean, strategy.cost_mean());
        }
        assert_eq!(points[0].cloud[1], (1.0, 100.));
    }

    #[test]
    fn plane_without_clouds() {
        let points = ce_plane(&test_strategies(), false);
        assert!(points.iter().all(|p| p.cloud.is_empty()));
    }
}
