use crate::cea::error::CeaErr;
use crate::cea::types::{CeTable, DominanceKind, ExcludedStrategy, FrontierEntry};
use crate::error::EconevalErr;
use crate::strategy::types::Strategy;

/// Incremental cost-effectiveness ratio of `next` over `prev`
fn icer(prev: &Strategy, next: &Strategy) -> Result<f64, EconevalErr> {
    let d_effect = next.effect_mean() - prev.effect_mean();
    if d_effect == 0.0 {
        return Err(CeaErr::DegenerateEffect(
            prev.name().to_string(),
            next.name().to_string(),
        )
        .into());
    }
    Ok((next.cost_mean() - prev.cost_mean()) / d_effect)
}

/// True if `a` strongly dominates `b`
fn dominates(a: &Strategy, b: &Strategy) -> bool {
    a.effect_mean() >= b.effect_mean()
        && a.cost_mean() <= b.cost_mean()
        && (a.effect_mean() > b.effect_mean() || a.cost_mean() < b.cost_mean())
}

/// Builds the cost-effectiveness frontier:
///
/// 1. Orders strategies by ascending mean effect (ties broken by ascending
///    mean cost, then input order).
/// 2. Removes strongly dominated strategies, iterating to a fixed point.
/// 3. Removes extendedly dominated strategies with a forward scan over a
///    candidate stack: the last candidate is popped when its ICER against
///    its predecessor exceeds the ICER of the incoming strategy against
///    that same predecessor.
/// 4. Computes each survivor's ICER against its frontier predecessor; the
///    least-effective survivor has none.
///
/// Returns the ordered frontier plus the excluded strategies with the kind
/// of dominance that removed them.
pub fn build_frontier(strategies: &[Strategy]) -> Result<CeTable<'_>, EconevalErr> {
    if strategies.len() < 2 {
        return Err(CeaErr::NoStrategies(strategies.len()).into());
    }

    //----------------------------------------
    // Total order: effect, then cost, then input position
    //----------------------------------------
    let mut order: Vec<usize> = (0..strategies.len()).collect();
    order.sort_by(|&a, &b| {
        strategies[a]
            .effect_mean()
            .total_cmp(&strategies[b].effect_mean())
            .then(strategies[a].cost_mean().total_cmp(&strategies[b].cost_mean()))
            .then(a.cmp(&b))
    });

    //----------------------------------------
    // Strong dominance removal (fixed point)
    //----------------------------------------
    let mut excluded: Vec<ExcludedStrategy> = Vec::new();
    let mut alive = order;
    loop {
        let mut removed_any = false;
        let mut survivors = Vec::with_capacity(alive.len());
        for &i in &alive {
            let is_dominated = alive
                .iter()
                .any(|&j| j != i && dominates(&strategies[j], &strategies[i]));
            if is_dominated {
                excluded.push(ExcludedStrategy {
                    name: strategies[i].name().to_string(),
                    reason: DominanceKind::Strong,
                });
                removed_any = true;
            } else {
                survivors.push(i);
            }
        }
        alive = survivors;
        if !removed_any {
            break;
        }
    }

    //----------------------------------------
    // Extended dominance removal (candidate stack)
    //----------------------------------------
    let mut frontier: Vec<usize> = Vec::with_capacity(alive.len());
    for &i in &alive {
        while frontier.len() >= 2 {
            let last = frontier[frontier.len() - 1];
            let prev = frontier[frontier.len() - 2];
            let icer_last = icer(&strategies[prev], &strategies[last])?;
            let icer_new = icer(&strategies[prev], &strategies[i])?;
            if icer_last > icer_new {
                frontier.pop();
                excluded.push(ExcludedStrategy {
                    name: strategies[last].name().to_string(),
                    reason: DominanceKind::Extended,
                });
            } else {
                break;
            }
        }
        frontier.push(i);
    }

    //----------------------------------------
    // ICERs along the frontier
    //----------------------------------------
    let mut entries = Vec::with_capacity(frontier.len());
    for (k, &i) in frontier.iter().enumerate() {
        let entry_icer = match k {
            0 => None,
            _ => Some(icer(&strategies[frontier[k - 1]], &strategies[i])?),
        };
        entries.push(FrontierEntry {
            strategy: &strategies[i],
            icer: entry_icer,
        });
    }

    Ok(CeTable {
        frontier: entries,
        excluded,
    })
}

#[cfg(test)]
mod tests {

    use super::*;

    fn strategy(name: &str, cost_mean: f64, effect_mean: f64) -> Strategy {
        // Two observations centered on the target means
        Strategy::new(
            name,
            vec![cost_mean - 1., cost_mean + 1.],
            vec![effect_mean - 0.1, effect_mean + 0.1],
        )
        .expect("failed to construct strategy")
    }

    #[test]
    fn strong_dominance_same_effect_higher_cost() {
        let strategies = vec![
            strategy("A", 100., 1.),
            strategy("B", 150., 2.),
            strategy("C", 300., 2.),
        ];
        let table = build_frontier(&strategies).expect("failed to build frontier");

        let names: Vec<&str> = table.frontier.iter().map(|e| e.strategy.name()).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert_eq!(table.frontier[0].icer, None);
        assert!((table.frontier[1].icer.unwrap() - 50.).abs() < 1e-9);
        assert_eq!(
            table.excluded,
            vec![ExcludedStrategy {
                name: String::from("C"),
                reason: DominanceKind::Strong,
            }]
        );
    }

    #[test]
    fn strong_dominance_chain() {
        // A is cheaper and more effective than both B and C
        let strategies = vec![
            strategy("A", 100., 5.),
            strategy("B", 120., 4.),
            strategy("C", 150., 3.),
        ];
        let table = build_frontier(&strategies).expect("failed to build frontier");
        assert_eq!(table.frontier.len(), 1);
        assert_eq!(table.frontier[0].strategy.name(), "A");
        assert_eq!(table.frontier[0].icer, None);
        assert_eq!(table.excluded.len(), 2);
        assert!(table
            .excluded
            .iter()
            .all(|e| e.reason == DominanceKind::Strong));
    }

    #[test]
    fn extended_dominance_middle_strategy() {
        // ICER(B over A) = 40 / 0.1 = 400; ICER(C over A) = 50 / 1 = 50,
        // so B lies above the A-C segment and is extendedly dominated
        let strategies = vec![
            strategy("A", 10., 1.),
            strategy("B", 50., 1.1),
            strategy("C", 60., 2.),
        ];
        let table = build_frontier(&strategies).expect("failed to build frontier");

        let names: Vec<&str> = table.frontier.iter().map(|e| e.strategy.name()).collect();
        assert_eq!(names, vec!["A", "C"]);
        assert!((table.frontier[1].icer.unwrap() - 50.).abs() < 1e-9);
        assert_eq!(
            table.excluded,
            vec![ExcludedStrategy {
                name: String::from("B"),
                reason: DominanceKind::Extended,
            }]
        );
    }

    #[test]
    fn dominance_removal_idempotent() {
        let strategies = vec![
            strategy("A", 10., 1.),
            strategy("B", 50., 1.1),
            strategy("C", 60., 2.),
            strategy("D", 55., 1.5),
        ];
        let first = build_frontier(&strategies).expect("failed to build frontier");
        let second = build_frontier(&strategies).expect("failed to build frontier");

        let names_1: Vec<&str> = first.frontier.iter().map(|e| e.strategy.name()).collect();
        let names_2: Vec<&str> = second.frontier.iter().map(|e| e.strategy.name()).collect();
        assert_eq!(names_1, names_2);
        assert_eq!(first.excluded, second.excluded);
    }

    #[test]
    fn ascending_effect_order() {
        let strategies = vec![
            strategy("High", 300., 3.),
            strategy("Low", 100., 1.),
            strategy("Mid", 180., 2.),
        ];
        let table = build_frontier(&strategies).expect("failed to build frontier");
        let names: Vec<&str> = table.frontier.iter().map(|e| e.strategy.name()).collect();
        assert_eq!(names, vec!["Low", "Mid", "High"]);
        // ICERs: (180-100)/1 = 80, (300-180)/1 = 120
        assert!((table.frontier[1].icer.unwrap() - 80.).abs() < 1e-9);
        assert!((table.frontier[2].icer.unwrap() - 120.).abs() < 1e-9);
    }

    #[test]
    fn degenerate_effect_error() {
        // Equal cost and effect means: neither strongly dominates the other,
        // so the pair reaches ICER computation with a zero effect difference
        let strategies = vec![strategy("A", 100., 1.), strategy("A'", 100., 1.)];
        if let Err(e) = build_frontier(&strategies) {
            assert_eq!(
                String::from(
                    "while building cost-effectiveness frontier: strategies \
                     'A' and 'A'' have equal mean effect; ICER is undefined"
                ),
                format!("{}", e)
            );
        } else {
            panic!()
        }
    }

    #[test]
    fn too_few_strategies() {
        let strategies = vec![strategy("A", 100., 1.)];
        if let Err(e) = build_frontier(&strategies) {
            assert_eq!(
                String::from(
                    "while building cost-effectiveness frontier: need at \
                     least 2 strategies to compare; got 1"
                ),
                format!("{}", e)
            );
        } else {
            panic!()
        }
    }
}
