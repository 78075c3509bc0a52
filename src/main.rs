use econeval::analysis::{
    build_frontier, ce_table, difference_stat, nmb_analysis, summarize, PairingMode, Strategy,
    WtpSweep,
};
use rand::distributions::Distribution;
use rand::{rngs, SeedableRng};
use statrs::distribution::{Normal, Poisson};

const ALPHA: f64 = 0.05;

fn sample_cohort<D: Distribution<f64>>(dist: &D, n: usize, rng: &mut rngs::StdRng) -> Vec<f64> {
    dist.sample_iter(rng).take(n).collect()
}

fn print_outcomes(name: &str, costs: &[f64], utilities: &[f64]) {
    let cost_stat = summarize(costs, ALPHA).expect("failed to summarize costs");
    let utility_stat = summarize(utilities, ALPHA).expect("failed to summarize utilities");
    println!("{name}");
    println!(
        "  Discounted cost:    {:.0} [{:.0}, {:.0}]",
        cost_stat.mean, cost_stat.interval.lo, cost_stat.interval.hi
    );
    println!(
        "  Discounted utility: {:.2} [{:.2}, {:.2}]",
        utility_stat.mean, utility_stat.interval.lo, utility_stat.interval.hi
    );
}

fn main() {
    let mut rng = rngs::StdRng::seed_from_u64(24601);
    let cohort_size = 500;

    // Stand-in for the cohort simulation collaborator: per-patient
    // discounted costs and utilities for each therapy
    let none_cost_dist = Normal::new(2_000., 400.).unwrap();
    let none_utility_dist = Normal::new(9.5, 1.0).unwrap();
    let none_survival_dist = Normal::new(8.0, 2.0).unwrap();
    let anticoag_cost_dist = Normal::new(7_000., 900.).unwrap();
    let anticoag_utility_dist = Normal::new(10.8, 1.2).unwrap();
    let anticoag_survival_dist = Normal::new(10.0, 2.0).unwrap();
    let none_stroke_dist = Poisson::new(1.2).unwrap();
    let anticoag_stroke_dist = Poisson::new(0.7).unwrap();

    let none_costs = sample_cohort(&none_cost_dist, cohort_size, &mut rng);
    let none_utilities = sample_cohort(&none_utility_dist, cohort_size, &mut rng);
    let none_survival = sample_cohort(&none_survival_dist, cohort_size, &mut rng);
    let none_strokes = sample_cohort(&none_stroke_dist, cohort_size, &mut rng);
    let anticoag_costs = sample_cohort(&anticoag_cost_dist, cohort_size, &mut rng);
    let anticoag_utilities = sample_cohort(&anticoag_utility_dist, cohort_size, &mut rng);
    let anticoag_survival = sample_cohort(&anticoag_survival_dist, cohort_size, &mut rng);
    let anticoag_strokes = sample_cohort(&anticoag_stroke_dist, cohort_size, &mut rng);

    //----------------------------------------
    // Per-strategy outcomes
    //----------------------------------------
    print_outcomes("No Therapy", &none_costs, &none_utilities);
    print_outcomes("Anticoag Therapy", &anticoag_costs, &anticoag_utilities);

    //----------------------------------------
    // Comparative outcomes (anticoag minus none)
    //----------------------------------------
    let survival_increase = difference_stat(
        &anticoag_survival,
        &none_survival,
        PairingMode::Independent,
        ALPHA,
    )
    .expect("failed to estimate survival increase");
    println!(
        "Increase in survival time:      {:.2} [{:.2}, {:.2}]",
        survival_increase.mean, survival_increase.interval.lo, survival_increase.interval.hi
    );
    // Anticoag minus none here too, so a therapy that prevents strokes
    // reports a negative increase
    let stroke_increase = difference_stat(
        &anticoag_strokes,
        &none_strokes,
        PairingMode::Independent,
        ALPHA,
    )
    .expect("failed to estimate stroke count increase");
    println!(
        "Increase in stroke count:       {:.2} [{:.2}, {:.2}]",
        stroke_increase.mean, stroke_increase.interval.lo, stroke_increase.interval.hi
    );
    let cost_increase = difference_stat(
        &anticoag_costs,
        &none_costs,
        PairingMode::Independent,
        ALPHA,
    )
    .expect("failed to estimate cost increase");
    let utility_increase = difference_stat(
        &anticoag_utilities,
        &none_utilities,
        PairingMode::Independent,
        ALPHA,
    )
    .expect("failed to estimate utility increase");
    println!(
        "Increase in discounted cost:    {:.0} [{:.0}, {:.0}]",
        cost_increase.mean, cost_increase.interval.lo, cost_increase.interval.hi
    );
    println!(
        "Increase in discounted utility: {:.2} [{:.2}, {:.2}]",
        utility_increase.mean, utility_increase.interval.lo, utility_increase.interval.hi
    );

    //----------------------------------------
    // Cost-effectiveness analysis
    //----------------------------------------
    let strategies = vec![
        Strategy::new("No Therapy", none_costs, none_utilities)
            .expect("failed to construct strategy"),
        Strategy::new("Anticoag Therapy", anticoag_costs, anticoag_utilities)
            .expect("failed to construct strategy"),
    ];

    let frontier = build_frontier(&strategies).expect("failed to build frontier");
    println!("Cost-effectiveness frontier:");
    for entry in &frontier.frontier {
        match entry.icer {
            Some(icer) => println!(
                "  {} (cost {:.0}, effect {:.2}, ICER {:.0})",
                entry.strategy.name(),
                entry.strategy.cost_mean(),
                entry.strategy.effect_mean(),
                icer
            ),
            None => println!(
                "  {} (cost {:.0}, effect {:.2}, reference)",
                entry.strategy.name(),
                entry.strategy.cost_mean(),
                entry.strategy.effect_mean()
            ),
        }
    }
    for excluded in &frontier.excluded {
        println!("  {} excluded ({:?} dominance)", excluded.name, excluded.reason);
    }

    let rows = ce_table(&strategies, ALPHA).expect("failed to build CE table");
    println!("CE table: {rows:#?}");

    //----------------------------------------
    // Cost-benefit analysis
    //----------------------------------------
    let sweep = WtpSweep::new(0., 50_000., 51).expect("failed to construct WTP sweep");
    let cba = nmb_analysis(
        &strategies,
        "No Therapy",
        &sweep,
        PairingMode::Independent,
        ALPHA,
    )
    .expect("failed to run cost-benefit analysis");

    for breakeven in &cba.breakevens {
        match breakeven.wtp {
            Some(wtp) => println!(
                "Breakeven WTP for {}: {:.0} per QALY",
                breakeven.strategy_name, wtp
            ),
            None => println!(
                "No breakeven WTP for {} inside the sweep",
                breakeven.strategy_name
            ),
        }
    }
}
