//! Sweep monthly budgets and compare payoff outcomes under both strategies
//!
//! Outputs one row per budget level for plotting months-to-zero and total
//! interest against payment capacity.

use debt_engine::account::load_default_accounts;
use debt_engine::{compare_strategies, StrategyComparison};
use rayon::prelude::*;
use std::fs::File;
use std::io::Write;
use std::time::Instant;

/// Budget grid: minimum budget up to +1000, in 25-unit steps
const SWEEP_STEPS: u32 = 40;
const SWEEP_STEP_SIZE: f64 = 25.0;

fn main() {
    env_logger::init();

    let start = Instant::now();
    println!("Loading accounts from accounts.csv...");

    let accounts = load_default_accounts().expect("Failed to load accounts");
    println!("Loaded {} accounts in {:?}", accounts.len(), start.elapsed());

    let minimum_budget: f64 = accounts
        .iter()
        .filter(|a| a.is_simulated())
        .map(debt_engine::strategy::minimum_payment)
        .sum();
    println!("Minimum budget (sum of minimum payments): {:.2}", minimum_budget);

    let budgets: Vec<f64> = (0..=SWEEP_STEPS)
        .map(|i| minimum_budget + i as f64 * SWEEP_STEP_SIZE)
        .collect();

    println!("Running {} comparisons...", budgets.len());
    let sweep_start = Instant::now();

    // Each budget level is independent; run them in parallel
    let results: Vec<(f64, StrategyComparison)> = budgets
        .par_iter()
        .map(|&budget| (budget, compare_strategies(&accounts, budget)))
        .collect();

    println!("Sweep complete in {:?}", sweep_start.elapsed());

    let output_path = "budget_sweep.csv";
    let mut file = File::create(output_path).expect("Failed to create output file");
    writeln!(
        file,
        "Budget,AvalancheMonths,AvalancheInterest,AvalancheConverged,SnowballMonths,SnowballInterest,SnowballConverged,Recommended"
    )
    .unwrap();

    for (budget, comparison) in &results {
        writeln!(
            file,
            "{:.2},{},{:.2},{},{},{:.2},{},{}",
            budget,
            comparison.avalanche.months_total,
            comparison.avalanche.total_interest,
            comparison.avalanche.converged,
            comparison.snowball.months_total,
            comparison.snowball.total_interest,
            comparison.snowball.converged,
            comparison.recommended().strategy.as_str(),
        )
        .unwrap();
    }

    println!("Results written to: {}", output_path);

    // Quick console read of the endpoints
    if let (Some((lo, first)), Some((hi, last))) = (results.first(), results.last()) {
        println!(
            "\nAt {:.2}/month: avalanche {} months, {:.2} interest",
            lo, first.avalanche.months_total, first.avalanche.total_interest
        );
        println!(
            "At {:.2}/month: avalanche {} months, {:.2} interest",
            hi, last.avalanche.months_total, last.avalanche.total_interest
        );
    }
}
