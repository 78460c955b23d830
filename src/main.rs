//! Debt Engine CLI
//!
//! Command-line interface for balance projections and strategy comparison

use chrono::Local;
use clap::Parser;
use debt_engine::account::load_accounts;
use debt_engine::{Account, PaydownPlanner};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "debt_engine", about = "Debt amortization and payoff-strategy simulation")]
struct Args {
    /// Accounts CSV path; omit to run the built-in sample set
    #[arg(long)]
    accounts: Option<PathBuf>,

    /// Monthly budget for the strategy comparison; defaults to the sum of
    /// minimum payments
    #[arg(long)]
    budget: Option<f64>,

    /// Extra monthly payment applied to every projected account
    #[arg(long, default_value_t = 0.0)]
    extra: f64,

    /// Projection CSV output path
    #[arg(long, default_value = "projection_output.csv")]
    output: PathBuf,

    /// Strategy comparison JSON output path
    #[arg(long, default_value = "strategy_comparison.json")]
    comparison_output: PathBuf,
}

/// Sample accounts for running without an input file
fn sample_accounts() -> Vec<Account> {
    vec![
        Account::new("cc-1", "Rewards card", 4_500.0, 24.5).with_minimum_payment(150.0),
        Account::new("auto-1", "Auto loan", 12_000.0, 9.9)
            .with_term(48)
            .with_installment(304.12),
        Account::new("pl-1", "Personal loan", 3_000.0, 16.0).with_term(24),
    ]
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    println!("Debt Engine v0.1.0");
    println!("==================\n");

    let accounts = match &args.accounts {
        Some(path) => load_accounts(path).expect("Failed to load accounts"),
        None => sample_accounts(),
    };

    let planner = PaydownPlanner::new(accounts);
    let today = Local::now().date_naive();

    println!("Accounts:");
    for account in planner.accounts() {
        println!(
            "  {:<10} {:<16} balance ${:>10.2}  rate {:>5.2}%  [{}]",
            account.id,
            account.name,
            account.balance,
            account.annual_rate,
            account.status.as_str()
        );
    }
    println!();

    // Per-account projections
    let projections = planner.project_all(args.extra, today);

    println!("Projections (extra payment ${:.2}/month):", args.extra);
    for projection in &projections {
        println!(
            "  {:<16} {:>4} months  interest ${:>10.2}  total ${:>12.2}  paid off {}",
            projection.account_name,
            projection.months_to_payoff(),
            projection.total_interest,
            projection.total_cost,
            projection.payoff_date.format("%b %Y"),
        );
    }

    // First months of the largest projection, for a quick sanity read
    if let Some(largest) = projections.iter().max_by_key(|p| p.months.len()) {
        println!("\nSchedule for {} (first 12 months):", largest.account_name);
        println!(
            "{:>5} {:>10} {:>12} {:>10} {:>10} {:>12}",
            "Month", "Date", "Payment", "Interest", "Principal", "Balance"
        );
        for month in largest.months.iter().take(12) {
            println!(
                "{:>5} {:>10} {:>12.2} {:>10.2} {:>10.2} {:>12.2}",
                month.month,
                month.date.format("%b %Y").to_string(),
                month.payment,
                month.interest,
                month.principal,
                month.balance,
            );
        }
        if largest.months.len() > 12 {
            println!("... ({} more months)", largest.months.len() - 12);
        }
    }

    // Write all projection rows to CSV
    let mut file = File::create(&args.output).expect("Unable to create CSV file");
    writeln!(file, "AccountID,Month,Date,Payment,Interest,Principal,Balance").unwrap();
    for projection in &projections {
        for month in &projection.months {
            writeln!(
                file,
                "{},{},{},{:.2},{:.2},{:.2},{:.2}",
                projection.account_id,
                month.month,
                month.date,
                month.payment,
                month.interest,
                month.principal,
                month.balance,
            )
            .unwrap();
        }
    }
    println!("\nProjection rows written to: {}", args.output.display());

    // Strategy comparison
    let budget = args.budget.unwrap_or_else(|| planner.minimum_budget());
    let comparison = planner.compare(Some(budget));

    println!("\nStrategy comparison (budget ${:.2}/month):", budget);
    for result in [&comparison.avalanche, &comparison.snowball] {
        println!(
            "  {:<10} {:>4} months  interest ${:>10.2}  cost ${:>12.2}  order: {}{}",
            result.strategy.as_str(),
            result.months_total,
            result.total_interest,
            result.total_cost,
            result.order.join(" -> "),
            if result.converged { "" } else { "  (did not converge)" },
        );
    }
    println!("  Recommended: {}", comparison.recommended().strategy.as_str());

    let json = serde_json::to_string_pretty(&comparison).expect("Failed to serialize comparison");
    let mut file = File::create(&args.comparison_output).expect("Unable to create JSON file");
    file.write_all(json.as_bytes()).unwrap();
    println!("Comparison written to: {}", args.comparison_output.display());
}
