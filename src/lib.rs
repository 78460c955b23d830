//! Debt Engine - amortization and payoff-strategy simulation
//!
//! This library provides:
//! - French/annuity amortization (fixed installment + monthly schedule)
//! - Single-account balance projections with optional extra payments
//! - Multi-account payoff simulations (avalanche vs snowball)
//! - Side-by-side strategy comparison with a recommended pick

pub mod account;
pub mod amortization;
pub mod projection;
pub mod strategy;
pub mod planner;

// Re-export commonly used types
pub use account::{Account, AccountStatus};
pub use amortization::{AmortizationRow, amortization_schedule, monthly_installment, total_interest};
pub use projection::{Projection, ProjectionMonth, project_account, project_portfolio};
pub use strategy::{StrategyComparison, StrategyKind, StrategyResult, compare_strategies, simulate_strategy};
pub use planner::PaydownPlanner;
