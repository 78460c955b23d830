//! Payoff-strategy simulation (avalanche vs snowball)

mod result;
mod simulator;

pub use result::{StrategyComparison, StrategyKind, StrategyResult};
pub use simulator::{
    compare_strategies, minimum_payment, simulate_strategy, DEFAULT_MINIMUM_TERM_MONTHS,
    MAX_SIMULATION_MONTHS,
};
