//! Strategy simulation results and comparison

use serde::{Deserialize, Serialize};

/// Surplus-routing order for a payoff simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrategyKind {
    /// Descending interest rate (minimizes total interest)
    Avalanche,
    /// Ascending balance (front-loads quick wins)
    Snowball,
}

impl StrategyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::Avalanche => "Avalanche",
            StrategyKind::Snowball => "Snowball",
        }
    }
}

/// Outcome of one multi-account payoff simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyResult {
    /// Which ordering produced this result
    pub strategy: StrategyKind,

    /// Account names in the fixed processing order
    pub order: Vec<String>,

    /// Months until every balance reached zero (600 = cap hit)
    pub months_total: u32,

    /// Interest accrued across all accounts, rounded to cents
    pub total_interest: f64,

    /// Sum of all payments made, rounded to cents
    pub total_cost: f64,

    /// False when the 600-month cap was hit with debt remaining
    pub converged: bool,
}

impl StrategyResult {
    /// Zero-filled result for an empty account set
    pub fn empty(strategy: StrategyKind) -> Self {
        Self {
            strategy,
            order: Vec::new(),
            months_total: 0,
            total_interest: 0.0,
            total_cost: 0.0,
            converged: true,
        }
    }
}

/// Both strategies simulated over the same account set and budget
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyComparison {
    pub avalanche: StrategyResult,
    pub snowball: StrategyResult,
}

impl StrategyComparison {
    /// The cheaper strategy by total cost; ties favor avalanche
    pub fn recommended(&self) -> &StrategyResult {
        if self.avalanche.total_cost <= self.snowball.total_cost {
            &self.avalanche
        } else {
            &self.snowball
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result_is_zero_filled() {
        let result = StrategyResult::empty(StrategyKind::Snowball);
        assert!(result.order.is_empty());
        assert_eq!(result.months_total, 0);
        assert_eq!(result.total_interest, 0.0);
        assert_eq!(result.total_cost, 0.0);
        assert!(result.converged);
    }

    #[test]
    fn test_tie_favors_avalanche() {
        let comparison = StrategyComparison {
            avalanche: StrategyResult::empty(StrategyKind::Avalanche),
            snowball: StrategyResult::empty(StrategyKind::Snowball),
        };
        assert_eq!(comparison.recommended().strategy, StrategyKind::Avalanche);
    }

    #[test]
    fn test_cheaper_snowball_wins() {
        let mut avalanche = StrategyResult::empty(StrategyKind::Avalanche);
        avalanche.total_cost = 1_000.0;
        let mut snowball = StrategyResult::empty(StrategyKind::Snowball);
        snowball.total_cost = 900.0;
        let comparison = StrategyComparison { avalanche, snowball };
        assert_eq!(comparison.recommended().strategy, StrategyKind::Snowball);
    }
}
