//! Pre-loaded paydown planner over a fixed account set
//!
//! Loads accounts once, then answers repeated what-if questions (different
//! budgets, different extra payments) without re-reading the source file.

use crate::account::{load_accounts, Account};
use crate::projection::{project_account, project_portfolio, PortfolioMonth, Projection};
use crate::strategy::{compare_strategies, minimum_payment, StrategyComparison};
use chrono::NaiveDate;
use std::error::Error;
use std::path::Path;

/// Pre-loaded planner for repeated simulations over one account set
///
/// # Example
/// ```ignore
/// let planner = PaydownPlanner::from_csv_path(Path::new("accounts.csv"))?;
///
/// for budget in [400.0, 500.0, 600.0] {
///     let comparison = planner.compare(Some(budget));
/// }
/// ```
#[derive(Debug, Clone)]
pub struct PaydownPlanner {
    accounts: Vec<Account>,
}

impl PaydownPlanner {
    /// Create a planner over an in-memory account set
    pub fn new(accounts: Vec<Account>) -> Self {
        Self { accounts }
    }

    /// Create a planner by loading accounts from a CSV file
    pub fn from_csv_path(path: &Path) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            accounts: load_accounts(path)?,
        })
    }

    /// Sum of minimum payments across all simulated accounts.
    /// This is the smallest budget that leaves no account under-serviced and
    /// the default budget when the caller supplies none.
    pub fn minimum_budget(&self) -> f64 {
        self.accounts
            .iter()
            .filter(|a| a.is_simulated())
            .map(minimum_payment)
            .sum()
    }

    /// Compare both payoff strategies; a `None` budget defaults to the sum of
    /// minimum payments
    pub fn compare(&self, monthly_budget: Option<f64>) -> StrategyComparison {
        let budget = monthly_budget.unwrap_or_else(|| self.minimum_budget());
        compare_strategies(&self.accounts, budget)
    }

    /// Project every simulated account independently under a shared extra payment
    pub fn project_all(&self, extra_payment: f64, today: NaiveDate) -> Vec<Projection> {
        self.accounts
            .iter()
            .filter(|a| a.is_simulated())
            .map(|a| project_account(a, extra_payment, today))
            .collect()
    }

    /// Combined chart series across the simulated accounts
    pub fn portfolio_series(&self, extra_payment: f64, today: NaiveDate) -> Vec<PortfolioMonth> {
        let simulated: Vec<Account> = self
            .accounts
            .iter()
            .filter(|a| a.is_simulated())
            .cloned()
            .collect();
        project_portfolio(&simulated, extra_payment, today)
    }

    /// Get reference to the account set for inspection
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Get mutable reference to the account set for customization
    pub fn accounts_mut(&mut self) -> &mut Vec<Account> {
        &mut self.accounts
    }
}
