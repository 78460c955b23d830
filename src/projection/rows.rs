//! Projection output structures

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One calendar-dated month of a single-account projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionMonth {
    /// Month index (1-based)
    pub month: u32,
    /// Calendar date: today + month offset (row 1 = one month out)
    pub date: NaiveDate,
    /// Total payment for the month
    pub payment: f64,
    /// Interest portion
    pub interest: f64,
    /// Principal portion
    pub principal: f64,
    /// Remaining balance after the payment
    pub balance: f64,
}

/// Full projection for a single account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projection {
    /// Source account identifier
    pub account_id: String,

    /// Source account display name
    pub account_name: String,

    /// Monthly rows, at most 600
    pub months: Vec<ProjectionMonth>,

    /// Sum of interest across all rows, rounded to cents
    pub total_interest: f64,

    /// Sum of payments across all rows, rounded to cents
    pub total_cost: f64,

    /// Calendar date of the final payment (today + row count months)
    pub payoff_date: NaiveDate,
}

impl Projection {
    /// Number of months until the balance reaches zero
    pub fn months_to_payoff(&self) -> u32 {
        self.months.len() as u32
    }

    /// Remaining balance at a given row index, zero past the end
    pub fn balance_at(&self, index: usize) -> f64 {
        self.months.get(index).map_or(0.0, |m| m.balance)
    }
}

/// Combined per-month balances across a set of accounts, for charting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioMonth {
    /// Calendar date for the month
    pub date: NaiveDate,
    /// Remaining balance per account id; paid-off accounts read 0
    pub balances: BTreeMap<String, f64>,
}

impl PortfolioMonth {
    /// Total remaining debt across all accounts for the month
    pub fn total(&self) -> f64 {
        self.balances.values().sum()
    }
}
