//! Account data structures, a read-only projection of persisted credit records

use serde::{Deserialize, Serialize};

/// Lifecycle status of a credit account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountStatus {
    /// Open and accruing interest
    Active,
    /// Balance reached zero
    PaidOff,
    /// Closed without full payoff
    Cancelled,
}

impl AccountStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, AccountStatus::Active)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AccountStatus::Active => "Active",
            AccountStatus::PaidOff => "PaidOff",
            AccountStatus::Cancelled => "Cancelled",
        }
    }
}

/// A single credit account as consumed by the simulation engine
///
/// Balance and rate are invariant-checked at load time (both >= 0). The three
/// optional fields each have a fallback: a missing term defaults at the point
/// of use (the projector and the strategy simulator apply different defaults),
/// a missing installment is derived via the annuity formula, and a missing
/// minimum payment falls back to the installment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Unique account identifier
    pub id: String,

    /// Display name (strategy results report names, not ids)
    pub name: String,

    /// Current balance in currency units
    pub balance: f64,

    /// Annual nominal interest rate in percent (24.5 = 24.5%/year)
    pub annual_rate: f64,

    /// Remaining term in months
    #[serde(default)]
    pub term_months: Option<u32>,

    /// Fixed monthly installment
    #[serde(default)]
    pub installment: Option<f64>,

    /// Minimum payment floor (revolving accounts)
    #[serde(default)]
    pub minimum_payment: Option<f64>,

    /// Lifecycle status; only active accounts are simulated
    pub status: AccountStatus,
}

impl Account {
    /// Create an active account with required fields only
    pub fn new(id: impl Into<String>, name: impl Into<String>, balance: f64, annual_rate: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            balance,
            annual_rate,
            term_months: None,
            installment: None,
            minimum_payment: None,
            status: AccountStatus::Active,
        }
    }

    /// Builder-style remaining term
    pub fn with_term(mut self, months: u32) -> Self {
        self.term_months = Some(months);
        self
    }

    /// Builder-style fixed installment
    pub fn with_installment(mut self, installment: f64) -> Self {
        self.installment = Some(installment);
        self
    }

    /// Builder-style minimum payment
    pub fn with_minimum_payment(mut self, minimum: f64) -> Self {
        self.minimum_payment = Some(minimum);
        self
    }

    /// Whether this account participates in simulations
    pub fn is_simulated(&self) -> bool {
        self.status.is_active() && self.balance > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_helpers() {
        assert!(AccountStatus::Active.is_active());
        assert!(!AccountStatus::PaidOff.is_active());
        assert_eq!(AccountStatus::Cancelled.as_str(), "Cancelled");
    }

    #[test]
    fn test_simulated_filter() {
        let active = Account::new("c1", "Visa", 1_000.0, 24.0);
        assert!(active.is_simulated());

        let zero = Account::new("c2", "Paid card", 0.0, 24.0);
        assert!(!zero.is_simulated());

        let mut cancelled = Account::new("c3", "Old loan", 500.0, 10.0);
        cancelled.status = AccountStatus::Cancelled;
        assert!(!cancelled.is_simulated());
    }

    #[test]
    fn test_builder_fields() {
        let account = Account::new("c1", "Mortgage", 150_000.0, 6.5)
            .with_term(240)
            .with_installment(1_118.56)
            .with_minimum_payment(1_118.56);
        assert_eq!(account.term_months, Some(240));
        assert_eq!(account.installment, Some(1_118.56));
        assert_eq!(account.minimum_payment, Some(1_118.56));
    }
}
