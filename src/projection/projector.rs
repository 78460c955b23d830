//! Single-account balance projection and portfolio chart series

use super::rows::{PortfolioMonth, Projection, ProjectionMonth};
use crate::account::Account;
use crate::amortization::{amortization_schedule, monthly_installment, round_cents};
use chrono::{Months, NaiveDate};

/// Term assumed when an account has no remaining term on record.
///
/// The strategy simulator uses a different fallback (60 months) when deriving
/// minimum payments; see `strategy::DEFAULT_MINIMUM_TERM_MONTHS`.
pub const DEFAULT_PROJECTION_TERM_MONTHS: u32 = 360;

/// Portfolio chart series is capped at this many months
pub const PORTFOLIO_CHART_MONTHS: usize = 120;

/// Project a single account's balance forward under an optional extra payment.
///
/// The effective installment is the account's fixed installment (or the
/// annuity-derived one over the remaining term) plus `extra_payment`. Pure
/// function of the account snapshot, the extra amount, and `today`; callers
/// pass the current date so results are reproducible.
pub fn project_account(account: &Account, extra_payment: f64, today: NaiveDate) -> Projection {
    let term = account.term_months.unwrap_or(DEFAULT_PROJECTION_TERM_MONTHS);
    let base_installment = account
        .installment
        .unwrap_or_else(|| monthly_installment(account.balance, account.annual_rate, term));
    let installment = base_installment + extra_payment;

    let schedule = amortization_schedule(account.balance, account.annual_rate, term, Some(installment));

    let months: Vec<ProjectionMonth> = schedule
        .iter()
        .map(|row| ProjectionMonth {
            month: row.month,
            date: today + Months::new(row.month),
            payment: row.payment,
            interest: row.interest,
            principal: row.principal,
            balance: row.balance,
        })
        .collect();

    let total_interest = round_cents(schedule.iter().map(|r| r.interest).sum());
    let total_cost = round_cents(schedule.iter().map(|r| r.payment).sum());
    let payoff_date = today + Months::new(schedule.len() as u32);

    log::debug!(
        "projected {}: {} months, {:.2} interest",
        account.id,
        schedule.len(),
        total_interest
    );

    Projection {
        account_id: account.id.clone(),
        account_name: account.name.clone(),
        months,
        total_interest,
        total_cost,
        payoff_date,
    }
}

/// Combined balance series across accounts, one entry per month.
///
/// Months beyond an account's payoff read as 0. The series is capped at
/// [`PORTFOLIO_CHART_MONTHS`] regardless of the longest schedule.
pub fn project_portfolio(accounts: &[Account], extra_payment: f64, today: NaiveDate) -> Vec<PortfolioMonth> {
    let projections: Vec<Projection> = accounts
        .iter()
        .map(|a| project_account(a, extra_payment, today))
        .collect();

    let longest = projections.iter().map(|p| p.months.len()).max().unwrap_or(0);
    let horizon = longest.min(PORTFOLIO_CHART_MONTHS);

    (0..horizon)
        .map(|i| PortfolioMonth {
            date: today + Months::new(i as u32 + 1),
            balances: projections
                .iter()
                .map(|p| (p.account_id.clone(), p.balance_at(i)))
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    fn card() -> Account {
        Account::new("c1", "Visa", 10_000.0, 12.0).with_term(12)
    }

    #[test]
    fn test_projection_dates_start_one_month_out() {
        let projection = project_account(&card(), 0.0, today());
        assert_eq!(projection.months[0].date, NaiveDate::from_ymd_opt(2025, 2, 15).unwrap());
        assert_eq!(
            projection.payoff_date,
            today() + Months::new(projection.months.len() as u32)
        );
    }

    #[test]
    fn test_projection_totals_match_rows() {
        let projection = project_account(&card(), 0.0, today());
        let interest_sum: f64 = projection.months.iter().map(|m| m.interest).sum();
        let payment_sum: f64 = projection.months.iter().map(|m| m.payment).sum();
        assert_abs_diff_eq!(projection.total_interest, interest_sum, epsilon = 0.01);
        assert_abs_diff_eq!(projection.total_cost, payment_sum, epsilon = 0.01);
    }

    #[test]
    fn test_extra_payment_shortens_payoff() {
        let base = project_account(&card(), 0.0, today());
        let accelerated = project_account(&card(), 200.0, today());
        assert!(accelerated.months_to_payoff() < base.months_to_payoff());
        assert!(accelerated.total_interest < base.total_interest);
    }

    #[test]
    fn test_missing_term_defaults_to_360_months() {
        let mortgage = Account::new("m1", "Mortgage", 100_000.0, 12.0);
        let projection = project_account(&mortgage, 0.0, today());
        // Installment derived over 360 months; cent rounding may shift payoff
        // by a few rows either way
        let months = projection.months_to_payoff();
        assert!((355..=365).contains(&months), "got {months} months");
    }

    #[test]
    fn test_fixed_installment_is_respected() {
        let account = Account::new("c1", "Card", 1_000.0, 0.0).with_installment(100.0);
        let projection = project_account(&account, 0.0, today());
        assert_eq!(projection.months_to_payoff(), 10);
        assert_eq!(projection.months[0].payment, 100.0);
    }

    #[test]
    fn test_portfolio_series_caps_and_backfills() {
        let short = Account::new("a", "Short", 500.0, 0.0).with_installment(250.0);
        let long = Account::new("b", "Long", 100_000.0, 12.0); // ~360 months
        let series = project_portfolio(&[short, long], 0.0, today());

        assert_eq!(series.len(), PORTFOLIO_CHART_MONTHS);
        // Short account pays off after 2 months and reads 0 thereafter
        assert!(series[0].balances["a"] > 0.0);
        assert_eq!(series[2].balances["a"], 0.0);
        assert!(series[2].balances["b"] > 0.0);
        assert!(series[2].total() > 0.0);
    }

    #[test]
    fn test_empty_portfolio_is_empty_series() {
        assert!(project_portfolio(&[], 0.0, today()).is_empty());
    }
}
