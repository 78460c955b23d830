//! Month-stepping multi-account payoff simulation

use super::result::{StrategyComparison, StrategyKind, StrategyResult};
use crate::account::Account;
use crate::amortization::{monthly_installment, round_cents, PAID_OFF_THRESHOLD};
use std::cmp::Ordering;

/// Hard cap on simulated months. A budget below the aggregate interest accrual
/// never pays the set off; the cap bounds the loop instead of erroring.
pub const MAX_SIMULATION_MONTHS: u32 = 600;

/// Term assumed when deriving a minimum payment for an account with neither an
/// explicit minimum, a fixed installment, nor a remaining term on record.
///
/// Intentionally not the projector's 360-month default: a derived minimum over
/// 360 months would barely service interest on typical card balances.
pub const DEFAULT_MINIMUM_TERM_MONTHS: u32 = 60;

/// Minimum monthly payment for an account: explicit minimum, else fixed
/// installment, else annuity installment over the remaining term (60-month
/// fallback when absent).
pub fn minimum_payment(account: &Account) -> f64 {
    account
        .minimum_payment
        .or(account.installment)
        .unwrap_or_else(|| {
            monthly_installment(
                account.balance,
                account.annual_rate,
                account.term_months.unwrap_or(DEFAULT_MINIMUM_TERM_MONTHS),
            )
        })
}

/// Per-account simulation state
#[derive(Debug, Clone)]
struct SimAccount {
    name: String,
    balance: f64,
    annual_rate: f64,
    minimum_payment: f64,
}

impl SimAccount {
    fn from_account(account: &Account) -> Self {
        Self {
            name: account.name.clone(),
            balance: account.balance,
            annual_rate: account.annual_rate,
            minimum_payment: minimum_payment(account),
        }
    }

    fn is_open(&self) -> bool {
        self.balance > PAID_OFF_THRESHOLD
    }
}

/// Simulate paying off all active accounts under a shared monthly budget.
///
/// Accounts are sorted once up front by the strategy's key and the order is
/// fixed for the whole run; it is not re-evaluated as balances change. Each
/// month, every open account accrues interest and receives its minimum payment
/// (capped at its balance); whatever budget remains is routed to the open
/// accounts in the fixed order. A budget below the sum of minimums still runs,
/// it just routes no surplus.
pub fn simulate_strategy(accounts: &[Account], monthly_budget: f64, kind: StrategyKind) -> StrategyResult {
    let mut sims: Vec<SimAccount> = accounts
        .iter()
        .filter(|a| a.is_simulated())
        .map(SimAccount::from_account)
        .collect();

    if sims.is_empty() {
        return StrategyResult::empty(kind);
    }

    match kind {
        StrategyKind::Avalanche => {
            sims.sort_by(|a, b| b.annual_rate.partial_cmp(&a.annual_rate).unwrap_or(Ordering::Equal))
        }
        StrategyKind::Snowball => {
            sims.sort_by(|a, b| a.balance.partial_cmp(&b.balance).unwrap_or(Ordering::Equal))
        }
    }
    let order: Vec<String> = sims.iter().map(|s| s.name.clone()).collect();

    let mut total_interest = 0.0;
    let mut total_cost = 0.0;
    let mut month = 0u32;

    while month < MAX_SIMULATION_MONTHS {
        let open: Vec<usize> = (0..sims.len()).filter(|&i| sims[i].is_open()).collect();
        if open.is_empty() {
            break;
        }
        month += 1;

        let total_minimums: f64 = open
            .iter()
            .map(|&i| sims[i].minimum_payment.min(sims[i].balance))
            .sum();
        let surplus = (monthly_budget - total_minimums).max(0.0);

        // Accrue interest and apply minimums to every open account
        for &i in &open {
            let sim = &mut sims[i];
            let interest = sim.balance * sim.annual_rate / 12.0 / 100.0;
            total_interest += interest;
            sim.balance += interest;

            let minimum = sim.minimum_payment.min(sim.balance);
            sim.balance -= minimum;
            total_cost += minimum;
        }

        // Route the surplus to the strategy's target in the fixed order
        let mut remaining = surplus;
        for &i in &open {
            if remaining <= 0.0 || sims[i].balance <= 0.0 {
                break;
            }
            let extra = remaining.min(sims[i].balance);
            sims[i].balance -= extra;
            total_cost += extra;
            remaining -= extra;
        }

        for &i in &open {
            sims[i].balance = sims[i].balance.max(0.0);
        }
    }

    let converged = sims.iter().all(|s| !s.is_open());
    if !converged {
        log::warn!(
            "{} simulation hit the {}-month cap with debt remaining (budget {:.2})",
            kind.as_str(),
            MAX_SIMULATION_MONTHS,
            monthly_budget
        );
    }

    StrategyResult {
        strategy: kind,
        order,
        months_total: month,
        total_interest: round_cents(total_interest),
        total_cost: round_cents(total_cost),
        converged,
    }
}

/// Run both orderings over the same inputs
pub fn compare_strategies(accounts: &[Account], monthly_budget: f64) -> StrategyComparison {
    StrategyComparison {
        avalanche: simulate_strategy(accounts, monthly_budget, StrategyKind::Avalanche),
        snowball: simulate_strategy(accounts, monthly_budget, StrategyKind::Snowball),
    }
}
