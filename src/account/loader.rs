//! Load accounts from accounts.csv

use super::{Account, AccountStatus};
use csv::Reader;
use std::error::Error;
use std::path::Path;
use thiserror::Error;

/// Row-level validation/parse failures
#[derive(Debug, Error)]
pub enum AccountParseError {
    #[error("unknown account status: {0}")]
    UnknownStatus(String),
    #[error("negative balance for account {0}")]
    NegativeBalance(String),
    #[error("negative annual rate for account {0}")]
    NegativeRate(String),
}

/// Raw CSV row matching accounts.csv columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "AccountID")]
    id: String,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Balance")]
    balance: f64,
    #[serde(rename = "AnnualRate")]
    annual_rate: f64,
    #[serde(rename = "TermMonths")]
    term_months: Option<u32>,
    #[serde(rename = "Installment")]
    installment: Option<f64>,
    #[serde(rename = "MinimumPayment")]
    minimum_payment: Option<f64>,
    #[serde(rename = "Status")]
    status: String,
}

impl CsvRow {
    fn to_account(self) -> Result<Account, AccountParseError> {
        // Legacy exports carry the original Spanish status tokens
        let status = match self.status.as_str() {
            "Active" | "activo" => AccountStatus::Active,
            "PaidOff" | "pagado" => AccountStatus::PaidOff,
            "Cancelled" | "cancelado" => AccountStatus::Cancelled,
            other => return Err(AccountParseError::UnknownStatus(other.to_string())),
        };

        if self.balance < 0.0 {
            return Err(AccountParseError::NegativeBalance(self.id));
        }
        if self.annual_rate < 0.0 {
            return Err(AccountParseError::NegativeRate(self.id));
        }

        Ok(Account {
            id: self.id,
            name: self.name,
            balance: self.balance,
            annual_rate: self.annual_rate,
            term_months: self.term_months,
            installment: self.installment,
            minimum_payment: self.minimum_payment,
            status,
        })
    }
}

/// Load all accounts from a CSV file
pub fn load_accounts<P: AsRef<Path>>(path: P) -> Result<Vec<Account>, Box<dyn Error>> {
    let mut reader = Reader::from_path(path)?;
    let mut accounts = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        accounts.push(row.to_account()?);
    }

    log::debug!("loaded {} accounts", accounts.len());
    Ok(accounts)
}

/// Load accounts from any reader (e.g., string buffer, network stream)
pub fn load_accounts_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<Account>, Box<dyn Error>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut accounts = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        accounts.push(row.to_account()?);
    }

    Ok(accounts)
}

/// Load accounts from the default accounts.csv location
pub fn load_default_accounts() -> Result<Vec<Account>, Box<dyn Error>> {
    load_accounts("accounts.csv")
}
