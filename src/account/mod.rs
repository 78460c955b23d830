//! Account input model and CSV loader

mod data;
pub mod loader;

pub use data::{Account, AccountStatus};
pub use loader::{load_accounts, load_accounts_from_reader, load_default_accounts};
