pub mod account;
pub mod bank;
pub mod cli;
pub mod errors;
pub mod ledger;
pub mod validation;

pub use account::Account;
pub use bank::Bank;
pub use errors::AccountingError;
pub use ledger::{Amount, EntryKind, LedgerEntry};
