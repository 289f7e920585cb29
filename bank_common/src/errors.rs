use crate::ledger::Amount;
use thiserror::Error;

/// **An application-specific error type**
///
/// Every variant is a normal outcome of bad input, never a system fault,
/// and none of them leaves an account partially updated.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AccountingError {
    /// The amount of a deposit, withdrawal or transfer wasn't greater than zero.
    #[error("Amount must be greater than zero; got {0}.")]
    InvalidAmount(Amount),

    /// The account's balance doesn't cover the requested amount.
    #[error(r#"Insufficient funds in "{0}" for {1}."#)]
    InsufficientFunds(String, Amount),

    /// The transfer target doesn't name a valid, distinct account.
    #[error(r#"Recipient must be a valid account: "{0}"."#)]
    InvalidRecipient(String),

    /// No account is registered under the name.
    #[error(r#"The account "{0}" doesn't exist."#)]
    AccountNotFound(String),

    /// Crediting the amount would overflow the account's balance.
    #[error(r#"The account "{0}" would be over-funded by {1}."#)]
    AccountOverFunded(String, Amount),
}

pub const HOLDER_NAME_NOT_VALID_MSG: &str = "Account holder's name is not valid";
