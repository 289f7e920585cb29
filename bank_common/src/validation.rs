use crate::errors::AccountingError;
use crate::ledger::Amount;

/// **Basic input validation for an account holder's name**
///
/// Checks for:
/// - An empty string.
///
/// Returns the reason in case the name isn't valid.
pub fn is_valid_name(name: &str) -> Option<&'static str> {
    if name.trim().is_empty() {
        Some("The name cannot be empty.")
    } else {
        None
    }
}

/// **Validation of an operation's amount**
///
/// Only amounts greater than zero can be deposited, withdrawn or transferred.
///
/// # Errors
/// - Zero or negative amount, `AccountingError::InvalidAmount`
pub fn validate_amount(amount: Amount) -> Result<Amount, AccountingError> {
    if amount > 0 {
        Ok(amount)
    } else {
        Err(AccountingError::InvalidAmount(amount))
    }
}
