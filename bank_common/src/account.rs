use crate::errors::AccountingError;
use crate::ledger::{Amount, LedgerEntry};
use crate::validation::validate_amount;

/// **A single holder's account: a balance and its transaction history**
///
/// The balance and the history are only changed by the operations below,
/// and each successful operation changes both together: the balance moves
/// by exactly the amount, and exactly one entry is appended.
///
/// A balance that starts non-negative never becomes negative,
/// as withdrawals and outgoing transfers that aren't covered are rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Account {
    name: String,
    balance: Amount,
    history: Vec<LedgerEntry>,
}

impl Account {
    /// Creates an account with the given opening `balance` and an empty history.
    ///
    /// The opening balance isn't validated, nor recorded in the history.
    pub fn new(name: &str, balance: Amount) -> Self {
        Account {
            name: name.to_string(),
            balance,
            history: vec![],
        }
    }

    /// The account holder's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the current balance.
    pub fn check_balance(&self) -> Amount {
        self.balance
    }

    /// All entries, oldest first
    pub fn history(&self) -> &[LedgerEntry] {
        &self.history
    }

    /// Deposits the `amount` into the account.
    ///
    /// # Errors
    /// - Amount isn't greater than zero, `AccountingError::InvalidAmount`;
    /// - Attempted overflow (account over-funded), `AccountingError::AccountOverFunded`.
    pub fn deposit(&mut self, amount: Amount) -> Result<LedgerEntry, AccountingError> {
        let amount = validate_amount(amount).map_err(|err| self.rejected("deposit", err))?;

        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| AccountingError::AccountOverFunded(self.name.clone(), amount))
            .map_err(|err| self.rejected("deposit", err))?;

        let entry = LedgerEntry::Deposit { amount };
        self.history.push(entry.clone());
        log::debug!("Deposited {} into {}'s account.", amount, self.name);

        Ok(entry)
    }

    /// Withdraws the `amount` from the account, if the balance covers it.
    ///
    /// # Errors
    /// - Amount isn't greater than zero, `AccountingError::InvalidAmount`;
    /// - Amount exceeds the balance, `AccountingError::InsufficientFunds`.
    pub fn withdraw(&mut self, amount: Amount) -> Result<LedgerEntry, AccountingError> {
        let amount = validate_amount(amount).map_err(|err| self.rejected("withdraw", err))?;

        if amount > self.balance {
            let err = AccountingError::InsufficientFunds(self.name.clone(), amount);
            return Err(self.rejected("withdraw", err));
        }
        self.balance -= amount;

        let entry = LedgerEntry::Withdrawal { amount };
        self.history.push(entry.clone());
        log::debug!("Withdrew {} from {}'s account.", amount, self.name);

        Ok(entry)
    }

    /// Moves the `amount` from this account to the `recipient`'s account.
    ///
    /// Returns the two recorded entries: this account's `TransferOut`
    /// and the recipient's `TransferIn`.
    ///
    /// Either both accounts are updated, or neither is.
    ///
    /// # Errors
    /// - Amount isn't greater than zero, `AccountingError::InvalidAmount`;
    /// - Amount exceeds this account's balance, `AccountingError::InsufficientFunds`;
    /// - Attempted overflow (recipient's account over-funded), `AccountingError::AccountOverFunded`.
    pub fn transfer(
        &mut self,
        amount: Amount,
        recipient: &mut Account,
    ) -> Result<(LedgerEntry, LedgerEntry), AccountingError> {
        let amount = validate_amount(amount).map_err(|err| self.rejected("transfer", err))?;

        if amount > self.balance {
            let err = AccountingError::InsufficientFunds(self.name.clone(), amount);
            return Err(self.rejected("transfer", err));
        }

        // The recipient's side is checked before anything is debited.
        let credited = match recipient.balance.checked_add(amount) {
            Some(balance) => balance,
            None => {
                let err = AccountingError::AccountOverFunded(recipient.name.clone(), amount);
                return Err(self.rejected("transfer", err));
            }
        };

        self.balance -= amount;
        recipient.balance = credited;

        let sent = LedgerEntry::TransferOut {
            amount,
            to: recipient.name.clone(),
        };
        let received = LedgerEntry::TransferIn {
            amount,
            from: self.name.clone(),
        };
        self.history.push(sent.clone());
        recipient.history.push(received.clone());
        log::debug!(
            "Transferred {} from {} to {}.",
            amount,
            self.name,
            recipient.name
        );

        Ok((sent, received))
    }

    fn rejected(&self, operation: &str, err: AccountingError) -> AccountingError {
        log::debug!("Rejected {} on {}'s account: {}", operation, self.name, err);
        err
    }
}
