use crate::account::Account;
use crate::errors::AccountingError;
use crate::ledger::Amount;

/// **A registry of accounts, keyed by the holder's name**
///
/// Accounts are kept in the order of their creation, and lookups
/// scan them in that order.
///
/// Names aren't required to be unique. When several accounts share a name,
/// every lookup by that name resolves to the first one created, and the
/// later ones can only be reached through [`Bank::accounts`].
///
/// The bank never changes a balance itself; it only lends out its accounts.
#[derive(Debug, Default)]
pub struct Bank {
    accounts: Vec<Account>,
}

impl Bank {
    /// **Creates a new instance without any accounts.**
    pub fn new() -> Self {
        Bank { accounts: vec![] }
    }

    /// Creates an account with the `initial_deposit` as its opening balance,
    /// registers it, and returns it.
    ///
    /// Neither the name nor the opening balance is validated,
    /// and an existing account with the same name isn't an obstacle.
    pub fn create_account(&mut self, name: &str, initial_deposit: Amount) -> &mut Account {
        log::debug!(
            r#"Creating account "{}" with opening balance {}."#,
            name,
            initial_deposit
        );
        self.accounts.push(Account::new(name, initial_deposit));
        let last = self.accounts.len() - 1;
        &mut self.accounts[last]
    }

    /// Creates an account with a zero opening balance.
    pub fn open_account(&mut self, name: &str) -> &mut Account {
        self.create_account(name, 0)
    }

    /// Finds the first account whose holder's name is exactly `name`.
    pub fn find_account(&self, name: &str) -> Option<&Account> {
        self.position(name).map(|idx| &self.accounts[idx])
    }

    /// Finds the first account whose holder's name is exactly `name`, for updating.
    pub fn find_account_mut(&mut self, name: &str) -> Option<&mut Account> {
        self.position(name).map(move |idx| &mut self.accounts[idx])
    }

    /// Retrieves the balance of an account
    ///
    /// # Errors
    /// - Account doesn't exist, `AccountingError::AccountNotFound`
    pub fn balance_of(&self, name: &str) -> Result<Amount, AccountingError> {
        self.find_account(name)
            .map(Account::check_balance)
            .ok_or_else(|| AccountingError::AccountNotFound(name.to_string()))
    }

    /// **Resolves a sender and a recipient by their names**
    ///
    /// Returns both accounts so that the sender can transfer to the recipient
    /// with [`Account::transfer`].
    ///
    /// # Errors
    /// - Sender doesn't exist, `AccountingError::AccountNotFound`;
    /// - Recipient doesn't exist, or resolves to the sender's own account,
    ///   `AccountingError::InvalidRecipient`.
    pub fn find_pair_mut(
        &mut self,
        sender: &str,
        recipient: &str,
    ) -> Result<(&mut Account, &mut Account), AccountingError> {
        let from = self
            .position(sender)
            .ok_or_else(|| AccountingError::AccountNotFound(sender.to_string()))?;
        let to = self
            .position(recipient)
            .filter(|&to| to != from)
            .ok_or_else(|| {
                log::debug!(r#"No valid recipient "{}" for "{}"."#, recipient, sender);
                AccountingError::InvalidRecipient(recipient.to_string())
            })?;

        if from < to {
            let (head, tail) = self.accounts.split_at_mut(to);
            Ok((&mut head[from], &mut tail[0]))
        } else {
            let (head, tail) = self.accounts.split_at_mut(from);
            Ok((&mut tail[0], &mut head[to]))
        }
    }

    /// All accounts, in the order of their creation
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        let idx = self.accounts.iter().position(|acc| acc.name() == name);
        if idx.is_none() {
            log::debug!(r#"Account "{}" not found."#, name);
        }
        idx
    }
}
