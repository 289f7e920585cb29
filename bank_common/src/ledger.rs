//! Ledger entries: immutable records of completed account operations

use serde::{Deserialize, Serialize};
use std::fmt;

/// A currency amount in a single, unadorned unit
///
/// Signed, so that non-positive inputs can be expressed and rejected.
pub type Amount = i64;

/// The kind of a [`LedgerEntry`]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EntryKind {
    Deposit,
    Withdrawal,
    TransferOut,
    TransferIn,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            EntryKind::Deposit => "Deposit",
            EntryKind::Withdrawal => "Withdrawal",
            EntryKind::TransferOut => "TransferOut",
            EntryKind::TransferIn => "TransferIn",
        };
        f.write_str(kind)
    }
}

/// **A record of one completed operation on an account**
///
/// Entries are appended to an account's history in chronological order
/// and are never changed afterwards.
///
/// The counterparty's name is carried only by the transfer variants:
/// the recipient for [`LedgerEntry::TransferOut`],
/// and the sender for [`LedgerEntry::TransferIn`].
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "transactionType")]
pub enum LedgerEntry {
    Deposit { amount: Amount },
    Withdrawal { amount: Amount },
    TransferOut { amount: Amount, to: String },
    TransferIn { amount: Amount, from: String },
}

impl LedgerEntry {
    pub fn kind(&self) -> EntryKind {
        match self {
            LedgerEntry::Deposit { .. } => EntryKind::Deposit,
            LedgerEntry::Withdrawal { .. } => EntryKind::Withdrawal,
            LedgerEntry::TransferOut { .. } => EntryKind::TransferOut,
            LedgerEntry::TransferIn { .. } => EntryKind::TransferIn,
        }
    }

    pub fn amount(&self) -> Amount {
        match self {
            LedgerEntry::Deposit { amount }
            | LedgerEntry::Withdrawal { amount }
            | LedgerEntry::TransferOut { amount, .. }
            | LedgerEntry::TransferIn { amount, .. } => *amount,
        }
    }

    /// The other party's name, for transfers only
    pub fn counterparty(&self) -> Option<&str> {
        match self {
            LedgerEntry::TransferOut { to, .. } => Some(to),
            LedgerEntry::TransferIn { from, .. } => Some(from),
            LedgerEntry::Deposit { .. } | LedgerEntry::Withdrawal { .. } => None,
        }
    }
}

impl fmt::Display for LedgerEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedgerEntry::TransferOut { amount, to } => {
                write!(f, "{} {} -> {}", self.kind(), amount, to)
            }
            LedgerEntry::TransferIn { amount, from } => {
                write!(f, "{} {} <- {}", self.kind(), amount, from)
            }
            _ => write!(f, "{} {}", self.kind(), self.amount()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counterparty_only_for_transfers() {
        assert_eq!(None, LedgerEntry::Deposit { amount: 5 }.counterparty());
        assert_eq!(None, LedgerEntry::Withdrawal { amount: 5 }.counterparty());
        assert_eq!(
            Some("Bob"),
            LedgerEntry::TransferOut {
                amount: 5,
                to: "Bob".to_string()
            }
            .counterparty()
        );
        assert_eq!(
            Some("Alice"),
            LedgerEntry::TransferIn {
                amount: 5,
                from: "Alice".to_string()
            }
            .counterparty()
        );
    }

    #[test]
    fn display() {
        assert_eq!("Deposit 500", LedgerEntry::Deposit { amount: 500 }.to_string());
        assert_eq!(
            "Withdrawal 200",
            LedgerEntry::Withdrawal { amount: 200 }.to_string()
        );
        assert_eq!(
            "TransferOut 300 -> Jane Doe",
            LedgerEntry::TransferOut {
                amount: 300,
                to: "Jane Doe".to_string()
            }
            .to_string()
        );
        assert_eq!(
            "TransferIn 300 <- John Doe",
            LedgerEntry::TransferIn {
                amount: 300,
                from: "John Doe".to_string()
            }
            .to_string()
        );
    }

    #[test]
    fn json_is_tagged_by_transaction_type() {
        let entry = LedgerEntry::TransferOut {
            amount: 300,
            to: "Jane Doe".to_string(),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            serde_json::json!({"transactionType": "TransferOut", "amount": 300, "to": "Jane Doe"}),
            json
        );

        let back: LedgerEntry = serde_json::from_value(json).unwrap();
        assert_eq!(entry, back);
        assert_eq!(EntryKind::TransferOut, back.kind());
    }
}
