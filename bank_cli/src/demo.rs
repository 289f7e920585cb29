//! The demonstration scenario
//!
//! Two accounts are opened, one of them takes a deposit and a withdrawal,
//! and then sends money to the other one.

use crate::logic::describe;
use bank_common::{AccountingError, Amount, Bank, LedgerEntry};
use serde::Serialize;
use std::error::Error;

const JOHN: &str = "John Doe";
const JANE: &str = "Jane Doe";

/// Final balances and histories of both accounts in the scenario
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoReport {
    pub john_final_balance: Amount,
    pub jane_final_balance: Amount,
    pub john_transaction_history: Vec<LedgerEntry>,
    pub jane_transaction_history: Vec<LedgerEntry>,
}

/// Runs the scenario, logging a status line for every step.
pub fn run_demo() -> Result<DemoReport, AccountingError> {
    let mut bank = Bank::new();

    bank.create_account(JOHN, 1000);
    bank.create_account(JANE, 500);
    log::info!("Accounts created: {:?}", bank.accounts());

    let (john, jane) = bank.find_pair_mut(JOHN, JANE)?;

    let deposited = john.deposit(500)?;
    log::info!("{}", describe(&deposited, JOHN));
    let withdrawn = john.withdraw(200)?;
    log::info!("{}", describe(&withdrawn, JOHN));
    let (sent, _) = john.transfer(300, jane)?;
    log::info!("{}", describe(&sent, JOHN));

    let report = DemoReport {
        john_final_balance: john.check_balance(),
        jane_final_balance: jane.check_balance(),
        john_transaction_history: john.history().to_vec(),
        jane_transaction_history: jane.history().to_vec(),
    };
    log::info!("{}'s current balance: {}", JOHN, report.john_final_balance);
    log::info!("{}'s current balance: {}", JANE, report.jane_final_balance);

    Ok(report)
}

/// Runs the scenario and prints its report as JSON.
pub fn print_demo() -> Result<(), Box<dyn Error>> {
    let report = run_demo()?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn final_balances_and_histories() {
        let report = run_demo().unwrap();

        assert_eq!(1000, report.john_final_balance);
        assert_eq!(800, report.jane_final_balance);
        assert_eq!(
            vec![
                LedgerEntry::Deposit { amount: 500 },
                LedgerEntry::Withdrawal { amount: 200 },
                LedgerEntry::TransferOut {
                    amount: 300,
                    to: JANE.to_string()
                },
            ],
            report.john_transaction_history
        );
        assert_eq!(
            vec![LedgerEntry::TransferIn {
                amount: 300,
                from: JOHN.to_string()
            }],
            report.jane_transaction_history
        );
    }

    #[test]
    fn scenario_runs_with_logging_off() {
        log::set_max_level(log::LevelFilter::Off);

        let report = run_demo().unwrap();

        assert_eq!(1000, report.john_final_balance);
        assert_eq!(800, report.jane_final_balance);
        assert_eq!(3, report.john_transaction_history.len());
    }

    #[test]
    fn report_json_shape() {
        let json = serde_json::to_value(run_demo().unwrap()).unwrap();

        assert_eq!(Some(1000), json["johnFinalBalance"].as_i64());
        assert_eq!(Some(800), json["janeFinalBalance"].as_i64());
        assert_eq!(3, json["johnTransactionHistory"].as_array().unwrap().len());
        assert_eq!(
            Some("TransferIn"),
            json["janeTransactionHistory"][0]["transactionType"].as_str()
        );
        assert_eq!(Some(JOHN), json["janeTransactionHistory"][0]["from"].as_str());
    }
}
