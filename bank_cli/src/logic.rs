use crate::demo::print_demo;
use bank_common::cli::constants::*;
use bank_common::cli::helpers::*;
use bank_common::{AccountingError, Amount, Bank, LedgerEntry};
use std::io;

/// **The interactive console**
///
/// Reads one command per line until `quit` or the end of input.
///
/// # Errors
/// Fails only if the console itself can't be read from or written to;
/// rejected operations are reported and the loop goes on.
pub fn main_loop(bank: &mut Bank) -> io::Result<()> {
    loop {
        let line = match read_from_stdin(PROMPT)? {
            Input::Line(line) => line,
            Input::Blank => continue,
            Input::Eof => break,
        };
        let words = line.split_whitespace().collect::<Vec<_>>();
        let cmd = words[0].to_lowercase();

        match cmd.as_str() {
            HELP | "h" => help(),
            OPEN | "o" => open(words, bank),
            DEPOSIT | "d" => deposit(words, bank),
            WITHDRAW | "w" => withdraw(words, bank),
            SEND | "s" => send(words, bank),
            BALANCE | "b" => print_balance(words, bank),
            ACCOUNTS | "a" => print_accounts(bank),
            HISTORY | "y" => print_history(words, bank),
            DEMO => {
                if let Err(err) = print_demo() {
                    eprintln!("[ERROR] {}", err);
                }
            }
            QUIT | "q" => break,
            _ => println!("Unrecognized command; try `help`."),
        }
    }

    Ok(())
}

/// **A human-readable status line for a recorded entry**
pub fn describe(entry: &LedgerEntry, holder: &str) -> String {
    match entry {
        LedgerEntry::Deposit { amount } => format!("Deposited {amount} into {holder}'s account."),
        LedgerEntry::Withdrawal { amount } => format!("Withdrew {amount} from {holder}'s account."),
        LedgerEntry::TransferOut { amount, to } => {
            format!("Transferred {amount} from {holder} to {to}.")
        }
        LedgerEntry::TransferIn { amount, from } => {
            format!("Received {amount} from {from} into {holder}'s account.")
        }
    }
}

/// Prints the outcome of a single-account operation.
fn report(result: Result<LedgerEntry, AccountingError>, holder: &str) {
    match result {
        Ok(entry) => println!("{}", describe(&entry, holder)),
        Err(err) => eprintln!("[ERROR] {}", err),
    }
}

/// **Open a new account**
///
/// `open 'full name' [<initial deposit>]`
///
/// The initial deposit is optional and defaults to zero.
/// A trailing number is always read as the initial deposit, so a name
/// that ends in a number has to be quoted: `open 'Agent 007'`.
/// Opening an account under an existing name is allowed,
/// but lookups will keep finding the older account.
fn open(words: Vec<&str>, bank: &mut Bank) {
    let words_len = words.len();

    if words_len < 2 {
        println!("The open command: {OPEN} 'holder full name' [<initial deposit>]");
        println!("Quote names that end in a number: {OPEN} 'Agent 007' 100");
        return;
    }

    let (name, initial) = match words[words_len - 1].parse::<Amount>() {
        Ok(initial) if words_len > 2 => (join_name(&words[1..(words_len - 1)]), initial),
        _ => (join_name(&words[1..]), 0),
    };

    if is_valid_name(&name) {
        if bank.find_account(&name).is_some() {
            println!(
                r#"[WARN] An account "{}" already exists; lookups will find the older one."#,
                name
            );
        }
        let account = bank.create_account(&name, initial);
        println!(
            "Opened {}'s account with balance {}.",
            account.name(),
            account.check_balance()
        );
    }
}

/// **Deposit funds to an account**
///
/// `deposit 'full name' <amount>`
///
/// The account needs to exist in advance.
/// Prints a success or an error message depending on the status of the
/// transaction; the account records the transaction in the success case.
fn deposit(words: Vec<&str>, bank: &mut Bank) {
    let words_len = words.len();

    if words_len < 3 {
        println!("The deposit command: {DEPOSIT} 'holder full name' <amount>");
        return;
    }

    let name = join_name(&words[1..(words_len - 1)]);

    if let Some(amount) = parse_amount(words[words_len - 1]) {
        if is_valid_name(&name) {
            match bank.find_account_mut(&name) {
                Some(account) => report(account.deposit(amount), &name),
                None => eprintln!("[ERROR] {}", AccountingError::AccountNotFound(name)),
            }
        }
    }
}

/// **Withdraw funds from an account**
///
/// `withdraw 'full name' <amount>`
///
/// Potential errors are if the account doesn't exist, if the amount isn't
/// positive, or if the account's balance doesn't cover it.
fn withdraw(words: Vec<&str>, bank: &mut Bank) {
    let words_len = words.len();

    if words_len < 3 {
        println!("The withdraw command: {WITHDRAW} 'holder full name' <amount>");
        return;
    }

    let name = join_name(&words[1..(words_len - 1)]);

    if let Some(amount) = parse_amount(words[words_len - 1]) {
        if is_valid_name(&name) {
            match bank.find_account_mut(&name) {
                Some(account) => report(account.withdraw(amount), &name),
                None => eprintln!("[ERROR] {}", AccountingError::AccountNotFound(name)),
            }
        }
    }
}

/// **Send funds from one account to another account**
///
/// `send 'sender full name' -- 'recipient full name' <amount>`
///
/// Both accounts need to exist in advance, and they need to be different.
/// Either both accounts record the transfer, or neither does.
fn send(words: Vec<&str>, bank: &mut Bank) {
    let words_len = words.len();

    let to_pos = match words.iter().position(|&w| w == SEPARATOR) {
        Some(pos) if words_len >= 4 && pos < words_len - 1 => pos,
        _ => {
            println!(
                "The send command: {SEND} 'sender full name' {SEPARATOR} \
                 'recipient full name' <amount>"
            );
            return;
        }
    };

    let sender = join_name(&words[1..to_pos]);
    let recipient = join_name(&words[(to_pos + 1)..(words_len - 1)]);

    if let Some(amount) = parse_amount(words[words_len - 1]) {
        if is_valid_name(&sender) && is_valid_name(&recipient) {
            let result = bank
                .find_pair_mut(&sender, &recipient)
                .and_then(|(from, to)| from.transfer(amount, to));
            match result {
                Ok((sent, _)) => println!("{}", describe(&sent, &sender)),
                Err(err) => eprintln!("[ERROR] {}", err),
            }
        }
    }
}

/// **Prints a single requested account's balance**
fn print_balance(words: Vec<&str>, bank: &Bank) {
    if words.len() < 2 {
        println!("The balance command: {BALANCE} 'holder full name'");
        return;
    }

    let name = join_name(&words[1..]);

    if is_valid_name(&name) {
        match bank.balance_of(&name) {
            Ok(balance) => println!("{}'s current balance: {}", name, balance),
            Err(err) => eprintln!("[ERROR] {}", err),
        }
    }
}

/// **Prints all accounts and their balances**
fn print_accounts(bank: &Bank) {
    if bank.is_empty() {
        println!("There are no accounts.");
        return;
    }

    for account in bank.accounts() {
        println!("{}: {}", account.name(), account.check_balance());
    }
}

/// **Prints a single account's transaction history, oldest first**
fn print_history(words: Vec<&str>, bank: &Bank) {
    if words.len() < 2 {
        println!("The history command: {HISTORY} 'holder full name'");
        return;
    }

    let name = join_name(&words[1..]);

    if is_valid_name(&name) {
        match bank.find_account(&name) {
            Some(account) if account.history().is_empty() => {
                println!("{}'s account has no transactions.", name)
            }
            Some(account) => {
                for (idx, entry) in account.history().iter().enumerate() {
                    println!("{:>4}. {}", idx + 1, entry);
                }
            }
            None => eprintln!("[ERROR] {}", AccountingError::AccountNotFound(name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bank() -> Bank {
        let mut bank = Bank::new();
        bank.create_account("John Doe", 1000);
        bank.create_account("Jane Doe", 500);
        bank
    }

    #[test]
    fn test_describe() {
        assert_eq!(
            "Deposited 500 into John Doe's account.",
            describe(&LedgerEntry::Deposit { amount: 500 }, "John Doe")
        );
        assert_eq!(
            "Transferred 300 from John Doe to Jane Doe.",
            describe(
                &LedgerEntry::TransferOut {
                    amount: 300,
                    to: "Jane Doe".to_string()
                },
                "John Doe"
            )
        );
    }

    #[test]
    fn test_open() {
        let mut bank = Bank::new();

        open(vec!["open", "'John", "Doe'", "1000"], &mut bank);
        open(vec!["open", "Jane", "Doe"], &mut bank);
        open(vec!["open"], &mut bank);

        assert_eq!(2, bank.len());
        assert_eq!(Ok(1000), bank.balance_of("John Doe"));
        assert_eq!(Ok(0), bank.balance_of("Jane Doe"));
    }

    #[test]
    fn test_deposit_and_withdraw() {
        let mut bank = bank();

        deposit(vec!["deposit", "John", "Doe", "500"], &mut bank);
        withdraw(vec!["withdraw", "\"John", "Doe\"", "200"], &mut bank);
        assert_eq!(Ok(1300), bank.balance_of("John Doe"));

        deposit(vec!["deposit", "John", "Doe", "-5"], &mut bank);
        withdraw(vec!["withdraw", "John", "Doe", "5000"], &mut bank);
        deposit(vec!["deposit", "Nobody", "5"], &mut bank);
        deposit(vec!["deposit", "John", "Doe", "five"], &mut bank);
        assert_eq!(Ok(1300), bank.balance_of("John Doe"));
        assert_eq!(2, bank.find_account("John Doe").unwrap().history().len());
    }

    #[test]
    fn test_send() {
        let mut bank = bank();

        send(vec!["send", "John", "Doe", "--", "Jane", "Doe", "300"], &mut bank);
        assert_eq!(Ok(700), bank.balance_of("John Doe"));
        assert_eq!(Ok(800), bank.balance_of("Jane Doe"));

        send(vec!["send", "John", "Doe", "--", "Nobody", "300"], &mut bank);
        send(vec!["send", "John", "Doe", "--", "John", "Doe", "300"], &mut bank);
        send(vec!["send", "John", "Doe", "Jane", "Doe", "300"], &mut bank);
        send(vec!["send", "John", "Doe", "--"], &mut bank);
        assert_eq!(Ok(700), bank.balance_of("John Doe"));
        assert_eq!(Ok(800), bank.balance_of("Jane Doe"));
    }

    #[test]
    fn test_open_name_ending_in_a_number() {
        let mut bank = Bank::new();

        open(vec!["open", "Agent", "007"], &mut bank);
        open(vec!["open", "'Agent", "007'"], &mut bank);
        open(vec!["open", "'Agent", "007'", "100"], &mut bank);

        assert_eq!(3, bank.len());
        assert_eq!("Agent", bank.accounts()[0].name());
        assert_eq!(7, bank.accounts()[0].check_balance());
        assert_eq!("Agent 007", bank.accounts()[1].name());
        assert_eq!(0, bank.accounts()[1].check_balance());
        assert_eq!("Agent 007", bank.accounts()[2].name());
        assert_eq!(100, bank.accounts()[2].check_balance());
    }

    #[test]
    fn test_print_handlers_leave_the_bank_untouched() {
        let empty = Bank::new();
        print_accounts(&empty);
        print_balance(vec!["balance", "Nobody"], &empty);
        print_history(vec!["history", "Nobody"], &empty);
        assert!(empty.is_empty());

        let mut bank = bank();
        print_history(vec!["history", "Jane", "Doe"], &bank);
        print_balance(vec!["balance"], &bank);
        print_history(vec!["history"], &bank);

        deposit(vec!["deposit", "John", "Doe", "500"], &mut bank);
        print_accounts(&bank);
        print_balance(vec!["balance", "'John", "Doe'"], &bank);
        print_history(vec!["history", "John", "Doe"], &bank);

        assert_eq!(Ok(1500), bank.balance_of("John Doe"));
        assert_eq!(1, bank.find_account("John Doe").unwrap().history().len());
        assert!(bank.find_account("Jane Doe").unwrap().history().is_empty());
    }
}
