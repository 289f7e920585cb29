//! Helper functions for the CLI app

use crate::cli::constants::*;
use crate::errors::HOLDER_NAME_NOT_VALID_MSG;
use crate::ledger::Amount;
use crate::validation;
use std::io::{self, stdin, stdout, Write};

/// One line of user input
#[derive(Debug, PartialEq)]
pub enum Input {
    /// A non-blank line
    Line(String),
    /// A blank line, to be ignored
    Blank,
    /// The input stream is closed
    Eof,
}

/// **Contains full variants of all existing commands.**
///
/// Wrapped by `help()` so we can unit-test the contents,
/// so that we don't forget to include a newly-added command to help.
fn help_contents_full() -> String {
    format!(
        "{HELP} {OPEN} {DEPOSIT} {WITHDRAW} {SEND} {BALANCE} {ACCOUNTS} {HISTORY} {DEMO} {QUIT}"
    )
}

/// **Contains short variants of all existing commands.**
fn help_contents_short() -> String {
    "h o d w s b a y demo q".to_string()
}

/// **Prints all existing commands in their full and short variants.**
pub fn help() {
    println!("{}", help_contents_full());
    println!("{}", help_contents_short());
}

/// **Reads standard input into a line.**
///
/// Signals a blank line so we can ignore it (in the main loop),
/// and the end of input so we can stop.
///
/// # Errors
/// Fails in case it can't write `label` to `stdout`, flush it,
/// or read from `stdin`.
pub fn read_from_stdin(label: &str) -> io::Result<Input> {
    let mut lock = stdout().lock();
    write!(lock, "\n{label}")?;
    lock.flush()?;

    let mut line = String::new();
    if stdin().read_line(&mut line)? == 0 {
        return Ok(Input::Eof);
    }

    if line.trim().is_empty() {
        Ok(Input::Blank)
    } else {
        Ok(Input::Line(line))
    }
}

/// **Basic input validation for an account holder's name**
///
/// Checks for:
/// - An empty string.
pub fn is_valid_name(name: &str) -> bool {
    match validation::is_valid_name(name) {
        Some(msg) => {
            eprintln!(
                "[ERROR] {}: \"{}\". {}",
                HOLDER_NAME_NOT_VALID_MSG, name, msg
            );
            false
        }
        None => true,
    }
}

/// **Joins words into a holder's name**
///
/// The name can consist of multiple words.
/// We can wrap the name in single or double quotes,
/// but we don't have to use any quotes at all.
pub fn join_name(words: &[&str]) -> String {
    words
        .join(" ")
        .trim_matches(|c| c == '\'' || c == '\"')
        .trim()
        .to_string()
}

/// Parses an amount, printing an informative message if that isn't possible.
///
/// Negative numbers and zero are parsed fine;
/// it is up to the account to reject them.
pub fn parse_amount(word: &str) -> Option<Amount> {
    match word.parse::<Amount>() {
        Ok(amount) => Some(amount),
        Err(_err) => {
            cannot_parse_number(word);
            None
        }
    }
}

/// Prints an error message about not being able to parse
/// a string into an integer, so that our users can get a
/// more informative message than the provided generic message
/// that comes from the standard library, and which is:
/// "invalid digit found in string".
pub fn cannot_parse_number(word: &str) {
    eprintln!(
        "[ERROR] Only integer numbers are allowed as the amount; you provided '{}'.",
        word
    );
}
