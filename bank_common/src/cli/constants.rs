/// CLI Commands

pub const HELP: &str = "help";
pub const OPEN: &str = "open";
pub const DEPOSIT: &str = "deposit";
pub const WITHDRAW: &str = "withdraw";
pub const SEND: &str = "send";
pub const BALANCE: &str = "balance";
pub const ACCOUNTS: &str = "accounts";
pub const HISTORY: &str = "history";
pub const DEMO: &str = "demo";
pub const QUIT: &str = "quit";

/// Various CLI constants

pub const PROMPT: &str = "> ";
pub const SEPARATOR: &str = "--";
