//! The "Bank CLI" app's entry point.
//!
//! Runs the interactive console by default,
//! or the demonstration scenario when started with the `demo` argument.

use bank_cli::constants::{DEFAULT_LOG_FILTER, DEMO_ARG};
use bank_cli::demo::print_demo;
use bank_cli::logic::main_loop;
use bank_common::Bank;
use std::env;
use std::error::Error;

/// The "Bank CLI" app's entry point.
fn main() -> Result<(), Box<dyn Error>> {
    if env::var_os("RUST_LOG").is_none() {
        env::set_var("RUST_LOG", DEFAULT_LOG_FILTER);
    }
    pretty_env_logger::init();

    match env::args().nth(1).as_deref() {
        Some(DEMO_ARG) => print_demo()?,
        _ => main_loop(&mut Bank::new())?,
    }

    Ok(())
}
