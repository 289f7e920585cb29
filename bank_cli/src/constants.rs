/// Logging filter used when `RUST_LOG` isn't set
pub const DEFAULT_LOG_FILTER: &str = "bank_cli=info";

/// The command-line argument that runs the demonstration instead of the console
pub const DEMO_ARG: &str = "demo";
