//! Command-line interface: clap types, command handlers, and output
//! formatting.

pub mod commands;
pub mod context;
pub mod output;
pub mod types;

pub use context::AppContext;
pub use types::{Cli, Commands, MemberCommands, SetupAction, TeamCommands};

/// Print an error and exit non-zero. JSON mode keeps stdout machine-parsable
/// by writing the error object to stderr too.
pub fn handle_error(err: anyhow::Error, json: bool) {
    if json {
        let value = serde_json::json!({ "error": format!("{err:#}") });
        eprintln!("{value}");
    } else {
        eprintln!("Error: {err:#}");
    }
    std::process::exit(1);
}
