//! CLI module for shelf
//!
//! Provides the terminal front end:
//! - menu: interactive View / Add / Remove / Search / Save and Exit loop
//! - view, add, remove, search: one-shot commands over the same core

mod args;
mod commands;
mod errors;
mod io;
mod render;
mod session;

pub use args::{Cli, Command};
pub use commands::{add, menu, remove, run, run_command, search, view};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use session::{MenuChoice, Session};
