//! shelf CLI entry point
//!
//! Parses arguments and dispatches through `cli::run`, prints any error to
//! stderr and exits non-zero on failure. No state lives here.

use shelf::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
