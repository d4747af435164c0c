//! CLI command implementations
//!
//! Every command loads the library from the store and runs one collection
//! operation; add and remove save the result. The interactive menu is the
//! default command.

use std::io::{self, BufRead, Write};

use crate::book::{self, NewBook};
use crate::config::ShelfConfig;
use crate::observability::{Logger, Severity};
use crate::store::Store;

use super::args::{Cli, Command};
use super::errors::CliResult;
use super::render::{write_library, write_results};
use super::session::Session;

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    if cli.verbose {
        Logger::set_min_severity(Severity::Trace);
    }

    let config = ShelfConfig::default();
    run_command(cli.command.unwrap_or(Command::Menu), &config)
}

/// Run a command against the library file named by `config`
pub fn run_command(cmd: Command, config: &ShelfConfig) -> CliResult<()> {
    let store = Store::from_config(config);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cmd {
        Command::Menu => {
            let stdin = io::stdin();
            menu(store, config.clone(), stdin.lock(), out)
        }
        Command::View => view(&store, &mut out),
        Command::Add {
            title,
            author,
            year,
            genre,
            read,
        } => {
            let new_book = NewBook::new(title, author, year).genre(genre).read(read);
            add(&store, new_book, &mut out)
        }
        Command::Remove { title } => remove(&store, &title, &mut out),
        Command::Search { query } => search(&store, &query, &mut out),
    }
}

/// Open the interactive menu
pub fn menu<R: BufRead, W: Write>(
    store: Store,
    config: ShelfConfig,
    input: R,
    output: W,
) -> CliResult<()> {
    Session::open(store, config, input, output)?.run()
}

/// Print every book
pub fn view<W: Write>(store: &Store, out: &mut W) -> CliResult<()> {
    let library = store.load()?;
    write_library(out, &library)?;
    Ok(())
}

/// Add one book and save
///
/// A blank title or author is returned as an error and nothing is written.
pub fn add<W: Write>(store: &Store, new_book: NewBook, out: &mut W) -> CliResult<()> {
    let library = store.load()?;
    let library = book::add(&library, new_book)?;
    store.save(&library)?;

    if let Some(added) = library.books().last() {
        writeln!(out, "'{}' added to your library!", added.title)?;
    }
    Ok(())
}

/// Remove every book titled `title` and save
pub fn remove<W: Write>(store: &Store, title: &str, out: &mut W) -> CliResult<()> {
    let library = store.load()?;
    let before = library.len();
    let library = book::remove_by_title(library, title);
    store.save(&library)?;

    match before - library.len() {
        0 => writeln!(out, "No book titled '{}' in your library.", title)?,
        n => writeln!(out, "'{}' removed from your library ({} book(s)).", title, n)?,
    }
    Ok(())
}

/// Print books whose title or author contains `query`
pub fn search<W: Write>(store: &Store, query: &str, out: &mut W) -> CliResult<()> {
    let library = store.load()?;
    let results = book::search(&library, query);
    write_results(out, &results)?;
    Ok(())
}
