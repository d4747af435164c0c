//! CLI argument definitions using clap
//!
//! Commands:
//! - shelf [menu]
//! - shelf view
//! - shelf add <TITLE> <AUTHOR> <YEAR> [--genre <GENRE>] [--read]
//! - shelf remove <TITLE>
//! - shelf search [QUERY]
//!
//! The library file location is not an argument.

use clap::{Parser, Subcommand};

use crate::config::{MAX_YEAR, MIN_YEAR};

/// shelf - manage your personal book collection
#[derive(Parser, Debug)]
#[command(name = "shelf")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Write trace-level logs to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open the interactive menu (default)
    Menu,

    /// List every book in the library
    View,

    /// Add a book and save the library
    Add {
        /// Book title
        title: String,

        /// Book author
        author: String,

        /// Publication year
        #[arg(value_parser = clap::value_parser!(i32).range(i64::from(MIN_YEAR)..=i64::from(MAX_YEAR)))]
        year: i32,

        /// Genre (optional)
        #[arg(long, default_value = "")]
        genre: String,

        /// Mark the book as read
        #[arg(long)]
        read: bool,
    },

    /// Remove every book with this exact title and save the library
    Remove {
        /// Title to remove (case-sensitive)
        title: String,
    },

    /// Find books whose title or author contains the query
    Search {
        /// Text to look for; empty lists everything
        #[arg(default_value = "")]
        query: String,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
