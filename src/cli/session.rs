//! Interactive menu session
//!
//! The session loads the library once when it opens, threads it through the
//! collection operations, and saves after every add or remove. Input and
//! output are generic so the whole loop can be driven from a script.

use std::io::{BufRead, Write};

use crate::book::{self, Library, NewBook};
use crate::config::ShelfConfig;
use crate::store::Store;

use super::errors::CliResult;
use super::io::{prompt, prompt_year, prompt_yes_no};
use super::render::{write_library, write_results};

/// Entries of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    View,
    Add,
    Remove,
    Search,
    SaveAndExit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 5] = [
        MenuChoice::View,
        MenuChoice::Add,
        MenuChoice::Remove,
        MenuChoice::Search,
        MenuChoice::SaveAndExit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::View => "View Library",
            MenuChoice::Add => "Add Book",
            MenuChoice::Remove => "Remove Book",
            MenuChoice::Search => "Search Book",
            MenuChoice::SaveAndExit => "Save and Exit",
        }
    }

    /// Accepts the menu number or a keyword, ignoring case.
    pub fn parse(answer: &str) -> Option<Self> {
        match answer.trim().to_ascii_lowercase().as_str() {
            "1" | "view" => Some(MenuChoice::View),
            "2" | "add" => Some(MenuChoice::Add),
            "3" | "remove" => Some(MenuChoice::Remove),
            "4" | "search" => Some(MenuChoice::Search),
            "5" | "save" | "exit" | "quit" | "q" => Some(MenuChoice::SaveAndExit),
            _ => None,
        }
    }
}

pub struct Session<R, W> {
    store: Store,
    config: ShelfConfig,
    library: Library,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Loads the library and prepares the menu. Fails if the file is corrupt
    /// or unreadable.
    pub fn open(store: Store, config: ShelfConfig, input: R, output: W) -> CliResult<Self> {
        let library = store.load()?;
        Ok(Self {
            store,
            config,
            library,
            input,
            output,
        })
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// Runs the menu until Save and Exit is chosen or input ends.
    pub fn run(&mut self) -> CliResult<()> {
        writeln!(self.output, "Personal Library Manager")?;
        loop {
            writeln!(self.output)?;
            for (i, choice) in MenuChoice::ALL.iter().enumerate() {
                writeln!(self.output, "  {}) {}", i + 1, choice.label())?;
            }

            let Some(answer) = prompt(&mut self.input, &mut self.output, "Choose an option")? else {
                return Ok(());
            };

            match MenuChoice::parse(&answer) {
                Some(MenuChoice::View) => write_library(&mut self.output, &self.library)?,
                Some(MenuChoice::Add) => self.add()?,
                Some(MenuChoice::Remove) => self.remove()?,
                Some(MenuChoice::Search) => self.search()?,
                Some(MenuChoice::SaveAndExit) => {
                    self.store.save(&self.library)?;
                    writeln!(self.output, "Your library has been saved successfully!")?;
                    return Ok(());
                }
                None => writeln!(self.output, "Unknown option '{}'.", answer.trim())?,
            }
        }
    }

    fn add(&mut self) -> CliResult<()> {
        let input = &mut self.input;
        let output = &mut self.output;

        let Some(title) = prompt(input, output, "Title")? else {
            return Ok(());
        };
        let Some(author) = prompt(input, output, "Author")? else {
            return Ok(());
        };
        let Some(year) = prompt_year(input, output, &self.config.years)? else {
            return Ok(());
        };
        let Some(genre) = prompt(input, output, "Genre")? else {
            return Ok(());
        };
        let Some(read_status) = prompt_yes_no(input, output, "Mark as read")? else {
            return Ok(());
        };

        let new_book = NewBook::new(title, author, year)
            .genre(genre)
            .read(read_status);

        match book::add(&self.library, new_book) {
            Ok(next) => {
                self.store.save(&next)?;
                self.library = next;
                if let Some(added) = self.library.books().last() {
                    writeln!(self.output, "'{}' added to your library!", added.title)?;
                }
            }
            Err(e) if !e.is_fatal() => {
                writeln!(self.output, "Title and Author fields cannot be empty!")?;
            }
            Err(e) => return Err(e.into()),
        }
        Ok(())
    }

    fn remove(&mut self) -> CliResult<()> {
        let titles: Vec<String> = book::titles(&self.library)
            .into_iter()
            .map(String::from)
            .collect();

        if titles.is_empty() {
            writeln!(self.output, "No books available to remove.")?;
            return Ok(());
        }

        for (i, title) in titles.iter().enumerate() {
            writeln!(self.output, "  {}) {}", i + 1, title)?;
        }
        let label = format!("Choose a book to remove (1-{})", titles.len());
        let Some(answer) = prompt(&mut self.input, &mut self.output, &label)? else {
            return Ok(());
        };

        let selected = answer
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| titles.get(i));
        let Some(title) = selected else {
            writeln!(self.output, "Invalid choice '{}'.", answer.trim())?;
            return Ok(());
        };

        let next = book::remove_by_title(self.library.clone(), title);
        self.store.save(&next)?;
        self.library = next;
        writeln!(self.output, "'{}' removed from your library.", title)?;
        Ok(())
    }

    fn search(&mut self) -> CliResult<()> {
        let Some(query) = prompt(&mut self.input, &mut self.output, "Enter a title or author name")?
        else {
            return Ok(());
        };
        let results = book::search(&self.library, &query);
        write_results(&mut self.output, &results)?;
        Ok(())
    }
}
