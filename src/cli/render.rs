//! Plain-text rendering of books for the terminal

use std::io::{self, Write};

use crate::book::{Book, Library};

const HEADERS: [&str; 5] = ["Title", "Author", "Year", "Genre", "Status"];

pub fn status_badge(book: &Book) -> &'static str {
    if book.read_status {
        "Read"
    } else {
        "Unread"
    }
}

/// One card per book followed by a read/unread summary.
pub fn write_library<W: Write>(out: &mut W, library: &Library) -> io::Result<()> {
    if library.is_empty() {
        return writeln!(out, "No books in your library yet. Add some from the menu!");
    }

    writeln!(out, "Your Book Collection")?;
    writeln!(out)?;
    for book in library {
        write_book(out, book)?;
        writeln!(out, "---")?;
    }
    writeln!(
        out,
        "{} book(s): {} read, {} unread",
        library.len(),
        library.read_count(),
        library.unread_count()
    )
}

pub fn write_book<W: Write>(out: &mut W, book: &Book) -> io::Result<()> {
    writeln!(out, "Title:  {}", book.title)?;
    writeln!(out, "Author: {}", book.author)?;
    writeln!(out, "Year:   {}", book.year)?;
    writeln!(out, "Genre:  {}", book.genre)?;
    writeln!(out, "Status: {}", status_badge(book))
}

/// Search results as an aligned table, or a notice when there are none.
pub fn write_results<W: Write>(out: &mut W, results: &[&Book]) -> io::Result<()> {
    if results.is_empty() {
        return writeln!(out, "No books found matching your search.");
    }

    writeln!(out, "Found {} matching result(s):", results.len())?;

    let rows: Vec<[String; 5]> = results
        .iter()
        .map(|book| {
            [
                book.title.clone(),
                book.author.clone(),
                book.year.to_string(),
                book.genre.clone(),
                status_badge(book).to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    write_row(out, &HEADERS.map(String::from), &widths)?;
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    writeln!(out, "{}", rule.join("-+-"))?;
    for row in &rows {
        write_row(out, row, &widths)?;
    }
    Ok(())
}

fn write_row<W: Write>(out: &mut W, cells: &[String; 5], widths: &[usize; 5]) -> io::Result<()> {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect();
    writeln!(out, "{}", padded.join(" | ").trim_end())
}
