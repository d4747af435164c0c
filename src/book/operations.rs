//! Collection operations
//!
//! Each function receives the library explicitly and hands back the result;
//! callers decide when to persist.

use crate::errors::ShelfResult;
use crate::observability::Logger;

use super::types::{Book, Library, NewBook};

/// Validates `new_book` and returns a library with it appended last.
///
/// On a validation failure the error is returned and `library` is left as it
/// was. No duplicate check is made.
pub fn add(library: &Library, new_book: NewBook) -> ShelfResult<Library> {
    let book = match new_book.into_book() {
        Ok(book) => book,
        Err(e) => {
            Logger::trace("BOOK_REJECTED", &[("reason", e.to_string().as_str())]);
            return Err(e);
        }
    };

    Logger::info(
        "BOOK_ADDED",
        &[("title", book.title.as_str()), ("author", book.author.as_str())],
    );

    let mut next = library.clone();
    next.push(book);
    Ok(next)
}

/// Drops every book whose title equals `title` exactly (case-sensitive).
///
/// All matches go, not just the first. No match returns the library as is.
pub fn remove_by_title(mut library: Library, title: &str) -> Library {
    let before = library.len();
    library.retain(|book| book.title != title);

    let removed = (before - library.len()).to_string();
    Logger::info("BOOKS_REMOVED", &[("count", removed.as_str()), ("title", title)]);

    library
}

/// Books whose title or author contains `query`, ignoring case, in library
/// order. An empty query matches everything.
pub fn search<'a>(library: &'a Library, query: &str) -> Vec<&'a Book> {
    let needle = query.to_lowercase();
    let results: Vec<&Book> = library
        .iter()
        .filter(|book| {
            book.title.to_lowercase().contains(&needle)
                || book.author.to_lowercase().contains(&needle)
        })
        .collect();

    let matches = results.len().to_string();
    Logger::trace("SEARCH_COMPLETE", &[("matches", matches.as_str()), ("query", query)]);

    results
}

/// Distinct titles in order of first appearance.
pub fn titles(library: &Library) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for book in library {
        if !seen.contains(&book.title.as_str()) {
            seen.push(&book.title);
        }
    }
    seen
}
