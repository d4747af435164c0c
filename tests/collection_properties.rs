//! Collection Operation Tests
//!
//! Behaviour of add / remove_by_title / search over the public API:
//! - add appends exactly one record, last
//! - blank title or author is rejected and changes nothing
//! - remove_by_title removes every exact match
//! - search is case-insensitive substring over title and author

use shelf::book::{add, remove_by_title, search, titles};
use shelf::{Book, Library, NewBook, ShelfErrorCode};

// =============================================================================
// Helper Functions
// =============================================================================

fn book(title: &str, author: &str, year: i32) -> Book {
    NewBook::new(title, author, year).into_book().unwrap()
}

fn shelf() -> Library {
    Library::from(vec![
        book("Dune", "Frank Herbert", 1965),
        book("The Left Hand of Darkness", "Ursula K. Le Guin", 1969),
        book("Hyperion", "Dan Simmons", 1989),
        book("Dune Messiah", "Frank Herbert", 1969),
    ])
}

fn titles_of(books: &[&Book]) -> Vec<String> {
    books.iter().map(|b| b.title.clone()).collect()
}

// =============================================================================
// Add
// =============================================================================

/// Every valid add grows the library by one and puts the book last.
#[test]
fn test_add_grows_by_one_each_time() {
    let mut library = Library::new();
    let inputs = [
        ("Dune", "Herbert"),
        ("  padded  ", "  name "),
        ("Dune", "Herbert"),
        ("x", "y"),
    ];

    for (title, author) in inputs {
        let before = library.len();
        library = add(&library, NewBook::new(title, author, 2000)).unwrap();

        assert_eq!(library.len(), before + 1);
        let last = library.books().last().unwrap();
        assert_eq!(last.title, title.trim());
        assert_eq!(last.author, author.trim());
    }
}

/// Blank title and blank author both fail and leave the library untouched.
#[test]
fn test_add_blank_fields_rejected() {
    let library = shelf();

    for new_book in [
        NewBook::new("", "Author", 2000),
        NewBook::new("Title", "", 2000),
        NewBook::new(" \t ", "Author", 2000),
        NewBook::new("", "", 2000),
    ] {
        let err = add(&library, new_book).unwrap_err();
        assert_eq!(err.code(), ShelfErrorCode::ValidationFailed);
        assert!(!err.is_fatal());
    }

    assert_eq!(library, shelf());
}

/// Genre and read status are stored as given; genre is trimmed.
#[test]
fn test_add_keeps_optional_fields() {
    let library = add(
        &Library::new(),
        NewBook::new("Dune", "Herbert", 1965)
            .genre("  Sci-Fi  ")
            .read(true),
    )
    .unwrap();

    let dune = &library.books()[0];
    assert_eq!(dune.genre, "Sci-Fi");
    assert!(dune.read_status);
    assert_eq!(dune.year, 1965);
}

// =============================================================================
// Remove
// =============================================================================

/// Duplicates are all removed, not just the first.
#[test]
fn test_remove_all_duplicates() {
    let library = Library::from(vec![
        book("A", "one", 2000),
        book("B", "two", 2001),
        book("A", "three", 2002),
    ]);

    let next = remove_by_title(library, "A");
    assert_eq!(next, Library::from(vec![book("B", "two", 2001)]));
}

/// Removing a title that is not present returns an equal library.
#[test]
fn test_remove_unknown_title_is_noop() {
    assert_eq!(remove_by_title(shelf(), "Neuromancer"), shelf());
}

/// Only exact titles match; prefixes and different case do not.
#[test]
fn test_remove_exact_match_only() {
    let next = remove_by_title(shelf(), "Dune");
    let remaining: Vec<&str> = next.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(
        remaining,
        vec!["The Left Hand of Darkness", "Hyperion", "Dune Messiah"]
    );

    assert_eq!(remove_by_title(shelf(), "DUNE"), shelf());
}

// =============================================================================
// Search
// =============================================================================

/// Empty query returns everything in original order.
#[test]
fn test_search_empty_query() {
    let library = shelf();
    let results = search(&library, "");
    assert_eq!(results.len(), library.len());
    assert_eq!(
        titles_of(&results),
        library.iter().map(|b| b.title.clone()).collect::<Vec<_>>()
    );
}

/// "Dune" matches "dune", "UN" and "DUNE".
#[test]
fn test_search_case_insensitive() {
    let library = Library::from(vec![book("Dune", "Herbert", 1965)]);
    for query in ["dune", "UN", "DUNE"] {
        assert_eq!(search(&library, query).len(), 1, "query {query:?}");
    }
}

/// Author matches count, and results keep library order.
#[test]
fn test_search_title_or_author() {
    let library = shelf();

    assert_eq!(
        titles_of(&search(&library, "herbert")),
        vec!["Dune", "Dune Messiah"]
    );
    assert_eq!(titles_of(&search(&library, "le guin")), vec!["The Left Hand of Darkness"]);
    assert_eq!(titles_of(&search(&library, "dan")), vec!["Hyperion"]);
    assert!(search(&library, "asimov").is_empty());
}

/// The remove picker lists each title once.
#[test]
fn test_titles_for_picker() {
    let library = Library::from(vec![
        book("A", "one", 2000),
        book("B", "two", 2001),
        book("A", "three", 2002),
    ]);
    assert_eq!(titles(&library), vec!["A", "B"]);
}
