//! Book record and library types
//!
//! The serialized form of a `Library` is a bare JSON array of book objects
//! with exactly the fields `title`, `author`, `year`, `genre`, `read_status`.

use serde::{Deserialize, Serialize};

use crate::errors::{ShelfError, ShelfResult};

/// A single book in the collection.
///
/// Unknown keys are rejected on load so a later save cannot drop them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub year: i32,
    /// May be empty.
    #[serde(default)]
    pub genre: String,
    pub read_status: bool,
}

/// Unvalidated input for a new book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub year: i32,
    pub genre: String,
    pub read_status: bool,
}

impl NewBook {
    /// Creates input with no genre, marked unread.
    pub fn new(title: impl Into<String>, author: impl Into<String>, year: i32) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year,
            genre: String::new(),
            read_status: false,
        }
    }

    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = genre.into();
        self
    }

    pub fn read(mut self, read_status: bool) -> Self {
        self.read_status = read_status;
        self
    }

    /// Trims the text fields and checks that title and author are present.
    ///
    /// Title is checked before author, so a form with both blank reports
    /// the title.
    pub fn into_book(self) -> ShelfResult<Book> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ShelfError::blank_field("title"));
        }
        let author = self.author.trim();
        if author.is_empty() {
            return Err(ShelfError::blank_field("author"));
        }

        Ok(Book {
            title: title.to_string(),
            author: author.to_string(),
            year: self.year,
            genre: self.genre.trim().to_string(),
            read_status: self.read_status,
        })
    }
}

/// The whole collection, in insertion order.
///
/// Duplicate titles are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Library {
    books: Vec<Book>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Book> {
        self.books.iter()
    }

    /// Number of books marked as read.
    pub fn read_count(&self) -> usize {
        self.books.iter().filter(|b| b.read_status).count()
    }

    pub fn unread_count(&self) -> usize {
        self.len() - self.read_count()
    }

    pub(crate) fn push(&mut self, book: Book) {
        self.books.push(book);
    }

    pub(crate) fn retain<F: FnMut(&Book) -> bool>(&mut self, keep: F) {
        self.books.retain(keep);
    }
}

impl From<Vec<Book>> for Library {
    fn from(books: Vec<Book>) -> Self {
        Self { books }
    }
}

impl<'a> IntoIterator for &'a Library {
    type Item = &'a Book;
    type IntoIter = std::slice::Iter<'a, Book>;

    fn into_iter(self) -> Self::IntoIter {
        self.books.iter()
    }
}
