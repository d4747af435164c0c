//! Book records and the operations over a library of them
//!
//! Every operation is a pure function of the library it is given:
//! - `add` validates and appends, returning a new library
//! - `remove_by_title` drops every record with an exactly matching title
//! - `search` filters by case-insensitive substring on title or author
//!
//! Nothing here touches the filesystem; see `store` for persistence.

mod operations;
mod types;

pub use operations::{add, remove_by_title, search, titles};
pub use types::{Book, Library, NewBook};
