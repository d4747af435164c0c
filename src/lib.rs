//! shelf - a personal book collection manager
//!
//! The whole library lives in memory as a [`book::Library`] value and is
//! persisted wholesale to one JSON file by [`store::Store`]. Every operation
//! takes the library explicitly and returns the next one; there is no global
//! state.

pub mod book;
pub mod cli;
pub mod config;
pub mod errors;
pub mod observability;
pub mod store;

pub use book::{Book, Library, NewBook};
pub use config::ShelfConfig;
pub use errors::{ShelfError, ShelfErrorCode, ShelfResult};
pub use store::Store;
