//! Observability for shelf
//!
//! Structured JSON log lines on stderr. Logging is read-only: it never
//! changes the outcome of the operation that emits it.
//!
//! # Usage
//!
//! ```ignore
//! use shelf::observability::{Logger, Severity};
//!
//! Logger::set_min_severity(Severity::Trace);
//! Logger::info("LIBRARY_SAVED", &[("books", "42")]);
//! ```

mod logger;

pub use logger::{Logger, Severity};
