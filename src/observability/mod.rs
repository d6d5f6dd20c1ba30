//! Observability for the post ledger
//!
//! Structured JSON logs: one line per event, written synchronously, with
//! deterministic key ordering so output is diffable.
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on execution
//! 3. No async or background threads
//! 4. Deterministic output

mod logger;

pub use logger::{Logger, Severity};
