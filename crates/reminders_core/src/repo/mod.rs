//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the reminder store contract.
//! - Isolate SQLite query details from data-source and view-model code.
//!
//! # Invariants
//! - Writes call `Reminder::validate()` before any SQL mutation.
//! - Absence is reported as `None`, never as an error.

pub mod reminder_repo;
