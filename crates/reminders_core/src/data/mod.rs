//! Data-source layer between view-models and the reminder store.
//!
//! # Responsibility
//! - Expose an async, storage-agnostic reminder API.
//! - Translate store outcomes into tagged `DataResult` values.
//!
//! # Invariants
//! - Read calls never panic or raise; failures become `DataResult::Error`.
//! - Blocking SQLite work never runs on the caller's async task.

pub mod local;
pub mod result;
pub mod source;
