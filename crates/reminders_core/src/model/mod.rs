//! Domain model for location reminders.
//!
//! # Responsibility
//! - Define the reminder record shared by store, data source and view-models.
//! - Describe picked map locations before they become reminder fields.
//!
//! # Invariants
//! - Every reminder is identified by a stable string `ReminderId`.
//! - Latitude and longitude are set together or not at all.

pub mod location;
pub mod reminder;
