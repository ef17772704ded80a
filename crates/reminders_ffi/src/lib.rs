//! Flutter-facing bridge over `reminders_core`.

pub mod api;
