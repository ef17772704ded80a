//! View-models driving the reminder screens.
//!
//! # Responsibility
//! - Hold observable UI state (`tokio::sync::watch`) and one-shot UI events
//!   (`tokio::sync::broadcast`).
//! - Orchestrate load, validation and save flows over `ReminderDataSource`.
//!
//! # Invariants
//! - `show_loading` always returns to `false` once a flow finishes.
//! - View-models never touch SQLite directly.

pub mod auth;
pub mod base;
pub mod list;
pub mod save;
pub mod strings;

pub use auth::AuthenticationState;
pub use base::{BaseViewModel, Destination, NavigationCommand, UiEvent};
pub use list::RemindersListViewModel;
pub use save::{ReminderForm, SaveReminderViewModel};
pub use strings::StringRes;
