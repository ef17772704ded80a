//! Core domain logic for location reminders.
//! This crate owns storage, data access and screen state; the mobile shell
//! only renders it and bridges platform services.

pub mod config;
pub mod data;
pub mod db;
pub mod geofence;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod viewmodel;

pub use config::ReminderConfig;
pub use data::local::LocalReminderDataSource;
pub use data::result::{DataError, DataResult, REMINDER_NOT_FOUND_MESSAGE};
pub use data::source::ReminderDataSource;
pub use geofence::{
    handle_geofence_event, GeofenceError, GeofenceEvent, GeofenceRegistrar, GeofenceRequest,
    GeofenceTransition, ReminderNotification,
};
pub use logging::{default_log_level, init_logging, init_logging_from_config, logging_status};
pub use model::location::{PointOfInterest, SelectedLocation, DROPPED_PIN_LABEL};
pub use model::reminder::{Reminder, ReminderId, ReminderValidationError};
pub use repo::reminder_repo::{RepoError, RepoResult, ReminderStore, SqliteReminderStore};
pub use service::locator::ServiceLocator;
pub use viewmodel::{
    AuthenticationState, Destination, NavigationCommand, RemindersListViewModel, ReminderForm,
    SaveReminderViewModel, StringRes, UiEvent,
};

/// Minimal health-check API for shell integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
