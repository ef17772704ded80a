//! Process-wide service locator for the reminder data source.
//!
//! # Responsibility
//! - Lazily open one store and one data source per process.
//! - Let tests inject a fake data source or reset to a fresh store.
//!
//! # Invariants
//! - Construction and reset run under the same lock, so concurrent first
//!   access never opens the database twice.
//! - After `reset_repository` the next access re-creates both instances.

use crate::config::ReminderConfig;
use crate::data::local::LocalReminderDataSource;
use crate::data::source::ReminderDataSource;
use crate::db::{open_db, DbError};
use crate::repo::reminder_repo::{RepoResult, ReminderStore, SqliteReminderStore};
use log::{info, warn};
use once_cell::sync::Lazy;
use std::sync::{Arc, Mutex, MutexGuard};

static GLOBAL_LOCATOR: Lazy<ServiceLocator> = Lazy::new(ServiceLocator::new);

#[derive(Default)]
struct LocatorState {
    store: Option<Arc<SqliteReminderStore>>,
    data_source: Option<Arc<dyn ReminderDataSource>>,
}

#[derive(Default)]
pub struct ServiceLocator {
    state: Mutex<LocatorState>,
}

impl ServiceLocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The locator shared by the FFI and CLI entry points.
    pub fn global() -> &'static ServiceLocator {
        &GLOBAL_LOCATOR
    }

    /// Returns the shared data source, opening the database on first use.
    pub fn provide_reminder_data_source(
        &self,
        config: &ReminderConfig,
    ) -> Result<Arc<dyn ReminderDataSource>, DbError> {
        let mut state = self.lock();
        if let Some(data_source) = &state.data_source {
            return Ok(Arc::clone(data_source));
        }

        let store = match &state.store {
            Some(store) => Arc::clone(store),
            None => {
                let conn = open_db(config.db_path()).map_err(|err| {
                    warn!(
                        "event=locator_provide module=service status=error path={} error={err}",
                        err.path().map_or_else(String::new, |p| p.display().to_string())
                    );
                    err
                })?;
                let store = Arc::new(SqliteReminderStore::new(conn));
                state.store = Some(Arc::clone(&store));
                store
            }
        };

        let data_source: Arc<dyn ReminderDataSource> =
            Arc::new(LocalReminderDataSource::new(store));
        state.data_source = Some(Arc::clone(&data_source));
        info!("event=locator_provide module=service status=created");
        Ok(data_source)
    }

    /// Replaces the shared data source, typically with a test double.
    pub fn set_reminder_data_source(&self, data_source: Arc<dyn ReminderDataSource>) {
        self.lock().data_source = Some(data_source);
    }

    /// Clears all rows, closes the store and forgets both instances.
    ///
    /// Both references are dropped even when clearing or closing fails; the
    /// first failure is returned afterwards. Intended for tests that need
    /// isolation between cases.
    pub fn reset_repository(&self) -> RepoResult<()> {
        let mut state = self.lock();
        let outcome = match state.store.as_ref() {
            Some(store) => {
                let cleared = if store.is_closed() {
                    Ok(())
                } else {
                    store.delete_all_reminders()
                };
                let closed = store.close();
                cleared.and(closed)
            }
            None => Ok(()),
        };
        state.store = None;
        state.data_source = None;

        match &outcome {
            Ok(()) => info!("event=locator_reset module=service status=ok"),
            Err(err) => warn!("event=locator_reset module=service status=error error={err}"),
        }
        outcome
    }

    fn lock(&self) -> MutexGuard<'_, LocatorState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
