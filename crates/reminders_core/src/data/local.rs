//! SQLite-backed data source.
//!
//! # Responsibility
//! - Run store calls on tokio's blocking pool.
//! - Map store outcomes onto `DataResult` / `DataError`.
//!
//! # Invariants
//! - Empty fetch-all and missing ids both map to `DataError::NotFound`.
//! - Store and join failures map to `DataError::Storage` and are logged.

use crate::data::result::{DataError, DataResult};
use crate::data::source::ReminderDataSource;
use crate::model::reminder::Reminder;
use crate::repo::reminder_repo::{RepoResult, ReminderStore, SqliteReminderStore};
use async_trait::async_trait;
use log::{error, warn};
use std::sync::Arc;

/// Data source over a shared `SqliteReminderStore`.
pub struct LocalReminderDataSource {
    store: Arc<SqliteReminderStore>,
}

impl LocalReminderDataSource {
    pub fn new(store: Arc<SqliteReminderStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<SqliteReminderStore> {
        &self.store
    }

    async fn run<T, F>(&self, op: &'static str, f: F) -> Result<T, DataError>
    where
        T: Send + 'static,
        F: FnOnce(&SqliteReminderStore) -> RepoResult<T> + Send + 'static,
    {
        let store = Arc::clone(&self.store);
        match tokio::task::spawn_blocking(move || f(store.as_ref())).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(err)) => {
                error!("event={op} module=data status=error error={err}");
                Err(DataError::Storage(err.to_string()))
            }
            Err(join_err) => {
                error!("event={op} module=data status=error error_code=worker_failed error={join_err}");
                Err(DataError::Storage(format!("{op} worker failed: {join_err}")))
            }
        }
    }
}

#[async_trait]
impl ReminderDataSource for LocalReminderDataSource {
    async fn get_reminders(&self) -> DataResult<Vec<Reminder>> {
        let result = self
            .run("reminders_list", |store| store.get_reminders())
            .await
            .and_then(|reminders| {
                if reminders.is_empty() {
                    Err(DataError::NotFound)
                } else {
                    Ok(reminders)
                }
            });
        result.into()
    }

    async fn save_reminder(&self, reminder: &Reminder) -> Result<(), DataError> {
        let reminder = reminder.clone();
        self.run("reminder_save", move |store| store.save_reminder(&reminder))
            .await
    }

    async fn get_reminder(&self, id: &str) -> DataResult<Reminder> {
        let id = id.to_string();
        let result = self
            .run("reminder_get", move |store| store.get_reminder_by_id(&id))
            .await
            .and_then(|found| found.ok_or(DataError::NotFound));
        if matches!(result, Err(DataError::NotFound)) {
            warn!("event=reminder_get module=data status=not_found");
        }
        result.into()
    }

    async fn delete_all_reminders(&self) -> Result<(), DataError> {
        self.run("reminder_delete_all", |store| store.delete_all_reminders())
            .await
    }
}
