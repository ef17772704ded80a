//! Async reminder data-source contract.

use crate::data::result::{DataError, DataResult};
use crate::model::reminder::Reminder;
use async_trait::async_trait;

/// Storage-agnostic reminder access used by view-models.
///
/// Reads return a tagged result; writes return `Result` so storage faults
/// propagate to the caller.
#[async_trait]
pub trait ReminderDataSource: Send + Sync {
    /// All reminders. An empty store yields `DataError::NotFound`.
    async fn get_reminders(&self) -> DataResult<Vec<Reminder>>;
    async fn save_reminder(&self, reminder: &Reminder) -> Result<(), DataError>;
    /// One reminder by id, `DataError::NotFound` when absent.
    async fn get_reminder(&self, id: &str) -> DataResult<Reminder>;
    async fn delete_all_reminders(&self) -> Result<(), DataError>;
}
