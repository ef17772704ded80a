//! Reminder store contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide insert-or-replace, fetch and bulk delete over the `reminders` table.
//! - Keep SQL and row decoding inside the persistence boundary.
//!
//! # Invariants
//! - `save_reminder` is an upsert keyed by `entry_id`.
//! - Read paths reject rows that violate `Reminder::validate()`.
//! - A closed store fails every call with `RepoError::Closed`.

use crate::db::DbError;
use crate::model::reminder::{Reminder, ReminderValidationError};
use log::{debug, info};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{Mutex, MutexGuard};

const REMINDER_SELECT_SQL: &str = "SELECT
    entry_id,
    title,
    description,
    location,
    latitude,
    longitude
FROM reminders";

pub type RepoResult<T> = Result<T, RepoError>;

/// Error for reminder persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(ReminderValidationError),
    Db(DbError),
    InvalidData(String),
    Closed,
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted reminder: {message}"),
            Self::Closed => write!(f, "reminder store is closed"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::InvalidData(_) | Self::Closed => None,
        }
    }
}

impl From<ReminderValidationError> for RepoError {
    fn from(value: ReminderValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Storage contract for reminder records.
pub trait ReminderStore {
    fn save_reminder(&self, reminder: &Reminder) -> RepoResult<()>;
    fn get_reminder_by_id(&self, id: &str) -> RepoResult<Option<Reminder>>;
    /// Returns every stored reminder. Callers must not rely on ordering.
    fn get_reminders(&self) -> RepoResult<Vec<Reminder>>;
    fn delete_all_reminders(&self) -> RepoResult<()>;
}

/// SQLite-backed reminder store owning its connection.
///
/// The connection sits behind a mutex so the store can be shared across
/// blocking worker threads.
pub struct SqliteReminderStore {
    conn: Mutex<Option<Connection>>,
}

impl SqliteReminderStore {
    /// Wraps an already migrated connection (see `db::open_db`).
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(Some(conn)),
        }
    }

    /// Closes the underlying connection.
    ///
    /// Closing twice is a no-op.
    pub fn close(&self) -> RepoResult<()> {
        let taken = self.lock().take();
        if let Some(conn) = taken {
            conn.close().map_err(|(_, err)| RepoError::from(err))?;
            info!("event=store_close module=repo status=ok");
        }
        Ok(())
    }

    pub fn is_closed(&self) -> bool {
        self.lock().is_none()
    }

    fn with_conn<T>(&self, f: impl FnOnce(&Connection) -> RepoResult<T>) -> RepoResult<T> {
        let guard = self.lock();
        let conn = guard.as_ref().ok_or(RepoError::Closed)?;
        f(conn)
    }

    fn lock(&self) -> MutexGuard<'_, Option<Connection>> {
        // A panic while holding the lock cannot leave SQLite half-written.
        self.conn
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ReminderStore for SqliteReminderStore {
    fn save_reminder(&self, reminder: &Reminder) -> RepoResult<()> {
        reminder.validate()?;

        self.with_conn(|conn| {
            conn.execute(
                "INSERT OR REPLACE INTO reminders (
                    entry_id,
                    title,
                    description,
                    location,
                    latitude,
                    longitude
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
                params![
                    reminder.id.as_str(),
                    reminder.title.as_deref(),
                    reminder.description.as_deref(),
                    reminder.location.as_deref(),
                    reminder.latitude,
                    reminder.longitude,
                ],
            )?;
            Ok(())
        })?;

        debug!("event=reminder_save module=repo status=ok");
        Ok(())
    }

    fn get_reminder_by_id(&self, id: &str) -> RepoResult<Option<Reminder>> {
        self.with_conn(|conn| {
            let found = conn
                .query_row(
                    &format!("{REMINDER_SELECT_SQL} WHERE entry_id = ?1;"),
                    [id],
                    |row| Ok(parse_reminder_row(row)),
                )
                .optional()?;
            found.transpose()
        })
    }

    fn get_reminders(&self) -> RepoResult<Vec<Reminder>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(&format!("{REMINDER_SELECT_SQL} ORDER BY rowid ASC;"))?;
            let mut rows = stmt.query([])?;
            let mut reminders = Vec::new();

            while let Some(row) = rows.next()? {
                reminders.push(parse_reminder_row(row)?);
            }

            Ok(reminders)
        })
    }

    fn delete_all_reminders(&self) -> RepoResult<()> {
        let removed = self.with_conn(|conn| Ok(conn.execute("DELETE FROM reminders;", [])?))?;
        info!("event=reminder_delete_all module=repo status=ok removed={removed}");
        Ok(())
    }
}

fn parse_reminder_row(row: &Row<'_>) -> RepoResult<Reminder> {
    let reminder = Reminder {
        id: row.get("entry_id")?,
        title: row.get("title")?,
        description: row.get("description")?,
        location: row.get("location")?,
        latitude: row.get("latitude")?,
        longitude: row.get("longitude")?,
    };
    reminder.validate().map_err(|err| {
        RepoError::InvalidData(format!("row `{}` failed validation: {err}", reminder.id))
    })?;
    Ok(reminder)
}
