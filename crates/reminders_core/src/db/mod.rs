//! SQLite bootstrap for the reminders database.
//!
//! # Responsibility
//! - Create the database directory and open the reminders file.
//! - Migrate the `reminders` table before any store uses the connection.
//!
//! # Invariants
//! - Migration version is tracked via `PRAGMA user_version`.
//! - Open failures name the database file they were opening.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    /// The directory meant to hold the reminders file could not be created.
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    /// SQLite refused to open the reminders file.
    Open {
        path: PathBuf,
        source: rusqlite::Error,
    },
    /// Statement or migration failure on an open connection.
    Sqlite(rusqlite::Error),
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl DbError {
    /// Filesystem path involved in the failure, when there is one.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::CreateDir { path, .. } | Self::Open { path, .. } => Some(path.as_path()),
            Self::Sqlite(_) | Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CreateDir { path, source } => write!(
                f,
                "cannot create reminders directory `{}`: {source}",
                path.display()
            ),
            Self::Open { path, source } => write!(
                f,
                "cannot open reminders database `{}`: {source}",
                path.display()
            ),
            Self::Sqlite(err) => write!(f, "reminders database error: {err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "reminders schema version {db_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::CreateDir { source, .. } => Some(source),
            Self::Open { source, .. } | Self::Sqlite(source) => Some(source),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
