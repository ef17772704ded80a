//! Runtime configuration for the reminders core.
//!
//! Values come from the environment so the mobile shell and CLI can point the
//! core at platform-specific directories without recompiling.

use crate::logging::default_log_level;
use std::path::PathBuf;

pub const DEFAULT_DB_FILE_NAME: &str = "Reminders.db";

const DATA_DIR_ENV: &str = "REMINDERS_DATA_DIR";
const LOG_LEVEL_ENV: &str = "REMINDERS_LOG_LEVEL";
const LOG_DIR_ENV: &str = "REMINDERS_LOG_DIR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderConfig {
    /// Directory holding the database file.
    pub data_dir: PathBuf,
    pub db_file_name: String,
    pub log_level: String,
    /// Absolute log directory; `None` leaves logging uninitialized.
    pub log_dir: Option<PathBuf>,
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self {
            data_dir: std::env::temp_dir(),
            db_file_name: DEFAULT_DB_FILE_NAME.to_string(),
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl ReminderConfig {
    /// Reads `REMINDERS_DATA_DIR`, `REMINDERS_LOG_LEVEL` and
    /// `REMINDERS_LOG_DIR`, falling back to defaults for blank values.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            data_dir: env_value(DATA_DIR_ENV)
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            db_file_name: defaults.db_file_name,
            log_level: env_value(LOG_LEVEL_ENV).unwrap_or(defaults.log_level),
            log_dir: env_value(LOG_DIR_ENV).map(PathBuf::from),
        }
    }

    /// Config rooted at an explicit data directory.
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(&self.db_file_name)
    }
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|raw| raw.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::{ReminderConfig, DEFAULT_DB_FILE_NAME};
    use std::path::PathBuf;

    #[test]
    fn db_path_joins_data_dir_and_file_name() {
        let config = ReminderConfig::with_data_dir("/data/app");
        assert_eq!(
            config.db_path(),
            PathBuf::from("/data/app").join(DEFAULT_DB_FILE_NAME)
        );
    }
}
