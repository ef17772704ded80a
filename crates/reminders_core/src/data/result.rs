//! Tagged success/error result returned by data-source reads.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Message shown to the user when a lookup yields nothing.
pub const REMINDER_NOT_FOUND_MESSAGE: &str = "Reminder not found!";

/// Failure reported by a data source.
///
/// `NotFound` covers both a missing id and an empty table, so callers that
/// need to tell "no data" from a fault should match on the variant rather
/// than on the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    NotFound,
    Storage(String),
}

impl DataError {
    /// User-facing message for snackbars and FFI envelopes.
    pub fn message(&self) -> &str {
        match self {
            Self::NotFound => REMINDER_NOT_FOUND_MESSAGE,
            Self::Storage(message) => message.as_str(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

impl Display for DataError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl Error for DataError {}

/// Outcome of a data-source read.
#[derive(Debug, Clone, PartialEq)]
pub enum DataResult<T> {
    Success(T),
    Error(DataError),
}

impl<T> DataResult<T> {
    pub fn succeeded(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Error(err) => Some(err.message()),
        }
    }

    /// Converts into a std `Result` for `?`-style callers.
    pub fn into_result(self) -> Result<T, DataError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Error(err) => Err(err),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> DataResult<U> {
        match self {
            Self::Success(value) => DataResult::Success(f(value)),
            Self::Error(err) => DataResult::Error(err),
        }
    }
}

impl<T> From<Result<T, DataError>> for DataResult<T> {
    fn from(value: Result<T, DataError>) -> Self {
        match value {
            Ok(value) => Self::Success(value),
            Err(err) => Self::Error(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DataError, DataResult, REMINDER_NOT_FOUND_MESSAGE};

    #[test]
    fn not_found_uses_fixed_message() {
        let result: DataResult<()> = DataResult::Error(DataError::NotFound);
        assert!(!result.succeeded());
        assert_eq!(result.error_message(), Some(REMINDER_NOT_FOUND_MESSAGE));
    }

    #[test]
    fn storage_error_keeps_its_message() {
        let err = DataError::Storage("disk I/O error".to_string());
        assert_eq!(err.to_string(), "disk I/O error");
        assert!(!err.is_not_found());
    }

    #[test]
    fn map_preserves_error_variant() {
        let result: DataResult<i32> = DataResult::Error(DataError::NotFound);
        assert_eq!(result.map(|v| v + 1), DataResult::Error(DataError::NotFound));
        assert_eq!(DataResult::Success(1).map(|v| v + 1), DataResult::Success(2));
    }
}
