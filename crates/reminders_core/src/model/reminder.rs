//! Reminder domain model.
//!
//! # Responsibility
//! - Define the canonical reminder record persisted in the `reminders` table.
//! - Validate coordinate invariants before persistence.
//!
//! # Invariants
//! - `id` is assigned once and never reused for another reminder.
//! - `latitude` and `longitude` are both `Some` or both `None`.
//! - Coordinates stay inside WGS84 degree ranges.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier of a reminder.
///
/// Kept as text so ids generated by the platform shell can be stored as-is.
pub type ReminderId = String;

/// Validation errors for reminder coordinate invariants.
#[derive(Debug, Clone, PartialEq)]
pub enum ReminderValidationError {
    EmptyId,
    PartialCoordinates,
    LatitudeOutOfRange(f64),
    LongitudeOutOfRange(f64),
}

impl Display for ReminderValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "reminder id cannot be empty"),
            Self::PartialCoordinates => {
                write!(f, "latitude and longitude must be set together")
            }
            Self::LatitudeOutOfRange(value) => {
                write!(f, "latitude {value} is outside [-90, 90]")
            }
            Self::LongitudeOutOfRange(value) => {
                write!(f, "longitude {value} is outside [-180, 180]")
            }
        }
    }
}

impl Error for ReminderValidationError {}

/// A location reminder as created by the save flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: ReminderId,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Human-readable location label, e.g. a POI name or `Dropped Pin`.
    pub location: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Reminder {
    /// Creates a reminder with a freshly generated id.
    pub fn new(
        title: Option<String>,
        description: Option<String>,
        location: Option<String>,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            description,
            location,
            latitude,
            longitude,
        }
    }

    /// Replaces the generated id with a caller-provided one.
    ///
    /// Used when the record must overwrite an existing row.
    pub fn with_id(mut self, id: impl Into<ReminderId>) -> Self {
        self.id = id.into();
        self
    }

    /// Returns `(latitude, longitude)` when both are present.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }

    /// Checks persistence invariants.
    ///
    /// Title and location presence are UI validation concerns and are not
    /// enforced here.
    pub fn validate(&self) -> Result<(), ReminderValidationError> {
        if self.id.trim().is_empty() {
            return Err(ReminderValidationError::EmptyId);
        }

        match (self.latitude, self.longitude) {
            (None, None) => Ok(()),
            (Some(lat), Some(lon)) => {
                if !(-90.0..=90.0).contains(&lat) {
                    return Err(ReminderValidationError::LatitudeOutOfRange(lat));
                }
                if !(-180.0..=180.0).contains(&lon) {
                    return Err(ReminderValidationError::LongitudeOutOfRange(lon));
                }
                Ok(())
            }
            _ => Err(ReminderValidationError::PartialCoordinates),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Reminder, ReminderValidationError};

    fn sample() -> Reminder {
        Reminder::new(
            Some("Title".to_string()),
            Some("Description".to_string()),
            Some("Location".to_string()),
            Some(1.0),
            Some(2.0),
        )
    }

    #[test]
    fn new_generates_distinct_ids() {
        assert_ne!(sample().id, sample().id);
    }

    #[test]
    fn validate_rejects_partial_coordinates() {
        let mut reminder = sample();
        reminder.longitude = None;
        assert_eq!(
            reminder.validate(),
            Err(ReminderValidationError::PartialCoordinates)
        );
    }

    #[test]
    fn validate_rejects_out_of_range_latitude() {
        let mut reminder = sample();
        reminder.latitude = Some(91.0);
        assert!(matches!(
            reminder.validate(),
            Err(ReminderValidationError::LatitudeOutOfRange(_))
        ));
    }

    #[test]
    fn validate_rejects_out_of_range_longitude() {
        let mut reminder = sample();
        reminder.longitude = Some(-180.5);
        assert_eq!(
            reminder.validate(),
            Err(ReminderValidationError::LongitudeOutOfRange(-180.5))
        );
    }

    #[test]
    fn validate_accepts_boundary_coordinates() {
        let mut reminder = sample();
        reminder.latitude = Some(-90.0);
        reminder.longitude = Some(180.0);
        assert!(reminder.validate().is_ok());
    }

    #[test]
    fn validate_accepts_missing_coordinates() {
        let reminder = Reminder::new(None, None, None, None, None);
        assert!(reminder.validate().is_ok());
        assert_eq!(reminder.coordinates(), None);
    }
}
