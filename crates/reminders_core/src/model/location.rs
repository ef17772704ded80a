//! Map location picked for a reminder.

use serde::{Deserialize, Serialize};

/// Label stored when the user drops a pin instead of choosing a named place.
pub const DROPPED_PIN_LABEL: &str = "Dropped Pin";

/// A named place selected on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointOfInterest {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Result of the location picker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SelectedLocation {
    Poi(PointOfInterest),
    DroppedPin { latitude: f64, longitude: f64 },
}

impl SelectedLocation {
    /// Location text shown in the list and stored in `Reminder::location`.
    pub fn label(&self) -> &str {
        match self {
            Self::Poi(poi) => poi.name.as_str(),
            Self::DroppedPin { .. } => DROPPED_PIN_LABEL,
        }
    }

    pub fn coordinates(&self) -> (f64, f64) {
        match self {
            Self::Poi(poi) => (poi.latitude, poi.longitude),
            Self::DroppedPin {
                latitude,
                longitude,
            } => (*latitude, *longitude),
        }
    }
}
