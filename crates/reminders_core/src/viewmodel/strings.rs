//! Localizable message keys published by view-models.

use serde::{Deserialize, Serialize};

/// String resource key; the shell resolves it to localized text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StringRes {
    ErrEnterTitle,
    ErrSelectLocation,
    GeofencesNotAdded,
    ReminderSaved,
}

impl StringRes {
    pub fn key(self) -> &'static str {
        match self {
            Self::ErrEnterTitle => "err_enter_title",
            Self::ErrSelectLocation => "err_select_location",
            Self::GeofencesNotAdded => "geofences_not_added",
            Self::ReminderSaved => "reminder_saved",
        }
    }

    /// English fallback text.
    pub fn default_text(self) -> &'static str {
        match self {
            Self::ErrEnterTitle => "Please enter title",
            Self::ErrSelectLocation => "Please select location",
            Self::GeofencesNotAdded => "Failed to add location!!! Try again later!",
            Self::ReminderSaved => "Reminder Saved !",
        }
    }
}
