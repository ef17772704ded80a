//! Geofence transition handling.

use crate::data::source::ReminderDataSource;
use crate::data::result::DataResult;
use crate::geofence::request::GeofenceTransition;
use crate::model::reminder::{Reminder, ReminderId};
use log::{info, warn};
use serde::{Deserialize, Serialize};

/// Transition delivered by the platform for one or more fences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeofenceEvent {
    pub transition: GeofenceTransition,
    pub triggering_ids: Vec<ReminderId>,
}

/// Notification content for a reminder whose fence was entered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReminderNotification {
    pub reminder_id: ReminderId,
    pub title: String,
    pub body: String,
}

impl ReminderNotification {
    pub fn for_reminder(reminder: &Reminder) -> Self {
        let title = reminder.title.clone().unwrap_or_default();
        let body = match (&reminder.description, &reminder.location) {
            (Some(description), Some(location)) => format!("{description} ({location})"),
            (Some(description), None) => description.clone(),
            (None, Some(location)) => location.clone(),
            (None, None) => String::new(),
        };
        Self {
            reminder_id: reminder.id.clone(),
            title,
            body,
        }
    }
}

/// Resolves an enter transition into notifications for the stored reminders.
///
/// Non-enter transitions and unknown ids yield nothing.
pub async fn handle_geofence_event(
    data_source: &dyn ReminderDataSource,
    event: &GeofenceEvent,
) -> Vec<ReminderNotification> {
    if event.transition != GeofenceTransition::Enter {
        return Vec::new();
    }

    let mut notifications = Vec::with_capacity(event.triggering_ids.len());
    for id in &event.triggering_ids {
        match data_source.get_reminder(id).await {
            DataResult::Success(reminder) => {
                notifications.push(ReminderNotification::for_reminder(&reminder));
            }
            DataResult::Error(err) => {
                warn!("event=geofence_enter module=geofence status=skipped error={err}");
            }
        }
    }

    info!(
        "event=geofence_enter module=geofence status=ok triggered={} notified={}",
        event.triggering_ids.len(),
        notifications.len()
    );
    notifications
}
