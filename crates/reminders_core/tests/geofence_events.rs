mod common;

use common::{reminder, FakeDataSource};
use reminders_core::{handle_geofence_event, GeofenceEvent, GeofenceTransition};

#[tokio::test]
async fn enter_event_notifies_known_reminders() {
    let saved = reminder(1);
    let data_source = FakeDataSource::with_reminders(vec![saved.clone(), reminder(2)]);
    let event = GeofenceEvent {
        transition: GeofenceTransition::Enter,
        triggering_ids: vec![saved.id.clone(), "unknown".to_string()],
    };

    let notifications = handle_geofence_event(&data_source, &event).await;

    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].reminder_id, saved.id);
    assert_eq!(notifications[0].title, "Title1");
    assert_eq!(notifications[0].body, "Description1 (Location1)");
}

#[tokio::test]
async fn exit_event_is_ignored() {
    let saved = reminder(1);
    let data_source = FakeDataSource::with_reminders(vec![saved.clone()]);
    let event = GeofenceEvent {
        transition: GeofenceTransition::Exit,
        triggering_ids: vec![saved.id],
    };

    assert!(handle_geofence_event(&data_source, &event).await.is_empty());
}
