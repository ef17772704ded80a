//! Save flow through the real SQLite data source into the list screen.

use reminders_core::db::open_db_in_memory;
use reminders_core::{
    LocalReminderDataSource, ReminderDataSource, RemindersListViewModel, SaveReminderViewModel,
    SqliteReminderStore, DROPPED_PIN_LABEL,
};
use std::sync::Arc;

#[tokio::test]
async fn saved_reminder_appears_in_list_with_dropped_pin_label() {
    let store = Arc::new(SqliteReminderStore::new(open_db_in_memory().unwrap()));
    let data_source: Arc<dyn ReminderDataSource> = Arc::new(LocalReminderDataSource::new(store));

    let save = SaveReminderViewModel::new(Arc::clone(&data_source));
    save.set_title("Title");
    save.set_description("Description");
    save.drop_pin(37.422, -122.084);
    let item = save.current_item();
    assert!(save.validate_and_save_reminder(&item).await);

    let list = RemindersListViewModel::new(Arc::clone(&data_source));
    list.load_reminders().await;

    let shown = list.reminders();
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].title.as_deref(), Some("Title"));
    assert_eq!(shown[0].description.as_deref(), Some("Description"));
    assert_eq!(shown[0].location.as_deref(), Some(DROPPED_PIN_LABEL));
    assert!(!list.is_showing_no_data());

    data_source.delete_all_reminders().await.unwrap();
    list.load_reminders().await;
    assert!(list.is_showing_no_data());
}

#[test]
fn reminder_serializes_with_field_names() {
    let reminder = reminders_core::Reminder::new(
        Some("Title".to_string()),
        None,
        Some(DROPPED_PIN_LABEL.to_string()),
        Some(1.0),
        Some(2.0),
    );
    let json = serde_json::to_value(&reminder).unwrap();
    assert_eq!(json["title"], "Title");
    assert_eq!(json["location"], "Dropped Pin");
    assert!(json["description"].is_null());
}
