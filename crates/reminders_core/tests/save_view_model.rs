mod common;

use common::{FakeDataSource, RecordingRegistrar};
use reminders_core::{
    Destination, NavigationCommand, PointOfInterest, Reminder, SaveReminderViewModel, StringRes, UiEvent,
    DROPPED_PIN_LABEL,
};
use std::sync::Arc;
use tokio::sync::broadcast::error::TryRecvError;

fn item(title: Option<&str>, location: Option<&str>) -> Reminder {
    Reminder::new(
        title.map(str::to_string),
        Some("Description1".to_string()),
        location.map(str::to_string),
        Some(1.0),
        Some(2.0),
    )
}

fn setup() -> (Arc<FakeDataSource>, SaveReminderViewModel) {
    let data_source = Arc::new(FakeDataSource::default());
    let view_model = SaveReminderViewModel::new(Arc::clone(&data_source) as _);
    (data_source, view_model)
}

#[test]
fn validate_rejects_missing_title() {
    let (_, view_model) = setup();
    let mut events = view_model.events();

    assert!(!view_model.validate_entered_data(&item(None, Some("Location1"))));
    assert_eq!(
        events.try_recv().unwrap(),
        UiEvent::ShowSnackBarRes(StringRes::ErrEnterTitle)
    );
}

#[test]
fn validate_rejects_blank_location() {
    let (_, view_model) = setup();
    let mut events = view_model.events();

    assert!(!view_model.validate_entered_data(&item(Some("Title1"), Some(""))));
    assert_eq!(
        events.try_recv().unwrap(),
        UiEvent::ShowSnackBarRes(StringRes::ErrSelectLocation)
    );
}

#[test]
fn validate_reports_title_before_location() {
    let (_, view_model) = setup();
    let mut events = view_model.events();

    assert!(!view_model.validate_entered_data(&item(Some("  "), None)));
    assert_eq!(
        events.try_recv().unwrap(),
        UiEvent::ShowSnackBarRes(StringRes::ErrEnterTitle)
    );
    assert_eq!(events.try_recv().unwrap_err(), TryRecvError::Empty);
}

#[test]
fn validate_accepts_complete_item() {
    let (_, view_model) = setup();
    let mut events = view_model.events();

    assert!(view_model.validate_entered_data(&item(Some("Title1"), Some("Location1"))));
    assert_eq!(events.try_recv().unwrap_err(), TryRecvError::Empty);
}

#[tokio::test]
async fn save_reminder_toasts_navigates_back_and_clears_loading() {
    let (data_source, view_model) = setup();
    let mut events = view_model.events();
    let mut loading = view_model.show_loading();
    let reminder = item(Some("Title1"), Some("Location1"));

    view_model.save_reminder(&reminder).await;

    assert!(loading.has_changed().unwrap());
    assert!(!*loading.borrow_and_update());
    assert_eq!(data_source.snapshot(), vec![reminder]);
    assert_eq!(
        events.try_recv().unwrap(),
        UiEvent::ShowToast(StringRes::ReminderSaved)
    );
    assert_eq!(
        events.try_recv().unwrap(),
        UiEvent::Navigate(NavigationCommand::Back)
    );
}

#[tokio::test]
async fn save_failure_shows_snackbar_without_navigation() {
    let (data_source, view_model) = setup();
    data_source.set_fail_writes(true);
    let mut events = view_model.events();

    view_model
        .save_reminder(&item(Some("Title1"), Some("Location1")))
        .await;

    assert!(!view_model.is_loading());
    assert_eq!(
        events.try_recv().unwrap(),
        UiEvent::ShowSnackBar("disk full".to_string())
    );
    assert_eq!(events.try_recv().unwrap_err(), TryRecvError::Empty);
}

#[tokio::test]
async fn validate_and_save_skips_invalid_items() {
    let (data_source, view_model) = setup();

    assert!(!view_model.validate_and_save_reminder(&item(None, None)).await);
    assert!(data_source.snapshot().is_empty());

    assert!(
        view_model
            .validate_and_save_reminder(&item(Some("Title1"), Some("Location1")))
            .await
    );
    assert_eq!(data_source.snapshot().len(), 1);
}

#[tokio::test]
async fn register_and_save_registers_enter_geofence() {
    let (data_source, view_model) = setup();
    let registrar = RecordingRegistrar::default();
    let reminder = item(Some("Title1"), Some("Location1"));

    assert!(view_model.register_and_save(&reminder, &registrar).await);

    let requests = registrar.requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].request_id, reminder.id);
    assert_eq!(requests[0].radius_meters, 100.0);
    assert_eq!(data_source.snapshot(), vec![reminder]);
}

#[tokio::test]
async fn register_failure_still_saves_reminder() {
    let (data_source, view_model) = setup();
    let registrar = RecordingRegistrar {
        fail: true,
        ..RecordingRegistrar::default()
    };
    let mut events = view_model.events();

    let reminder = item(Some("Title1"), Some("Location1"));
    assert!(view_model.register_and_save(&reminder, &registrar).await);

    assert_eq!(
        events.try_recv().unwrap(),
        UiEvent::ShowSnackBarRes(StringRes::GeofencesNotAdded)
    );
    assert_eq!(
        events.try_recv().unwrap(),
        UiEvent::ShowToast(StringRes::ReminderSaved)
    );
    assert_eq!(data_source.snapshot().len(), 1);
}

#[tokio::test]
async fn register_without_coordinates_warns_and_still_saves() {
    let (data_source, view_model) = setup();
    let registrar = RecordingRegistrar::default();
    let mut events = view_model.events();
    let reminder = Reminder::new(
        Some("Title1".to_string()),
        None,
        Some("Location1".to_string()),
        None,
        None,
    );

    assert!(view_model.register_and_save(&reminder, &registrar).await);

    assert!(registrar.requests.lock().unwrap().is_empty());
    assert_eq!(
        events.try_recv().unwrap(),
        UiEvent::ShowSnackBarRes(StringRes::GeofencesNotAdded)
    );
    assert_eq!(
        events.try_recv().unwrap(),
        UiEvent::ShowToast(StringRes::ReminderSaved)
    );
    assert_eq!(
        events.try_recv().unwrap(),
        UiEvent::Navigate(NavigationCommand::Back)
    );
    assert_eq!(data_source.snapshot(), vec![reminder]);
}

#[test]
fn select_location_navigates_to_map_picker() {
    let (_, view_model) = setup();
    let mut events = view_model.events();

    view_model.navigate_to_select_location();

    assert_eq!(
        events.try_recv().unwrap(),
        UiEvent::Navigate(NavigationCommand::To(Destination::SelectLocation))
    );
}

#[tokio::test]
async fn register_and_save_rejects_invalid_item_without_registering() {
    let (data_source, view_model) = setup();
    let registrar = RecordingRegistrar::default();

    assert!(!view_model.register_and_save(&item(None, None), &registrar).await);
    assert!(registrar.requests.lock().unwrap().is_empty());
    assert!(data_source.snapshot().is_empty());
}

#[test]
fn form_tracks_selection_and_clears() {
    let (_, view_model) = setup();
    view_model.set_title("Title");
    view_model.set_description("Description");
    view_model.select_point_of_interest(PointOfInterest {
        name: "Golden Gate Bridge".to_string(),
        latitude: 37.8199,
        longitude: -122.4783,
    });

    let item = view_model.current_item();
    assert_eq!(item.location.as_deref(), Some("Golden Gate Bridge"));
    assert_eq!(item.coordinates(), Some((37.8199, -122.4783)));
    assert!(view_model.form().borrow().selected_poi().is_some());

    view_model.drop_pin(1.0, 2.0);
    assert_eq!(
        view_model.current_item().location.as_deref(),
        Some(DROPPED_PIN_LABEL)
    );

    view_model.on_clear();
    let cleared = view_model.current_item();
    assert_eq!(cleared.title, None);
    assert_eq!(cleared.location, None);
    assert_eq!(cleared.coordinates(), None);
}
