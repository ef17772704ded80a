//! Save reminder screen view-model.
//!
//! # Responsibility
//! - Hold the in-progress reminder form, including the picked location.
//! - Validate entered data and persist it, optionally after registering a
//!   geofence.
//!
//! # Invariants
//! - Title is validated before location.
//! - A failed geofence registration never blocks saving the reminder.

use crate::data::source::ReminderDataSource;
use crate::geofence::request::{GeofenceRegistrar, GeofenceRequest};
use crate::model::location::{PointOfInterest, SelectedLocation};
use crate::model::reminder::Reminder;
use crate::viewmodel::base::{BaseViewModel, Destination, NavigationCommand, UiEvent};
use crate::viewmodel::strings::StringRes;
use log::{error, info, warn};
use std::ops::Deref;
use std::sync::Arc;
use tokio::sync::watch;

/// Fields bound to the save screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReminderForm {
    pub title: Option<String>,
    pub description: Option<String>,
    pub selected_location: Option<SelectedLocation>,
}

impl ReminderForm {
    pub fn location_label(&self) -> Option<&str> {
        self.selected_location.as_ref().map(SelectedLocation::label)
    }

    pub fn selected_poi(&self) -> Option<&PointOfInterest> {
        match &self.selected_location {
            Some(SelectedLocation::Poi(poi)) => Some(poi),
            _ => None,
        }
    }

    /// Builds a reminder with a fresh id from the current form values.
    pub fn to_reminder(&self) -> Reminder {
        let coordinates = self.selected_location.as_ref().map(SelectedLocation::coordinates);
        Reminder::new(
            self.title.clone(),
            self.description.clone(),
            self.location_label().map(str::to_string),
            coordinates.map(|(lat, _)| lat),
            coordinates.map(|(_, lon)| lon),
        )
    }
}

pub struct SaveReminderViewModel {
    base: BaseViewModel,
    data_source: Arc<dyn ReminderDataSource>,
    form: watch::Sender<ReminderForm>,
}

impl SaveReminderViewModel {
    pub fn new(data_source: Arc<dyn ReminderDataSource>) -> Self {
        let (form, _) = watch::channel(ReminderForm::default());
        Self {
            base: BaseViewModel::new(),
            data_source,
            form,
        }
    }

    pub fn form(&self) -> watch::Receiver<ReminderForm> {
        self.form.subscribe()
    }

    pub fn set_title(&self, title: impl Into<String>) {
        let title = title.into();
        self.form.send_modify(|form| form.title = Some(title));
    }

    pub fn set_description(&self, description: impl Into<String>) {
        let description = description.into();
        self.form
            .send_modify(|form| form.description = Some(description));
    }

    pub fn select_point_of_interest(&self, poi: PointOfInterest) {
        self.form
            .send_modify(|form| form.selected_location = Some(SelectedLocation::Poi(poi)));
    }

    /// Picks a bare map point, labelled `Dropped Pin`.
    pub fn drop_pin(&self, latitude: f64, longitude: f64) {
        self.form.send_modify(|form| {
            form.selected_location = Some(SelectedLocation::DroppedPin {
                latitude,
                longitude,
            })
        });
    }

    /// Opens the map picker.
    pub fn navigate_to_select_location(&self) {
        self.base.publish(UiEvent::Navigate(NavigationCommand::To(
            Destination::SelectLocation,
        )));
    }

    /// Reminder built from the current form.
    pub fn current_item(&self) -> Reminder {
        self.form.borrow().to_reminder()
    }

    /// Clears the form when the screen is destroyed.
    pub fn on_clear(&self) {
        self.form.send_replace(ReminderForm::default());
    }

    /// Returns `false` and publishes the matching error when a required
    /// field is blank.
    pub fn validate_entered_data(&self, item: &Reminder) -> bool {
        if is_blank(item.title.as_deref()) {
            self.base
                .publish(UiEvent::ShowSnackBarRes(StringRes::ErrEnterTitle));
            return false;
        }
        if is_blank(item.location.as_deref()) {
            self.base
                .publish(UiEvent::ShowSnackBarRes(StringRes::ErrSelectLocation));
            return false;
        }
        true
    }

    /// Persists the item, then toasts and navigates back.
    ///
    /// Storage faults are reported through a snackbar and leave the screen in
    /// place.
    pub async fn save_reminder(&self, item: &Reminder) {
        self.base.set_loading(true);
        let saved = self.data_source.save_reminder(item).await;
        self.base.set_loading(false);

        match saved {
            Ok(()) => {
                info!("event=reminder_save module=viewmodel status=ok");
                self.base.publish(UiEvent::ShowToast(StringRes::ReminderSaved));
                self.base
                    .publish(UiEvent::Navigate(NavigationCommand::Back));
            }
            Err(err) => {
                error!("event=reminder_save module=viewmodel status=error error={err}");
                self.base
                    .publish(UiEvent::ShowSnackBar(err.message().to_string()));
            }
        }
    }

    /// Validates and saves; returns whether a save was attempted.
    pub async fn validate_and_save_reminder(&self, item: &Reminder) -> bool {
        if !self.validate_entered_data(item) {
            return false;
        }
        self.save_reminder(item).await;
        true
    }

    /// Save-button flow: register the geofence, then save regardless of the
    /// registration outcome.
    pub async fn register_and_save(
        &self,
        item: &Reminder,
        registrar: &dyn GeofenceRegistrar,
    ) -> bool {
        if !self.validate_entered_data(item) {
            return false;
        }

        let registered = match GeofenceRequest::for_reminder(item) {
            Ok(request) => registrar.add_geofence(&request).await,
            Err(err) => Err(err),
        };
        if let Err(err) = registered {
            warn!("event=geofence_add module=viewmodel status=error error={err}");
            self.base
                .publish(UiEvent::ShowSnackBarRes(StringRes::GeofencesNotAdded));
        }

        self.save_reminder(item).await;
        true
    }
}

impl Deref for SaveReminderViewModel {
    type Target = BaseViewModel;

    fn deref(&self) -> &Self::Target {
        &self.base
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |text| text.trim().is_empty())
}
