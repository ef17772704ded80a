//! Reminders list screen view-model.

use crate::data::result::DataResult;
use crate::data::source::ReminderDataSource;
use crate::model::reminder::Reminder;
use crate::viewmodel::base::{BaseViewModel, Destination, NavigationCommand, UiEvent};
use log::info;
use std::ops::Deref;
use std::sync::Arc;
use tokio::sync::watch;

pub struct RemindersListViewModel {
    base: BaseViewModel,
    data_source: Arc<dyn ReminderDataSource>,
    reminders_list: watch::Sender<Vec<Reminder>>,
}

impl RemindersListViewModel {
    pub fn new(data_source: Arc<dyn ReminderDataSource>) -> Self {
        let (reminders_list, _) = watch::channel(Vec::new());
        Self {
            base: BaseViewModel::new(),
            data_source,
            reminders_list,
        }
    }

    pub fn reminders_list(&self) -> watch::Receiver<Vec<Reminder>> {
        self.reminders_list.subscribe()
    }

    /// Snapshot of the currently published list.
    pub fn reminders(&self) -> Vec<Reminder> {
        self.reminders_list.borrow().clone()
    }

    /// Opens the save screen for a new reminder.
    pub fn navigate_to_add_reminder(&self) {
        self.base.publish(UiEvent::Navigate(NavigationCommand::To(
            Destination::SaveReminder,
        )));
    }

    /// Loads every reminder and publishes list, empty-state and error events.
    pub async fn load_reminders(&self) {
        self.base.set_loading(true);

        match self.data_source.get_reminders().await {
            DataResult::Success(reminders) => {
                info!(
                    "event=reminders_load module=viewmodel status=ok count={}",
                    reminders.len()
                );
                let empty = reminders.is_empty();
                self.reminders_list.send_replace(reminders);
                self.base.set_show_no_data(empty);
            }
            DataResult::Error(err) => {
                info!(
                    "event=reminders_load module=viewmodel status=error not_found={}",
                    err.is_not_found()
                );
                self.reminders_list.send_replace(Vec::new());
                self.base.set_show_no_data(true);
                self.base
                    .publish(UiEvent::ShowSnackBar(err.message().to_string()));
            }
        }

        self.base.set_loading(false);
    }
}

impl Deref for RemindersListViewModel {
    type Target = BaseViewModel;

    fn deref(&self) -> &Self::Target {
        &self.base
    }
}
