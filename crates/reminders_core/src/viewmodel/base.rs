//! Shared view-model state and UI event channel.

use crate::viewmodel::strings::StringRes;
use log::trace;
use tokio::sync::{broadcast, watch};

const UI_EVENT_CAPACITY: usize = 32;

/// Screens the view-models can navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    SaveReminder,
    SelectLocation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationCommand {
    To(Destination),
    Back,
}

/// One-shot UI event; each is consumed once by the observing screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    ShowSnackBar(String),
    ShowSnackBarRes(StringRes),
    ShowToast(StringRes),
    Navigate(NavigationCommand),
}

/// State common to every screen view-model.
pub struct BaseViewModel {
    show_loading: watch::Sender<bool>,
    show_no_data: watch::Sender<bool>,
    events: broadcast::Sender<UiEvent>,
}

impl Default for BaseViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl BaseViewModel {
    pub fn new() -> Self {
        let (show_loading, _) = watch::channel(false);
        let (show_no_data, _) = watch::channel(false);
        let (events, _) = broadcast::channel(UI_EVENT_CAPACITY);
        Self {
            show_loading,
            show_no_data,
            events,
        }
    }

    pub fn show_loading(&self) -> watch::Receiver<bool> {
        self.show_loading.subscribe()
    }

    pub fn show_no_data(&self) -> watch::Receiver<bool> {
        self.show_no_data.subscribe()
    }

    /// Subscribes to events published after this call.
    pub fn events(&self) -> broadcast::Receiver<UiEvent> {
        self.events.subscribe()
    }

    pub fn is_loading(&self) -> bool {
        *self.show_loading.borrow()
    }

    pub fn is_showing_no_data(&self) -> bool {
        *self.show_no_data.borrow()
    }

    pub(crate) fn set_loading(&self, value: bool) {
        self.show_loading.send_replace(value);
    }

    pub(crate) fn set_show_no_data(&self, value: bool) {
        self.show_no_data.send_replace(value);
    }

    /// Publishes an event; dropped silently when no screen is observing.
    pub fn publish(&self, event: UiEvent) {
        trace!("event=ui_event module=viewmodel kind={}", event_kind(&event));
        let _ = self.events.send(event);
    }
}

fn event_kind(event: &UiEvent) -> &'static str {
    match event {
        UiEvent::ShowSnackBar(_) => "snackbar",
        UiEvent::ShowSnackBarRes(_) => "snackbar_res",
        UiEvent::ShowToast(_) => "toast",
        UiEvent::Navigate(_) => "navigate",
    }
}
